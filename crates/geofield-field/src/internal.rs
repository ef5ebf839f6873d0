//! Dense, dimension-tagged storage for interior values.

use geofield_core::{Dimensions, FieldValue};
use std::ops::{Index, IndexMut};

/// One value per interior mesh element, tagged with physical dimensions.
///
/// The length is fixed by the mesh; only topology changes applied through
/// the owning field resize it.
#[derive(Clone, Debug, PartialEq)]
pub struct InternalField<T> {
    values: Vec<T>,
    dimensions: Dimensions,
}

impl<T: FieldValue> InternalField<T> {
    /// Wrap existing values.
    pub fn new(values: Vec<T>, dimensions: Dimensions) -> Self {
        Self { values, dimensions }
    }

    /// `len` copies of `value`.
    pub fn uniform(len: usize, value: T, dimensions: Dimensions) -> Self {
        Self::new(vec![value; len], dimensions)
    }

    /// Number of interior values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no interior values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Physical dimensions of the values.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// The values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterate over the values in element order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Set every value to `value`.
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    pub(crate) fn replace_values(&mut self, values: Vec<T>) {
        self.values = values;
    }
}

impl<T> Index<usize> for InternalField<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for InternalField<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a InternalField<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_and_index() {
        let mut f = InternalField::uniform(4, 1.0, Dimensions::PRESSURE);
        assert_eq!(f.len(), 4);
        f[2] = 5.0;
        assert_eq!(f.as_slice(), &[1.0, 1.0, 5.0, 1.0]);
        assert_eq!(f.dimensions(), Dimensions::PRESSURE);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let f = InternalField::uniform(2, 0.0, Dimensions::DIMENSIONLESS);
        let _ = f[2];
    }

    #[test]
    fn fill_overwrites_all() {
        let mut f = InternalField::new(vec![1.0, 2.0], Dimensions::DIMENSIONLESS);
        f.fill(0.5);
        assert!(f.iter().all(|&v| v == 0.5));
    }
}
