//! The `calculated` patch field: values owned by whoever computes the field.

use crate::patch_field::{PatchFamily, PatchField};
use crate::selector::PatchContext;
use crate::spec::PatchFieldSpec;
use geofield_core::{FieldError, FieldValue};
use std::marker::PhantomData;

/// Boundary values set directly by the code that computes the field.
///
/// [`evaluate`](PatchField::evaluate) leaves the values untouched. Derived
/// fields use this type on every patch and write their boundary values
/// alongside the interior.
#[derive(Debug)]
pub struct Calculated<T, F> {
    values: Vec<T>,
    _family: PhantomData<fn() -> F>,
}

impl<T: FieldValue, F: PatchFamily> Calculated<T, F> {
    /// Create from explicit boundary values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            _family: PhantomData,
        }
    }

    /// Build from a spec: the supplied value if any, else the adjacent
    /// interior values.
    pub fn from_spec(spec: &PatchFieldSpec<T>, ctx: &PatchContext<'_, T>) -> Result<Self, FieldError> {
        let values = match &spec.value {
            Some(value) => value.expand(ctx.patch.name(), ctx.size)?,
            None => ctx.adjacent.to_vec(),
        };
        Ok(Self::new(values))
    }
}

impl<T, F> Clone for Calculated<T, F>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _family: PhantomData,
        }
    }
}

impl<T: FieldValue, F: PatchFamily> PatchField<T, F> for Calculated<T, F> {
    fn type_name(&self) -> &'static str {
        crate::CALCULATED
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn evaluate(&mut self, _adjacent: &[T]) {}

    fn auto_map(&mut self, face_map: Option<&[Option<usize>]>, new_size: usize) {
        self.values = geofield_mesh::remap(&self.values, face_map, new_size, T::zero());
    }

    fn clone_box(&self) -> Box<dyn PatchField<T, F>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FvPatch;

    #[test]
    fn evaluate_keeps_values() {
        let mut p = Calculated::<f64, FvPatch>::new(vec![1.0, 2.0]);
        p.evaluate(&[9.0, 9.0]);
        assert_eq!(p.values(), &[1.0, 2.0]);
    }

    #[test]
    fn auto_map_zero_fills_new_faces() {
        let mut p = Calculated::<f64, FvPatch>::new(vec![1.0, 2.0]);
        p.auto_map(Some(&[Some(1), None, Some(0)][..]), 3);
        assert_eq!(p.values(), &[2.0, 0.0, 1.0]);
    }
}
