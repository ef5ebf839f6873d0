//! The `zeroGradient` patch field.

use crate::patch_field::{PatchFamily, PatchField};
use crate::selector::PatchContext;
use crate::spec::PatchFieldSpec;
use geofield_core::{FieldError, FieldValue};
use std::marker::PhantomData;

/// Boundary values equal to the adjacent interior values.
#[derive(Debug)]
pub struct ZeroGradient<T, F> {
    values: Vec<T>,
    _family: PhantomData<fn() -> F>,
}

impl<T: FieldValue, F: PatchFamily> ZeroGradient<T, F> {
    /// Create from explicit boundary values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            _family: PhantomData,
        }
    }

    /// Build from a spec. Values start as the adjacent interior values
    /// unless the spec supplies its own.
    pub fn from_spec(spec: &PatchFieldSpec<T>, ctx: &PatchContext<'_, T>) -> Result<Self, FieldError> {
        let values = match &spec.value {
            Some(value) => value.expand(ctx.patch.name(), ctx.size)?,
            None => ctx.adjacent.to_vec(),
        };
        Ok(Self::new(values))
    }
}

impl<T: Clone, F> Clone for ZeroGradient<T, F> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _family: PhantomData,
        }
    }
}

impl<T: FieldValue, F: PatchFamily> PatchField<T, F> for ZeroGradient<T, F> {
    fn type_name(&self) -> &'static str {
        crate::ZERO_GRADIENT
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn evaluate(&mut self, adjacent: &[T]) {
        debug_assert_eq!(adjacent.len(), self.values.len());
        self.values.clear();
        self.values.extend_from_slice(adjacent);
    }

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
    use crate::{FvPatch, PointPatch};
    use geofield_core::Vector;

    #[test]
    fn evaluate_copies_adjacent() {
        let mut p = ZeroGradient::<f64, FvPatch>::new(vec![0.0; 3]);
        p.evaluate(&[1.0, 2.0, 3.0]);
        assert_eq!(p.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn works_for_vectors_on_points() {
        let a = Vector::new(1.0, 0.0, 0.0);
        let mut p = ZeroGradient::<Vector, PointPatch>::new(vec![Vector::zero(); 2]);
        p.evaluate(&[a, a]);
        assert_eq!(p.values(), &[a, a]);
    }
}
