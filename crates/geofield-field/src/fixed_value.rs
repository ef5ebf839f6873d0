//! The `fixedValue` patch field.

use crate::patch_field::{PatchFamily, PatchField};
use crate::selector::PatchContext;
use crate::spec::PatchFieldSpec;
use geofield_core::{FieldError, FieldValue};
use std::marker::PhantomData;

/// Prescribed boundary values that evaluation never overwrites.
#[derive(Debug)]
pub struct FixedValue<T, F> {
    values: Vec<T>,
    _family: PhantomData<fn() -> F>,
}

impl<T: FieldValue, F: PatchFamily> FixedValue<T, F> {
    /// Create from explicit boundary values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            _family: PhantomData,
        }
    }

    /// Build from a spec.
    ///
    /// Returns `Err(FieldError::MissingValue)` if the spec carries no
    /// value, or `Err(FieldError::ValueSizeMismatch)` if a non-uniform
    /// value has the wrong length.
    pub fn from_spec(spec: &PatchFieldSpec<T>, ctx: &PatchContext<'_, T>) -> Result<Self, FieldError> {
        let value = spec.value.as_ref().ok_or_else(|| FieldError::MissingValue {
            patch: ctx.patch.name().to_string(),
            type_name: crate::FIXED_VALUE.to_string(),
        })?;
        Ok(Self::new(value.expand(ctx.patch.name(), ctx.size)?))
    }
}

impl<T: Clone, F> Clone for FixedValue<T, F> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _family: PhantomData,
        }
    }
}

impl<T: FieldValue, F: PatchFamily> PatchField<T, F> for FixedValue<T, F> {
    fn type_name(&self) -> &'static str {
        crate::FIXED_VALUE
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn fixes_value(&self) -> bool {
        true
    }

    fn evaluate(&mut self, _adjacent: &[T]) {}

    fn auto_map(&mut self, face_map: Option<&[Option<usize>]>, new_size: usize) {
        self.values = geofield_mesh::remap(&self.values, face_map, new_size, T::zero());
    }

    fn clone_box(&self) -> Box<dyn PatchField<T, F>> {
        Box::new(self.clone())
    }
}
