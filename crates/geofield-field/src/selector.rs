//! Run-time selection of patch field behaviors by type name.

use crate::calculated::Calculated;
use crate::fixed_value::FixedValue;
use crate::patch_field::{PatchFamily, PatchField};
use crate::spec::PatchFieldSpec;
use crate::zero_gradient::ZeroGradient;
use geofield_core::{FieldError, FieldValue};
use geofield_mesh::Patch;
use indexmap::IndexMap;
use std::fmt;

/// What a patch field constructor knows about the patch it is built for.
#[derive(Clone, Copy, Debug)]
pub struct PatchContext<'a, T> {
    /// The mesh patch.
    pub patch: &'a Patch,
    /// Number of boundary values the slot must hold.
    pub size: usize,
    /// Interior values adjacent to each boundary value.
    pub adjacent: &'a [T],
}

/// Constructor registered under a patch field type name.
pub type PatchFieldCtor<T, F> =
    fn(&PatchFieldSpec<T>, &PatchContext<'_, T>) -> Result<Box<dyn PatchField<T, F>>, FieldError>;

/// Table of patch field constructors keyed by type name.
///
/// [`with_builtins`](Self::with_builtins) (also the `Default`) registers
/// `calculated`, `fixedValue`, and `zeroGradient`. Further behaviors are
/// added with [`register`](Self::register).
pub struct PatchFieldSelector<T: FieldValue, F: PatchFamily> {
    ctors: IndexMap<&'static str, PatchFieldCtor<T, F>>,
}

impl<T: FieldValue, F: PatchFamily> PatchFieldSelector<T, F> {
    /// An empty selector.
    pub fn new() -> Self {
        Self {
            ctors: IndexMap::new(),
        }
    }

    /// A selector with the built-in behaviors registered.
    pub fn with_builtins() -> Self {
        let mut selector = Self::new();
        selector.register(crate::CALCULATED, build_calculated::<T, F>);
        selector.register(crate::FIXED_VALUE, build_fixed_value::<T, F>);
        selector.register(crate::ZERO_GRADIENT, build_zero_gradient::<T, F>);
        selector
    }

    /// Register `ctor` under `type_name`, returning the constructor it replaced.
    pub fn register(
        &mut self,
        type_name: &'static str,
        ctor: PatchFieldCtor<T, F>,
    ) -> Option<PatchFieldCtor<T, F>> {
        self.ctors.insert(type_name, ctor)
    }

    /// Whether a behavior is registered under `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.ctors.contains_key(type_name)
    }

    /// Registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ctors.keys().copied()
    }

    /// Construct the slot described by `spec` for the patch in `ctx`.
    ///
    /// Returns `Err(FieldError::UnknownPatchType)` for an unregistered
    /// type name, any error the constructor reports, or
    /// `Err(FieldError::ValueSizeMismatch)` if the constructor produced a
    /// slot of the wrong size.
    pub fn construct(
        &self,
        spec: &PatchFieldSpec<T>,
        ctx: &PatchContext<'_, T>,
    ) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
        let ctor = self
            .ctors
            .get(spec.type_name.as_str())
            .ok_or_else(|| FieldError::UnknownPatchType {
                patch: ctx.patch.name().to_string(),
                type_name: spec.type_name.clone(),
            })?;
        let field = ctor(spec, ctx)?;
        if field.len() != ctx.size {
            return Err(FieldError::ValueSizeMismatch {
                patch: ctx.patch.name().to_string(),
                expected: ctx.size,
                found: field.len(),
            });
        }
        Ok(field)
    }
}

impl<T: FieldValue, F: PatchFamily> Default for PatchFieldSelector<T, F> {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<T: FieldValue, F: PatchFamily> Clone for PatchFieldSelector<T, F> {
    fn clone(&self) -> Self {
        Self {
            ctors: self.ctors.clone(),
        }
    }
}

impl<T: FieldValue, F: PatchFamily> fmt::Debug for PatchFieldSelector<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatchFieldSelector")
            .field("family", &F::NAME)
            .field("value", &T::TYPE_NAME)
            .field("types", &self.ctors.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn build_calculated<T: FieldValue, F: PatchFamily>(
    spec: &PatchFieldSpec<T>,
    ctx: &PatchContext<'_, T>,
) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
    Ok(Box::new(Calculated::<T, F>::from_spec(spec, ctx)?))
}

fn build_fixed_value<T: FieldValue, F: PatchFamily>(
    spec: &PatchFieldSpec<T>,
    ctx: &PatchContext<'_, T>,
) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
    Ok(Box::new(FixedValue::<T, F>::from_spec(spec, ctx)?))
}

fn build_zero_gradient<T: FieldValue, F: PatchFamily>(
    spec: &PatchFieldSpec<T>,
    ctx: &PatchContext<'_, T>,
) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
    Ok(Box::new(ZeroGradient::<T, F>::from_spec(spec, ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::PatchValue;
    use crate::FvPatch;
    use geofield_mesh::Mesh;
    use geofield_test_utils::meshes::three_patch_mesh;

    fn short_ctor(
        _spec: &PatchFieldSpec<f64>,
        _ctx: &PatchContext<'_, f64>,
    ) -> Result<Box<dyn PatchField<f64, FvPatch>>, FieldError> {
        Ok(Box::new(Calculated::<f64, FvPatch>::new(Vec::new())))
    }

    #[test]
    fn builtins_are_registered_in_order() {
        let selector = PatchFieldSelector::<f64, FvPatch>::default();
        let names: Vec<_> = selector.type_names().collect();
        assert_eq!(names, vec!["calculated", "fixedValue", "zeroGradient"]);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mesh = three_patch_mesh();
        let ctx = PatchContext {
            patch: &mesh.patches()[1],
            size: 1,
            adjacent: &[0.0],
        };
        let err = PatchFieldSelector::<f64, FvPatch>::default()
            .construct(&PatchFieldSpec::new("slip"), &ctx)
            .unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownPatchType {
                patch: "outlet".into(),
                type_name: "slip".into()
            }
        );
    }

    #[test]
    fn constructs_with_value() {
        let mesh = three_patch_mesh();
        let ctx = PatchContext {
            patch: &mesh.patches()[0],
            size: 1,
            adjacent: &[0.0],
        };
        let slot = PatchFieldSelector::<f64, FvPatch>::default()
            .construct(
                &PatchFieldSpec::new("fixedValue").with_value(PatchValue::Uniform(3.0)),
                &ctx,
            )
            .unwrap();
        assert_eq!(slot.type_name(), "fixedValue");
        assert_eq!(slot.values(), &[3.0]);
    }

    #[test]
    fn wrong_sized_slot_is_rejected() {
        let mesh = three_patch_mesh();
        let mut selector = PatchFieldSelector::<f64, FvPatch>::new();
        assert!(selector.register("short", short_ctor).is_none());
        let ctx = PatchContext {
            patch: &mesh.patches()[0],
            size: 1,
            adjacent: &[0.0],
        };
        let err = selector
            .construct(&PatchFieldSpec::new("short"), &ctx)
            .unwrap_err();
        assert!(matches!(err, FieldError::ValueSizeMismatch { expected: 1, found: 0, .. }));
    }
}
