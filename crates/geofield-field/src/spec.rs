//! Typed configuration for fields and their per-patch behaviors.
//!
//! [`FieldConfig`] is the builder-input for constructing a
//! [`GeometricField`](crate::GeometricField). [`BoundarySpec`] carries one
//! [`PatchFieldSpec`] per mesh patch, in patch order; constructors reject
//! specs whose length or patch names disagree with the mesh.

use geofield_core::{Dimensions, FieldError, FieldValue, TimeIndex};
use geofield_mesh::Mesh;

/// Boundary value supplied for a patch.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchValue<T> {
    /// The same value on every boundary element.
    Uniform(T),
    /// One value per boundary element.
    NonUniform(Vec<T>),
}

impl<T: FieldValue> PatchValue<T> {
    /// Expand to one value per boundary element of a patch of `size`.
    pub fn expand(&self, patch: &str, size: usize) -> Result<Vec<T>, FieldError> {
        match self {
            Self::Uniform(v) => Ok(vec![*v; size]),
            Self::NonUniform(values) if values.len() == size => Ok(values.clone()),
            Self::NonUniform(values) => Err(FieldError::ValueSizeMismatch {
                patch: patch.to_string(),
                expected: size,
                found: values.len(),
            }),
        }
    }
}

/// Behavior selection and parameters for one patch.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchFieldSpec<T> {
    /// Registered behavior name (e.g. `"fixedValue"`).
    pub type_name: String,
    /// Boundary value, required by some behaviors.
    pub value: Option<PatchValue<T>>,
}

impl<T: FieldValue> PatchFieldSpec<T> {
    /// A spec for `type_name` with no value.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: None,
        }
    }

    /// Attach a boundary value.
    pub fn with_value(mut self, value: PatchValue<T>) -> Self {
        self.value = Some(value);
        self
    }

    /// `calculated` with values taken from the adjacent interior.
    pub fn calculated() -> Self {
        Self::new(crate::CALCULATED)
    }

    /// `fixedValue` with a uniform value.
    pub fn fixed_value(value: T) -> Self {
        Self::new(crate::FIXED_VALUE).with_value(PatchValue::Uniform(value))
    }

    /// `zeroGradient`.
    pub fn zero_gradient() -> Self {
        Self::new(crate::ZERO_GRADIENT)
    }
}

/// Ordered per-patch specifications, one per mesh patch.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundarySpec<T> {
    /// `(patch name, spec)` pairs in mesh patch order.
    pub patches: Vec<(String, PatchFieldSpec<T>)>,
}

impl<T: FieldValue> BoundarySpec<T> {
    /// An empty spec; push entries with [`with_patch`](Self::with_patch).
    pub fn new() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    /// Append the spec for the next patch.
    pub fn with_patch(mut self, name: impl Into<String>, spec: PatchFieldSpec<T>) -> Self {
        self.patches.push((name.into(), spec));
        self
    }

    /// The same spec on every patch of `mesh`.
    pub fn uniform(mesh: &dyn Mesh, spec: PatchFieldSpec<T>) -> Self {
        Self {
            patches: mesh
                .patches()
                .iter()
                .map(|p| (p.name().to_string(), spec.clone()))
                .collect(),
        }
    }

    /// Check that this spec lines up with the mesh patch list.
    ///
    /// Returns `Err(PatchCountMismatch)` if the lengths differ and
    /// `Err(PatchNameMismatch)` for the first entry naming a different
    /// patch than the mesh at that index.
    pub fn validate(&self, mesh: &dyn Mesh) -> Result<(), FieldError> {
        if self.patches.len() != mesh.patch_count() {
            return Err(FieldError::PatchCountMismatch {
                expected: mesh.patch_count(),
                found: self.patches.len(),
            });
        }
        for (index, ((name, _), patch)) in self.patches.iter().zip(mesh.patches()).enumerate() {
            if name != patch.name() {
                return Err(FieldError::PatchNameMismatch {
                    index,
                    expected: patch.name().to_string(),
                    found: name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<T: FieldValue> Default for BoundarySpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial interior values.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialValues<T> {
    /// The same value on every interior element.
    Uniform(T),
    /// One value per interior element.
    List(Vec<T>),
}

/// Complete configuration for constructing a geometric field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig<T> {
    /// Field name, used as the registry key.
    pub name: String,
    /// Physical dimensions of the values.
    pub dimensions: Dimensions,
    /// Initial interior values.
    pub initial: InitialValues<T>,
    /// Per-patch behaviors, in mesh patch order.
    pub boundary: BoundarySpec<T>,
    /// Behavior for patches inserted by later topology changes.
    /// Default: `"calculated"`.
    pub default_patch_type: String,
    /// Initial time-index stamp. Default: [`TimeIndex::ZERO`].
    pub time_index: TimeIndex,
}

impl<T: FieldValue> FieldConfig<T> {
    /// A config with uniform interior values, no patch entries, and defaults.
    pub fn new(name: impl Into<String>, dimensions: Dimensions, value: T) -> Self {
        Self {
            name: name.into(),
            dimensions,
            initial: InitialValues::Uniform(value),
            boundary: BoundarySpec::new(),
            default_patch_type: crate::CALCULATED.to_string(),
            time_index: TimeIndex::ZERO,
        }
    }

    /// Replace the boundary spec.
    pub fn with_boundary(mut self, boundary: BoundarySpec<T>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the initial interior values.
    pub fn with_initial(mut self, initial: InitialValues<T>) -> Self {
        self.initial = initial;
        self
    }

    /// Set the initial time-index stamp.
    pub fn with_time_index(mut self, time_index: TimeIndex) -> Self {
        self.time_index = time_index;
        self
    }
}
