//! The [`PatchField`] trait and the [`PatchFamily`] markers.
//!
//! One `PatchField` trait object sits in each boundary slot. The concrete
//! behavior is chosen per patch at construction time, so a single field
//! can mix fixed-value, zero-gradient, and calculated patches.

use geofield_core::FieldValue;
use geofield_mesh::{GeoMesh, Patch, PointMesh, VolMesh};
use std::fmt;

/// A family of boundary-condition behaviors tied to one mesh category.
///
/// Fields pair a family with the mesh category it discretises over, so a
/// finite-volume patch field can never end up on a point field.
pub trait PatchFamily: Send + Sync + fmt::Debug + 'static {
    /// Mesh category whose boundary this family describes.
    type Geo: GeoMesh;

    /// Family name for diagnostics.
    const NAME: &'static str;
}

/// Finite-volume patch fields: boundary values on patch faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FvPatch;

impl PatchFamily for FvPatch {
    type Geo = VolMesh;
    const NAME: &'static str = "fvPatchField";
}

/// Point patch fields: boundary values on patch points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointPatch;

impl PatchFamily for PointPatch {
    type Geo = PointMesh;
    const NAME: &'static str = "pointPatchField";
}

/// Boundary values and behavior for one patch.
///
/// # Contract
///
/// - `values().len()` equals the patch size for the field's mesh category
///   at all times outside of [`auto_map`](Self::auto_map).
/// - [`evaluate`](Self::evaluate) receives exactly one adjacent interior
///   value per boundary value.
///
/// # Object safety
///
/// This trait is object-safe; boundary fields store slots as
/// `Box<dyn PatchField<T, F>>`.
///
/// # Examples
///
/// A patch field that clamps its boundary values to the adjacent interior
/// value plus an offset:
///
/// ```
/// use geofield_field::{FvPatch, PatchField};
///
/// #[derive(Clone, Debug)]
/// struct Offset {
///     values: Vec<f64>,
///     offset: f64,
/// }
///
/// impl PatchField<f64, FvPatch> for Offset {
///     fn type_name(&self) -> &'static str { "offset" }
///     fn values(&self) -> &[f64] { &self.values }
///     fn values_mut(&mut self) -> &mut [f64] { &mut self.values }
///     fn evaluate(&mut self, adjacent: &[f64]) {
///         for (v, a) in self.values.iter_mut().zip(adjacent) {
///             *v = a + self.offset;
///         }
///     }
///     fn auto_map(&mut self, face_map: Option<&[Option<usize>]>, new_size: usize) {
///         self.values = geofield_mesh::remap(&self.values, face_map, new_size, 0.0);
///     }
///     fn clone_box(&self) -> Box<dyn PatchField<f64, FvPatch>> {
///         Box::new(self.clone())
///     }
/// }
///
/// let mut p = Offset { values: vec![0.0; 2], offset: 1.0 };
/// p.evaluate(&[3.0, 4.0]);
/// assert_eq!(p.values(), &[4.0, 5.0]);
/// ```
pub trait PatchField<T: FieldValue, F: PatchFamily>: Send + Sync + fmt::Debug {
    /// Name under which this behavior is registered in a selector.
    fn type_name(&self) -> &'static str;

    /// Current boundary values.
    fn values(&self) -> &[T];

    /// Mutable boundary values.
    fn values_mut(&mut self) -> &mut [T];

    /// Number of boundary values.
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns `true` if the patch has no boundary values.
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Whether this behavior prescribes the boundary value (Dirichlet-like).
    fn fixes_value(&self) -> bool {
        false
    }

    /// Recompute boundary values from the adjacent interior values.
    fn evaluate(&mut self, adjacent: &[T]);

    /// Adapt to a topology change of the patch.
    ///
    /// `face_map[new] == Some(old)` carries a value across; without a map
    /// values are kept in place, truncated or padded to `new_size`.
    fn auto_map(&mut self, face_map: Option<&[Option<usize>]>, new_size: usize);

    /// React to mesh point motion. The topology is unchanged.
    ///
    /// Default: no-op.
    fn move_points(&mut self, _patch: &Patch) {}

    /// Clone into a new boxed trait object.
    fn clone_box(&self) -> Box<dyn PatchField<T, F>>;
}

impl<T: FieldValue, F: PatchFamily> Clone for Box<dyn PatchField<T, F>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Gather the interior values adjacent to each boundary value of a patch.
pub(crate) fn adjacent_values<T: FieldValue, M: GeoMesh>(patch: &Patch, internal: &[T]) -> Vec<T> {
    M::patch_addressing(patch)
        .iter()
        .map(|&i| internal[i])
        .collect()
}
