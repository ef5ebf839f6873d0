//! Geometric fields for geofield.
//!
//! A [`GeometricField`] is a physical quantity discretised over a mesh:
//! an [`InternalField`] of interior values plus a [`BoundaryField`] that
//! holds one polymorphic [`PatchField`] per mesh patch. Each patch picks
//! its behavior by name through a [`PatchFieldSelector`] when the field
//! is built, so one field can mix fixed-value, zero-gradient, and
//! calculated patches.
//!
//! Fields carry a [`TimeIndex`](geofield_core::TimeIndex) stamp used by
//! consumers to skip recomputation, and every concrete instantiation has
//! a process-wide null sentinel available through
//! [`GeometricField::null`].
//!
//! # Topology changes
//!
//! [`GeometricField::update_mesh`] adopts a mesh produced by a
//! [`TopologyEdit`](geofield_mesh::TopologyEdit). Interior values follow
//! the element map, and boundary slots follow their patch identity, so a
//! removed patch loses its slot and an inserted patch gets a fresh one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod calculated;
pub mod fixed_value;
pub mod geometric;
pub mod internal;
mod null;
pub mod patch_field;
pub mod selector;
pub mod spec;
pub mod zero_gradient;

pub use boundary::{BoundaryField, BoundaryFieldMut, RebuildReport};
pub use calculated::Calculated;
pub use fixed_value::FixedValue;
pub use geometric::GeometricField;
pub use internal::InternalField;
pub use patch_field::{FvPatch, PatchFamily, PatchField, PointPatch};
pub use selector::{PatchContext, PatchFieldCtor, PatchFieldSelector};
pub use spec::{BoundarySpec, FieldConfig, InitialValues, PatchFieldSpec, PatchValue};
pub use zero_gradient::ZeroGradient;

use geofield_core::{Tensor, Vector};
use geofield_mesh::{PointMesh, VolMesh};

/// Type name of the [`Calculated`] patch field.
pub const CALCULATED: &str = "calculated";
/// Type name of the [`FixedValue`] patch field.
pub const FIXED_VALUE: &str = "fixedValue";
/// Type name of the [`ZeroGradient`] patch field.
pub const ZERO_GRADIENT: &str = "zeroGradient";

/// Cell-centred scalar field.
pub type VolScalarField = GeometricField<f64, FvPatch, VolMesh>;
/// Cell-centred vector field.
pub type VolVectorField = GeometricField<Vector, FvPatch, VolMesh>;
/// Cell-centred tensor field.
pub type VolTensorField = GeometricField<Tensor, FvPatch, VolMesh>;
/// Point scalar field.
pub type PointScalarField = GeometricField<f64, PointPatch, PointMesh>;
/// Point vector field.
pub type PointVectorField = GeometricField<Vector, PointPatch, PointMesh>;
