//! geofield: physical fields discretised over a mesh.
//!
//! This is the facade crate that re-exports the public API of the geofield
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use geofield::prelude::*;
//! use std::sync::Arc;
//!
//! // A two-cell mesh with a patch at each end.
//! let mesh: Arc<dyn Mesh> = Arc::new(
//!     PolyMesh::new(
//!         2,
//!         3,
//!         vec![PatchDef::new("left", vec![0]), PatchDef::new("right", vec![1])],
//!     )
//!     .unwrap(),
//! );
//!
//! // Fixed value on the left, zero gradient on the right.
//! let boundary = BoundarySpec::new()
//!     .with_patch("left", PatchFieldSpec::fixed_value(300.0))
//!     .with_patch("right", PatchFieldSpec::zero_gradient());
//! let config = FieldConfig::new("T", Dimensions::TEMPERATURE, 290.0).with_boundary(boundary);
//! let mut t = VolScalarField::new(mesh, config, &PatchFieldSelector::default()).unwrap();
//!
//! t.internal_field_mut()[1] = 310.0;
//! t.correct_boundary_conditions();
//! assert_eq!(t.boundary_field()[0].values(), &[300.0]);
//! assert_eq!(t.boundary_field()[1].values(), &[310.0]);
//!
//! let mut registry = ObjectRegistry::default();
//! *t.time_index_mut() = registry.time_mut().advance(0.1);
//! registry.store(t).unwrap();
//! assert_eq!(registry.lookup::<VolScalarField>("T").unwrap().time_index(), TimeIndex(1));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `geofield-core` | ids, dimensions, value types, `FieldError` |
//! | [`mesh`] | `geofield-mesh` | `Mesh` trait, `PolyMesh`, topology edits |
//! | [`field`] | `geofield-field` | `GeometricField`, boundary slots, patch fields |
//! | [`registry`] | `geofield-registry` | object registry, clock, function objects |
//! | [`functions`] | `geofield-functions` | derived-field function objects |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, dimensions, value types, and errors (`geofield-core`).
pub use geofield_core as types;

/// Mesh topology and topology edits (`geofield-mesh`).
///
/// [`mesh::PolyMesh`] is the concrete mesh; [`mesh::PolyMesh::edit`]
/// produces new meshes together with a [`mesh::MeshMap`].
pub use geofield_mesh as mesh;

/// Geometric fields and boundary conditions (`geofield-field`).
pub use geofield_field as field;

/// Object registry, run-time clock, and function objects (`geofield-registry`).
pub use geofield_registry as registry;

/// Derived-field function objects (`geofield-functions`).
///
/// Includes [`functions::MoleFractions`].
pub use geofield_functions as functions;

/// Common imports for typical geofield usage.
///
/// ```rust
/// use geofield::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use geofield_core::{Dimensions, FieldError, FieldValue, TimeIndex, Tensor, Vector};

    // Mesh
    pub use geofield_mesh::{Mesh, MeshMap, PatchDef, PatchKind, PolyMesh};

    // Fields
    pub use geofield_field::{
        BoundaryField, BoundarySpec, FieldConfig, GeometricField, InitialValues, PatchField,
        PatchFieldSelector, PatchFieldSpec, PatchValue, PointScalarField, PointVectorField,
        VolScalarField, VolTensorField, VolVectorField,
    };

    // Registry
    pub use geofield_registry::{
        FunctionObject, FunctionObjectError, FunctionObjectList, ObjectRegistry, RunTime,
    };

    // Function objects
    pub use geofield_functions::{MoleFractions, MoleFractionsConfig, SpeciesTable, SpeciesThermo};
}
