//! Mesh topology for geofield.
//!
//! This crate defines the [`Mesh`] trait, the collaborator that supplies
//! element counts and the ordered patch list to fields, along with a
//! concrete [`PolyMesh`], the [`TopologyEdit`] builder that produces a new
//! mesh plus a [`MeshMap`], and the [`GeoMesh`] categories that decide
//! which mesh elements a field lives on.
//!
//! # Patch identity
//!
//! Every [`Patch`] carries a [`PatchId`](geofield_core::PatchId) that
//! survives renames, reorders, and resizes. Boundary fields rebuild by
//! matching these identities, never by raw position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geo;
pub mod map;
pub mod mesh;
pub mod null;
pub mod patch;
pub mod poly;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::MeshError;
pub use geo::{GeoMesh, PointMesh, VolMesh};
pub use map::{remap, MeshMap};
pub use mesh::Mesh;
pub use null::NullMesh;
pub use patch::{Patch, PatchDef, PatchKind};
pub use poly::{PolyMesh, TopologyEdit};
