//! Test fixtures and instrumented types for geofield development.
//!
//! - [`meshes`]: small meshes with known patch layouts.
//! - [`fixtures`]: patch fields that count how often they are driven,
//!   and helpers that build ready-to-use fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod meshes;

pub use fixtures::{scalar_field, CallCounts, CountingPatchField};
pub use meshes::{channel_mesh, shared, three_patch_mesh};
