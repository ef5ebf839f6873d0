//! Core types for the geofield mesh-field framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, physical dimension tags, value types, and the
//! construction error shared by the mesh, field, and registry crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimensions;
pub mod error;
pub mod id;
pub mod value;

pub use dimensions::Dimensions;
pub use error::FieldError;
pub use id::{MeshInstanceId, ObjectId, PatchId, TimeIndex};
pub use value::{FieldValue, Tensor, Vector};
