//! Object registry and function objects for geofield.
//!
//! The [`ObjectRegistry`] owns named objects (usually fields) and the
//! [`RunTime`] clock whose [`TimeIndex`](geofield_core::TimeIndex) fields
//! are stamped with. [`FunctionObject`]s run against the registry once
//! per time step, reading fields by name and storing derived ones.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod function_object;
pub mod registry;
pub mod time;

pub use error::{FunctionObjectError, RegistryError};
pub use function_object::{FunctionObject, FunctionObjectList};
pub use registry::{ObjectRegistry, RegisteredObject};
pub use time::RunTime;
