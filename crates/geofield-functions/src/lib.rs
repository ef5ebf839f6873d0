//! Function objects that compute derived fields.
//!
//! - [`MoleFractions`]: species mole fractions from mass fractions and
//!   molecular weights, cached per time step.
//!
//! Species data comes from a [`SpeciesThermo`] implementation;
//! [`SpeciesTable`] is a plain in-memory one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mole_fractions;
pub mod thermo;

pub use mole_fractions::{mole_fractions, Calculation, MoleFractions, MoleFractionsConfig};
pub use thermo::{SpeciesTable, SpeciesThermo};
