//! Benchmark profiles for geofield.
//!
//! - [`channel_profile`]: a one-dimensional channel mesh of a given size.
//! - [`mixture_registry`]: a registry holding mass-fraction fields for an
//!   `n`-species mixture on such a mesh.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geofield_core::Dimensions;
use geofield_field::{
    BoundarySpec, FieldConfig, InitialValues, PatchFieldSelector, PatchFieldSpec, VolScalarField,
};
use geofield_functions::SpeciesTable;
use geofield_mesh::{Mesh, PatchDef, PatchKind, PolyMesh};
use geofield_registry::ObjectRegistry;
use std::sync::Arc;

/// A channel of `cells` cells with `inlet`, `outlet`, and `walls` patches.
///
/// `walls` touches every cell, so boundary work scales with the interior.
pub fn channel_profile(cells: usize) -> PolyMesh {
    PolyMesh::new(
        cells,
        cells + 1,
        vec![
            PatchDef::new("inlet", vec![0]).with_points(vec![0]),
            PatchDef::new("outlet", vec![cells - 1]).with_points(vec![cells]),
            PatchDef::new("walls", (0..cells).collect()).with_kind(PatchKind::Wall),
        ],
    )
    .expect("channel profile is a valid mesh")
}

/// Species `S0..S{n}` with weights `2, 4, 6, ...`.
pub fn species_table(species: usize) -> SpeciesTable {
    SpeciesTable::new((0..species).map(|i| (format!("S{i}"), 2.0 * (i + 1) as f64)))
        .expect("generated species are valid")
}

/// A registry with one zero-gradient mass-fraction field per species of
/// [`species_table`], on a [`channel_profile`] mesh. Mass fractions vary
/// by cell and sum to one.
pub fn mixture_registry(cells: usize, species: usize) -> ObjectRegistry {
    let mesh: Arc<dyn Mesh> = Arc::new(channel_profile(cells));
    let selector = PatchFieldSelector::default();
    let mut registry = ObjectRegistry::default();
    for i in 0..species {
        let values: Vec<f64> = (0..cells)
            .map(|c| if (c + i) % species == 0 { 0.5 } else { 0.5 / (species - 1).max(1) as f64 })
            .collect();
        let config = FieldConfig::new(format!("S{i}"), Dimensions::DIMENSIONLESS, 0.0)
            .with_initial(InitialValues::List(values))
            .with_boundary(BoundarySpec::uniform(mesh.as_ref(), PatchFieldSpec::zero_gradient()));
        let field = VolScalarField::new(Arc::clone(&mesh), config, &selector)
            .expect("mixture field matches the mesh");
        registry.store(field).expect("species names are unique");
    }
    registry
}
