//! Mesh trait compliance test helpers.
//!
//! These functions verify that a Mesh implementation satisfies the
//! invariants fields rely on. Reused across mesh test modules.

use crate::mesh::Mesh;
use geofield_core::PatchId;
use indexmap::IndexSet;

/// Assert that patch names are unique and non-empty.
pub fn assert_patch_names_unique(mesh: &dyn Mesh) {
    let names: IndexSet<&str> = mesh.patches().iter().map(|p| p.name()).collect();
    assert_eq!(
        names.len(),
        mesh.patch_count(),
        "patch names are not unique: {names:?}"
    );
    assert!(
        names.iter().all(|n| !n.is_empty()),
        "empty patch name in {names:?}"
    );
}

/// Assert that patch identities are unique.
pub fn assert_patch_ids_unique(mesh: &dyn Mesh) {
    let ids: IndexSet<PatchId> = mesh.patches().iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), mesh.patch_count(), "duplicate patch ids");
}

/// Assert that every face cell and mesh point is in range.
pub fn assert_addressing_in_range(mesh: &dyn Mesh) {
    for patch in mesh.patches() {
        for &cell in patch.face_cells() {
            assert!(
                cell < mesh.cell_count(),
                "patch '{}' face cell {cell} >= cell_count {}",
                patch.name(),
                mesh.cell_count()
            );
        }
        for &point in patch.mesh_points() {
            assert!(
                point < mesh.point_count(),
                "patch '{}' point {point} >= point_count {}",
                patch.name(),
                mesh.point_count()
            );
        }
    }
}

/// Assert that name and identity lookups agree with the patch list.
pub fn assert_lookup_consistent(mesh: &dyn Mesh) {
    for (index, patch) in mesh.patches().iter().enumerate() {
        assert_eq!(mesh.find_patch(patch.name()), Some(index));
        assert_eq!(mesh.find_patch_id(patch.id()), Some(index));
    }
}

/// Run all compliance checks on a mesh.
pub fn run_full_compliance(mesh: &dyn Mesh) {
    assert_patch_names_unique(mesh);
    assert_patch_ids_unique(mesh);
    assert_addressing_in_range(mesh);
    assert_lookup_consistent(mesh);
}
