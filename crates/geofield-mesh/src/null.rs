//! The mesh behind null field sentinels.

use crate::mesh::Mesh;
use crate::patch::Patch;
use geofield_core::MeshInstanceId;

/// A mesh with no cells, no points, and no patches.
///
/// Used only as the back-reference of null field sentinels, which must
/// be complete objects without describing any real geometry.
#[derive(Debug)]
pub struct NullMesh {
    instance_id: MeshInstanceId,
}

impl NullMesh {
    /// Create a null mesh with its own instance ID.
    pub fn new() -> Self {
        Self {
            instance_id: MeshInstanceId::next(),
        }
    }
}

impl Default for NullMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh for NullMesh {
    fn cell_count(&self) -> usize {
        0
    }

    fn point_count(&self) -> usize {
        0
    }

    fn patches(&self) -> &[Patch] {
        &[]
    }

    fn instance_id(&self) -> MeshInstanceId {
        self.instance_id
    }

    fn topology_revision(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_mesh_is_empty() {
        let mesh = NullMesh::new();
        assert_eq!(mesh.cell_count(), 0);
        assert_eq!(mesh.patch_count(), 0);
        assert_eq!(mesh.find_patch("anything"), None);
    }

    #[test]
    fn downcast_from_dyn() {
        let mesh = NullMesh::new();
        let dyn_mesh: &dyn Mesh = &mesh;
        assert!(dyn_mesh.downcast_ref::<NullMesh>().is_some());
        assert!(dyn_mesh.downcast_ref::<crate::PolyMesh>().is_none());
    }
}
