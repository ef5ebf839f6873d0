//! Mesh categories: which mesh elements a field's values live on.

use crate::map::MeshMap;
use crate::mesh::Mesh;
use crate::patch::Patch;

/// Selects the mesh elements a field is discretised over.
///
/// The category decides the interior size, the size of each patch's
/// boundary values, which interior elements sit next to each boundary
/// element, and which element map applies after a topology edit.
pub trait GeoMesh: Send + Sync + 'static {
    /// Category name for diagnostics.
    const NAME: &'static str;

    /// Number of interior elements.
    fn size(mesh: &dyn Mesh) -> usize;

    /// Number of boundary values on a patch.
    fn patch_size(patch: &Patch) -> usize;

    /// Interior element adjacent to each boundary value of a patch.
    fn patch_addressing(patch: &Patch) -> &[usize];

    /// Map from new interior elements to old ones, if the edit renumbered them.
    fn element_map(map: &MeshMap) -> Option<&[Option<usize>]>;
}

/// Cell-centred values; boundary values live on patch faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolMesh;

impl GeoMesh for VolMesh {
    const NAME: &'static str = "volMesh";

    fn size(mesh: &dyn Mesh) -> usize {
        mesh.cell_count()
    }

    fn patch_size(patch: &Patch) -> usize {
        patch.face_count()
    }

    fn patch_addressing(patch: &Patch) -> &[usize] {
        patch.face_cells()
    }

    fn element_map(map: &MeshMap) -> Option<&[Option<usize>]> {
        map.cell_map()
    }
}

/// Point values; boundary values live on patch points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointMesh;

impl GeoMesh for PointMesh {
    const NAME: &'static str = "pointMesh";

    fn size(mesh: &dyn Mesh) -> usize {
        mesh.point_count()
    }

    fn patch_size(patch: &Patch) -> usize {
        patch.point_count()
    }

    fn patch_addressing(patch: &Patch) -> &[usize] {
        patch.mesh_points()
    }

    fn element_map(map: &MeshMap) -> Option<&[Option<usize>]> {
        map.point_map()
    }
}
