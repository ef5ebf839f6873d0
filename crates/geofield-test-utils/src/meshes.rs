//! Small meshes with known patch layouts.

use geofield_mesh::{Mesh, PatchDef, PatchKind, PolyMesh};
use std::sync::Arc;

/// Four cells, ten points, three patches:
///
/// | index | name     | face cells     | points  |
/// |-------|----------|----------------|---------|
/// | 0     | `inlet`  | `[0]`          | `[0, 1]`|
/// | 1     | `outlet` | `[3]`          | `[8, 9]`|
/// | 2     | `walls`  | `[0, 1, 2, 3]` | none    |
pub fn three_patch_mesh() -> PolyMesh {
    PolyMesh::new(
        4,
        10,
        vec![
            PatchDef::new("inlet", vec![0]).with_points(vec![0, 1]),
            PatchDef::new("outlet", vec![3]).with_points(vec![8, 9]),
            PatchDef::new("walls", vec![0, 1, 2, 3]).with_kind(PatchKind::Wall),
        ],
    )
    .unwrap()
}

/// A one-dimensional channel of `cells` cells with `inlet`, `outlet`,
/// and a `walls` patch touching every cell.
///
/// Point `i` sits on the left face of cell `i`, so there are `cells + 1`
/// points.
///
/// # Panics
///
/// Panics if `cells == 0`.
pub fn channel_mesh(cells: usize) -> PolyMesh {
    assert!(cells > 0, "channel needs at least one cell");
    PolyMesh::new(
        cells,
        cells + 1,
        vec![
            PatchDef::new("inlet", vec![0]).with_points(vec![0]),
            PatchDef::new("outlet", vec![cells - 1]).with_points(vec![cells]),
            PatchDef::new("walls", (0..cells).collect())
                .with_kind(PatchKind::Wall)
                .with_points((0..=cells).collect()),
        ],
    )
    .unwrap()
}

/// Wrap a mesh for sharing between fields.
pub fn shared(mesh: PolyMesh) -> Arc<dyn Mesh> {
    Arc::new(mesh)
}
