//! Description of how a topology edit moved elements and patches.

use geofield_core::{MeshInstanceId, PatchId};
use indexmap::IndexMap;

/// How a topology edit relates a new mesh to the one it replaced.
///
/// Produced by [`TopologyEdit::apply`](crate::TopologyEdit::apply).
/// Element maps run from new elements to old ones: `cell_map[new] ==
/// Some(old)` copies the old value, `None` marks an inserted element.
/// Patch identities are read from the meshes themselves; the map only
/// carries per-patch face maps and type hints for inserted patches.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshMap {
    source: MeshInstanceId,
    target: MeshInstanceId,
    cell_map: Option<Vec<Option<usize>>>,
    point_map: Option<Vec<Option<usize>>>,
    patch_map: Vec<Option<usize>>,
    face_maps: IndexMap<PatchId, Vec<Option<usize>>>,
    patch_types: IndexMap<PatchId, String>,
}

impl MeshMap {
    pub(crate) fn new(
        source: MeshInstanceId,
        target: MeshInstanceId,
        cell_map: Option<Vec<Option<usize>>>,
        point_map: Option<Vec<Option<usize>>>,
        patch_map: Vec<Option<usize>>,
        face_maps: IndexMap<PatchId, Vec<Option<usize>>>,
        patch_types: IndexMap<PatchId, String>,
    ) -> Self {
        Self {
            source,
            target,
            cell_map,
            point_map,
            patch_map,
            face_maps,
            patch_types,
        }
    }

    /// Instance ID of the mesh this map starts from.
    pub fn source(&self) -> MeshInstanceId {
        self.source
    }

    /// Instance ID of the mesh this map produces.
    pub fn target(&self) -> MeshInstanceId {
        self.target
    }

    /// New-cell to old-cell map, or `None` if cells were not renumbered.
    pub fn cell_map(&self) -> Option<&[Option<usize>]> {
        self.cell_map.as_deref()
    }

    /// New-point to old-point map, or `None` if points were not renumbered.
    pub fn point_map(&self) -> Option<&[Option<usize>]> {
        self.point_map.as_deref()
    }

    /// Old index of the patch now at `new_index`, or `None` for an inserted patch.
    ///
    /// # Panics
    ///
    /// Panics if `new_index` is not a patch index of the target mesh.
    pub fn old_patch_index(&self, new_index: usize) -> Option<usize> {
        self.patch_map[new_index]
    }

    /// New-face to old-face map for a resized patch.
    pub fn face_map(&self, patch: PatchId) -> Option<&[Option<usize>]> {
        self.face_maps.get(&patch).map(Vec::as_slice)
    }

    /// Patch field type requested for an inserted patch.
    pub fn patch_type_hint(&self, patch: PatchId) -> Option<&str> {
        self.patch_types.get(&patch).map(String::as_str)
    }
}

/// Map old values onto a new element numbering.
///
/// With a map, the output has one entry per map element, each copying its
/// source or taking `fill`. Without one, the old values are kept in place,
/// truncated or padded with `fill` to `new_len`.
///
/// # Examples
///
/// ```
/// use geofield_mesh::remap;
///
/// let old = [1.0, 2.0, 3.0];
/// assert_eq!(remap(&old, Some(&[Some(2), None, Some(0)][..]), 3, 0.0), vec![3.0, 0.0, 1.0]);
/// assert_eq!(remap(&old, None, 4, 9.0), vec![1.0, 2.0, 3.0, 9.0]);
/// ```
pub fn remap<T: Copy>(old: &[T], map: Option<&[Option<usize>]>, new_len: usize, fill: T) -> Vec<T> {
    match map {
        Some(map) => map
            .iter()
            .map(|src| src.and_then(|i| old.get(i).copied()).unwrap_or(fill))
            .collect(),
        None => {
            let mut out: Vec<T> = old.iter().copied().take(new_len).collect();
            out.resize(new_len, fill);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn remap_with_map_follows_sources() {
        let out = remap(&[10, 20, 30], Some(&[Some(1), Some(1), None][..]), 3, -1);
        assert_eq!(out, vec![20, 20, -1]);
    }

    #[test]
    fn remap_without_map_truncates() {
        assert_eq!(remap(&[1, 2, 3], None, 2, 0), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn identity_map_preserves_values(values in prop::collection::vec(-1e6f64..1e6, 0..64)) {
            let map: Vec<Option<usize>> = (0..values.len()).map(Some).collect();
            prop_assert_eq!(remap(&values, Some(&map), values.len(), 0.0), values.clone());
            prop_assert_eq!(remap(&values, None, values.len(), 0.0), values);
        }

        #[test]
        fn output_length_matches_request(
            values in prop::collection::vec(0i32..100, 0..32),
            new_len in 0usize..48,
        ) {
            prop_assert_eq!(remap(&values, None, new_len, 0).len(), new_len);
        }
    }
}
