//! Polyhedral mesh with named patches and the topology-edit builder.

use crate::error::MeshError;
use crate::map::MeshMap;
use crate::mesh::Mesh;
use crate::patch::{Patch, PatchDef};
use geofield_core::{MeshInstanceId, PatchId};
use indexmap::{IndexMap, IndexSet};

/// A polyhedral mesh described by its cell and point counts and its
/// ordered boundary patches.
///
/// Interior connectivity is not stored: fields only need element counts
/// and, per patch, the interior element next to each boundary value.
///
/// # Examples
///
/// ```
/// use geofield_mesh::{Mesh, PatchDef, PolyMesh};
///
/// let mesh = PolyMesh::new(
///     4,
///     10,
///     vec![
///         PatchDef::new("inlet", vec![0]),
///         PatchDef::new("outlet", vec![3]),
///     ],
/// )
/// .unwrap();
/// assert_eq!(mesh.patch_count(), 2);
/// assert_eq!(mesh.find_patch("outlet"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct PolyMesh {
    cell_count: usize,
    point_count: usize,
    patches: Vec<Patch>,
    instance_id: MeshInstanceId,
    revision: u64,
}

impl PolyMesh {
    /// Create a mesh. Each patch gets a fresh [`PatchId`].
    ///
    /// Returns `Err(MeshError::EmptyMesh)` if `cell_count == 0`, or a
    /// patch error if names are empty or repeated, or if face/point
    /// addressing is out of range.
    pub fn new(
        cell_count: usize,
        point_count: usize,
        patches: Vec<PatchDef>,
    ) -> Result<Self, MeshError> {
        let patches = patches
            .into_iter()
            .map(|def| Patch::from_def(PatchId::next(), def))
            .collect();
        Self::build(cell_count, point_count, patches, 0)
    }

    fn build(
        cell_count: usize,
        point_count: usize,
        patches: Vec<Patch>,
        revision: u64,
    ) -> Result<Self, MeshError> {
        if cell_count == 0 {
            return Err(MeshError::EmptyMesh);
        }
        let mut names = IndexSet::with_capacity(patches.len());
        for (index, patch) in patches.iter().enumerate() {
            if patch.name().is_empty() {
                return Err(MeshError::EmptyPatchName { index });
            }
            if !names.insert(patch.name()) {
                return Err(MeshError::DuplicatePatchName {
                    name: patch.name().to_string(),
                });
            }
            for (face, &cell) in patch.face_cells().iter().enumerate() {
                if cell >= cell_count {
                    return Err(MeshError::FaceCellOutOfRange {
                        patch: patch.name().to_string(),
                        face,
                        cell,
                        cell_count,
                    });
                }
            }
            if let Some(&point) = patch.mesh_points().iter().find(|&&p| p >= point_count) {
                return Err(MeshError::MeshPointOutOfRange {
                    patch: patch.name().to_string(),
                    point,
                    point_count,
                });
            }
        }
        Ok(Self {
            cell_count,
            point_count,
            patches,
            instance_id: MeshInstanceId::next(),
            revision,
        })
    }

    /// Start a topology edit of this mesh.
    ///
    /// The edit does not touch `self`; [`TopologyEdit::apply`] returns a
    /// new mesh and the map from this one to it.
    pub fn edit(&self) -> TopologyEdit<'_> {
        TopologyEdit {
            base: self,
            patches: self
                .patches
                .iter()
                .enumerate()
                .map(|(i, p)| EditPatch {
                    origin: Some((i, p.id())),
                    def: p.to_def(),
                    face_map: None,
                    type_hint: None,
                })
                .collect(),
            cells: None,
            points: None,
        }
    }
}

impl Mesh for PolyMesh {
    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn point_count(&self) -> usize {
        self.point_count
    }

    fn patches(&self) -> &[Patch] {
        &self.patches
    }

    fn instance_id(&self) -> MeshInstanceId {
        self.instance_id
    }

    fn topology_revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug)]
struct EditPatch {
    /// Old index and identity, `None` for an inserted patch.
    origin: Option<(usize, PatchId)>,
    def: PatchDef,
    face_map: Option<Vec<Option<usize>>>,
    type_hint: Option<String>,
}

/// Builder for a topology change of a [`PolyMesh`].
///
/// Patches that survive the edit keep their [`PatchId`] whatever happens
/// to their name, position, or size. Inserted patches get a fresh ID.
///
/// # Examples
///
/// ```
/// use geofield_mesh::{Mesh, PatchDef, PolyMesh};
///
/// let mesh = PolyMesh::new(
///     2,
///     0,
///     vec![PatchDef::new("a", vec![0]), PatchDef::new("b", vec![1])],
/// )
/// .unwrap();
///
/// let mut edit = mesh.edit();
/// edit.remove_patch("a").unwrap();
/// edit.add_patch(PatchDef::new("c", vec![0]));
/// let (next, map) = edit.apply().unwrap();
///
/// assert_eq!(next.patches()[0].id(), mesh.patches()[1].id());
/// assert_eq!(map.old_patch_index(0), Some(1));
/// assert_eq!(map.old_patch_index(1), None);
/// ```
#[derive(Debug)]
pub struct TopologyEdit<'a> {
    base: &'a PolyMesh,
    patches: Vec<EditPatch>,
    cells: Option<(usize, Vec<Option<usize>>)>,
    points: Option<(usize, Vec<Option<usize>>)>,
}

impl TopologyEdit<'_> {
    fn position(&self, name: &str) -> Result<usize, MeshError> {
        self.patches
            .iter()
            .position(|p| p.def.name == name)
            .ok_or_else(|| MeshError::UnknownPatch {
                name: name.to_string(),
            })
    }

    /// Append a new patch.
    pub fn add_patch(&mut self, def: PatchDef) -> &mut Self {
        self.patches.push(EditPatch {
            origin: None,
            def,
            face_map: None,
            type_hint: None,
        });
        self
    }

    /// Append a new patch and request a patch field type for it.
    ///
    /// Boundary rebuilds construct the new slot with `type_name` instead
    /// of the field's default type.
    pub fn add_patch_with_type(&mut self, def: PatchDef, type_name: impl Into<String>) -> &mut Self {
        self.patches.push(EditPatch {
            origin: None,
            def,
            face_map: None,
            type_hint: Some(type_name.into()),
        });
        self
    }

    /// Remove a patch by name.
    pub fn remove_patch(&mut self, name: &str) -> Result<&mut Self, MeshError> {
        let index = self.position(name)?;
        self.patches.remove(index);
        Ok(self)
    }

    /// Move a patch to a new position in the patch list.
    pub fn move_patch(&mut self, name: &str, new_index: usize) -> Result<&mut Self, MeshError> {
        let index = self.position(name)?;
        if new_index >= self.patches.len() {
            return Err(MeshError::PatchIndexOutOfRange {
                index: new_index,
                count: self.patches.len(),
            });
        }
        let patch = self.patches.remove(index);
        self.patches.insert(new_index, patch);
        Ok(self)
    }

    /// Rename a patch. Its identity is unchanged.
    pub fn rename_patch(&mut self, name: &str, new_name: impl Into<String>) -> Result<&mut Self, MeshError> {
        let index = self.position(name)?;
        self.patches[index].def.name = new_name.into();
        Ok(self)
    }

    /// Replace a patch's faces and points.
    ///
    /// `face_map[new_face] == Some(old_face)` carries boundary values
    /// across; `None` for the whole map keeps values in place, truncating
    /// or padding.
    pub fn resize_patch(
        &mut self,
        name: &str,
        face_cells: Vec<usize>,
        mesh_points: Vec<usize>,
        face_map: Option<Vec<Option<usize>>>,
    ) -> Result<&mut Self, MeshError> {
        let index = self.position(name)?;
        if let Some(map) = &face_map {
            if map.len() != face_cells.len() {
                return Err(MeshError::InvalidMap {
                    reason: format!(
                        "face map for '{name}' has {} entries for {} faces",
                        map.len(),
                        face_cells.len()
                    ),
                });
            }
        }
        let patch = &mut self.patches[index];
        patch.def.face_cells = face_cells;
        patch.def.mesh_points = mesh_points;
        patch.face_map = face_map;
        Ok(self)
    }

    /// Renumber cells: `cell_map[new] == Some(old)` or `None` for an inserted cell.
    pub fn renumber_cells(&mut self, cell_map: Vec<Option<usize>>) -> Result<&mut Self, MeshError> {
        check_element_map("cell", &cell_map, self.base.cell_count)?;
        self.cells = Some((cell_map.len(), cell_map));
        Ok(self)
    }

    /// Renumber points: `point_map[new] == Some(old)` or `None` for an inserted point.
    pub fn renumber_points(&mut self, point_map: Vec<Option<usize>>) -> Result<&mut Self, MeshError> {
        check_element_map("point", &point_map, self.base.point_count)?;
        self.points = Some((point_map.len(), point_map));
        Ok(self)
    }

    /// Build the edited mesh and the map from the original to it.
    ///
    /// The result has a new instance ID and a topology revision one past
    /// the original's. All construction checks of [`PolyMesh::new`] apply.
    pub fn apply(self) -> Result<(PolyMesh, MeshMap), MeshError> {
        let cell_count = self.cells.as_ref().map_or(self.base.cell_count, |c| c.0);
        let point_count = self.points.as_ref().map_or(self.base.point_count, |p| p.0);

        let mut patch_map = Vec::with_capacity(self.patches.len());
        let mut face_maps = IndexMap::new();
        let mut patch_types = IndexMap::new();
        let mut patches = Vec::with_capacity(self.patches.len());
        for edit in self.patches {
            let id = edit.origin.map_or_else(PatchId::next, |(_, id)| id);
            patch_map.push(edit.origin.map(|(old, _)| old));
            if let Some(face_map) = edit.face_map {
                face_maps.insert(id, face_map);
            }
            if let Some(hint) = edit.type_hint {
                patch_types.insert(id, hint);
            }
            patches.push(Patch::from_def(id, edit.def));
        }

        let mesh = PolyMesh::build(cell_count, point_count, patches, self.base.revision + 1)?;
        let map = MeshMap::new(
            self.base.instance_id,
            mesh.instance_id,
            self.cells.map(|c| c.1),
            self.points.map(|p| p.1),
            patch_map,
            face_maps,
            patch_types,
        );
        Ok((mesh, map))
    }
}

fn check_element_map(kind: &str, map: &[Option<usize>], old_count: usize) -> Result<(), MeshError> {
    if let Some(old) = map.iter().flatten().find(|&&old| old >= old_count) {
        return Err(MeshError::InvalidMap {
            reason: format!("{kind} map refers to {kind} {old}, mesh has {old_count}"),
        });
    }
    Ok(())
}
