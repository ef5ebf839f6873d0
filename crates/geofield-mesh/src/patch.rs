//! Boundary patches and their definitions.

use geofield_core::PatchId;

/// Geometric role of a boundary patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchKind {
    /// Generic boundary (inlets, outlets, far field).
    Patch,
    /// Solid wall.
    Wall,
    /// Placeholder for reduced-dimension cases.
    Empty,
    /// Symmetry plane.
    Symmetry,
}

/// Definition of a patch, as supplied when building or editing a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchDef {
    /// Patch name, unique within a mesh.
    pub name: String,
    /// Geometric role.
    pub kind: PatchKind,
    /// Owner cell of each boundary face, in face order.
    pub face_cells: Vec<usize>,
    /// Mesh point labels on the patch.
    pub mesh_points: Vec<usize>,
}

impl PatchDef {
    /// A generic patch with the given faces and no point addressing.
    pub fn new(name: impl Into<String>, face_cells: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            kind: PatchKind::Patch,
            face_cells,
            mesh_points: Vec::new(),
        }
    }

    /// Set the geometric role.
    pub fn with_kind(mut self, kind: PatchKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the mesh point labels.
    pub fn with_points(mut self, mesh_points: Vec<usize>) -> Self {
        self.mesh_points = mesh_points;
        self
    }
}

/// A boundary patch of a mesh.
///
/// The [`PatchId`] is assigned when the patch is first created and is
/// preserved by every topology edit that keeps the patch.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    id: PatchId,
    name: String,
    kind: PatchKind,
    face_cells: Vec<usize>,
    mesh_points: Vec<usize>,
}

impl Patch {
    pub(crate) fn from_def(id: PatchId, def: PatchDef) -> Self {
        Self {
            id,
            name: def.name,
            kind: def.kind,
            face_cells: def.face_cells,
            mesh_points: def.mesh_points,
        }
    }

    pub(crate) fn to_def(&self) -> PatchDef {
        PatchDef {
            name: self.name.clone(),
            kind: self.kind,
            face_cells: self.face_cells.clone(),
            mesh_points: self.mesh_points.clone(),
        }
    }

    /// Stable identity.
    pub fn id(&self) -> PatchId {
        self.id
    }

    /// Patch name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometric role.
    pub fn kind(&self) -> PatchKind {
        self.kind
    }

    /// Number of boundary faces.
    pub fn face_count(&self) -> usize {
        self.face_cells.len()
    }

    /// Number of mesh points on the patch.
    pub fn point_count(&self) -> usize {
        self.mesh_points.len()
    }

    /// Owner cell of each boundary face.
    pub fn face_cells(&self) -> &[usize] {
        &self.face_cells
    }

    /// Mesh point labels on the patch.
    pub fn mesh_points(&self) -> &[usize] {
        &self.mesh_points
    }
}
