//! Error types for mesh construction and topology edits.

use std::error::Error;
use std::fmt;

/// Errors arising from mesh construction or topology edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// Attempted to construct a mesh with zero cells.
    EmptyMesh,
    /// A patch was given an empty name.
    EmptyPatchName {
        /// Position of the patch in the patch list.
        index: usize,
    },
    /// Two patches share a name.
    DuplicatePatchName {
        /// The repeated name.
        name: String,
    },
    /// A boundary face refers to a cell that does not exist.
    FaceCellOutOfRange {
        /// Patch owning the face.
        patch: String,
        /// Local face index within the patch.
        face: usize,
        /// The offending cell label.
        cell: usize,
        /// Number of cells in the mesh.
        cell_count: usize,
    },
    /// A patch lists a mesh point that does not exist.
    MeshPointOutOfRange {
        /// Patch listing the point.
        patch: String,
        /// The offending point label.
        point: usize,
        /// Number of points in the mesh.
        point_count: usize,
    },
    /// A topology edit named a patch the mesh does not have.
    UnknownPatch {
        /// The requested name.
        name: String,
    },
    /// A topology edit moved a patch past the end of the patch list.
    PatchIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of patches.
        count: usize,
    },
    /// An element map is inconsistent with the meshes it connects.
    InvalidMap {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "mesh must have at least one cell"),
            Self::EmptyPatchName { index } => write!(f, "patch {index} has an empty name"),
            Self::DuplicatePatchName { name } => write!(f, "duplicate patch name '{name}'"),
            Self::FaceCellOutOfRange {
                patch,
                face,
                cell,
                cell_count,
            } => {
                write!(
                    f,
                    "patch '{patch}' face {face} refers to cell {cell}, mesh has {cell_count} cells"
                )
            }
            Self::MeshPointOutOfRange {
                patch,
                point,
                point_count,
            } => {
                write!(
                    f,
                    "patch '{patch}' lists point {point}, mesh has {point_count} points"
                )
            }
            Self::UnknownPatch { name } => write!(f, "unknown patch '{name}'"),
            Self::PatchIndexOutOfRange { index, count } => {
                write!(f, "patch index {index} out of range for {count} patches")
            }
            Self::InvalidMap { reason } => write!(f, "invalid map: {reason}"),
        }
    }
}

impl Error for MeshError {}
