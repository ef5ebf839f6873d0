//! The core `Mesh` trait and `dyn Mesh` downcast support.

use crate::patch::Patch;
use geofield_core::{MeshInstanceId, PatchId};
use std::any::Any;
use std::fmt;

/// Geometry and topology collaborator consumed by fields.
///
/// Fields hold an `Arc<dyn Mesh>` back-reference and read element counts
/// and the ordered patch list from it. A mesh is immutable: topology
/// changes produce a new mesh instance (see
/// [`TopologyEdit`](crate::TopologyEdit)) which fields adopt through
/// their `update_mesh` operation.
///
/// # Thread Safety
///
/// `Send + Sync` lets fields holding `Arc<dyn Mesh>` be stored in
/// type-erased registries and in process-wide null sentinels.
pub trait Mesh: Any + Send + Sync + fmt::Debug + 'static {
    /// Number of cells.
    fn cell_count(&self) -> usize;

    /// Number of points.
    fn point_count(&self) -> usize;

    /// Boundary patches in patch-index order.
    fn patches(&self) -> &[Patch];

    /// Number of boundary patches.
    fn patch_count(&self) -> usize {
        self.patches().len()
    }

    /// Index of the patch with the given name.
    fn find_patch(&self, name: &str) -> Option<usize> {
        self.patches().iter().position(|p| p.name() == name)
    }

    /// Index of the patch with the given identity.
    fn find_patch_id(&self, id: PatchId) -> Option<usize> {
        self.patches().iter().position(|p| p.id() == id)
    }

    /// Unique identifier of this mesh object.
    fn instance_id(&self) -> MeshInstanceId;

    /// Number of topology edits between the original mesh and this one.
    fn topology_revision(&self) -> u64;
}

impl dyn Mesh {
    /// Attempt to downcast a trait object to a concrete mesh type.
    pub fn downcast_ref<T: Mesh>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
