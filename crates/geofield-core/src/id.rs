//! Strongly-typed identifiers and the [`TimeIndex`] stamp.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`PatchId`] allocation.
static PATCH_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`MeshInstanceId`] allocation.
static MESH_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`ObjectId`] allocation.
static OBJECT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a boundary patch.
///
/// Allocated once when a patch is first defined and carried unchanged
/// through topology edits that rename, reorder, or resize it. Boundary
/// fields reassociate their slots by `PatchId`, never by position, so a
/// patch that moves in the mesh's patch list keeps its values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatchId(u64);

impl PatchId {
    /// Allocate a fresh, unique patch identity.
    ///
    /// Each call returns an ID never returned before within this process.
    pub fn next() -> Self {
        Self(PATCH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique per-instance identifier for a mesh object.
///
/// Every mesh produced by construction or by a topology edit gets a new
/// ID. A mesh map records the instance it maps from so fields can
/// reject maps meant for another mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshInstanceId(u64);

impl MeshInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(MESH_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MeshInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one registration in an object registry.
///
/// Retrieving the same name twice yields the same `ObjectId` until the
/// object is explicitly replaced or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh, unique object ID. Thread-safe.
    pub fn next() -> Self {
        Self(OBJECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulation step that last evaluated a field.
///
/// Written by the owning time-stepper once per evaluation cycle and read
/// by cache-aware consumers, which recompute a derived field only when its
/// stamp differs from the current step. The stamp must never move
/// backwards; this is the writer's responsibility and is not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeIndex(pub u64);

impl TimeIndex {
    /// The stamp of a field that has never been evaluated.
    pub const ZERO: Self = Self(0);

    /// The following step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TimeIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
