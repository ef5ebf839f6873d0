//! The boundary composite: one polymorphic patch field per mesh patch.
//!
//! Slots are stored in patch-index order and each remembers the
//! [`PatchId`] it was built for. Topology changes are applied with
//! [`BoundaryField::rebuild`], which matches slots to the new patch list
//! by identity, never by position.

use crate::patch_field::{adjacent_values, PatchFamily, PatchField};
use crate::selector::{PatchContext, PatchFieldSelector};
use crate::spec::{BoundarySpec, PatchFieldSpec, PatchValue};
use geofield_core::{FieldError, FieldValue, PatchId};
use geofield_mesh::{GeoMesh, Mesh, MeshMap};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Index, IndexMut};

struct Slot<T: FieldValue, F: PatchFamily> {
    patch: PatchId,
    name: String,
    field: Box<dyn PatchField<T, F>>,
}

impl<T: FieldValue, F: PatchFamily> Clone for Slot<T, F> {
    fn clone(&self) -> Self {
        Self {
            patch: self.patch,
            name: self.name.clone(),
            field: self.field.clone_box(),
        }
    }
}

/// What a [`BoundaryField::rebuild`] did to each patch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RebuildReport {
    /// Patches kept at the same index.
    pub preserved: SmallVec<[PatchId; 8]>,
    /// Patches whose slot moved to a new index.
    pub migrated: SmallVec<[PatchId; 8]>,
    /// Patches new to the mesh, given a fresh slot.
    pub created: SmallVec<[PatchId; 8]>,
    /// Patches no longer in the mesh; their slots were discarded.
    pub dropped: SmallVec<[PatchId; 8]>,
    /// Kept patches whose slot was mapped onto a new size.
    pub remapped: SmallVec<[PatchId; 8]>,
}

impl RebuildReport {
    /// Returns `true` if every slot stayed where it was with its values.
    pub fn is_unchanged(&self) -> bool {
        self.migrated.is_empty()
            && self.created.is_empty()
            && self.dropped.is_empty()
            && self.remapped.is_empty()
    }
}

/// Ordered collection of patch fields, one per mesh patch.
///
/// # Examples
///
/// ```
/// use geofield_field::{BoundaryField, BoundarySpec, FvPatch, PatchFieldSelector, PatchFieldSpec};
/// use geofield_mesh::{PatchDef, PolyMesh};
///
/// let mesh = PolyMesh::new(
///     2,
///     0,
///     vec![PatchDef::new("left", vec![0]), PatchDef::new("right", vec![1])],
/// )
/// .unwrap();
/// let spec = BoundarySpec::uniform(&mesh, PatchFieldSpec::zero_gradient());
/// let selector = PatchFieldSelector::<f64, FvPatch>::default();
/// let boundary = BoundaryField::new(&mesh, &spec, &[1.0, 2.0], &selector).unwrap();
///
/// assert_eq!(boundary.len(), 2);
/// assert_eq!(boundary[1].values(), &[2.0]);
/// assert_eq!(boundary.types(), vec!["zeroGradient", "zeroGradient"]);
/// ```
pub struct BoundaryField<T: FieldValue, F: PatchFamily> {
    slots: Vec<Slot<T, F>>,
}

impl<T: FieldValue, F: PatchFamily> BoundaryField<T, F> {
    /// Build one slot per mesh patch from `spec`.
    ///
    /// `internal` supplies the interior values that slots without an
    /// explicit value start from. Returns `Err` without building anything
    /// if the spec does not line up with the mesh patches, if `internal`
    /// has the wrong length, or if any slot fails to construct.
    pub fn new(
        mesh: &dyn Mesh,
        spec: &BoundarySpec<T>,
        internal: &[T],
        selector: &PatchFieldSelector<T, F>,
    ) -> Result<Self, FieldError> {
        spec.validate(mesh)?;
        check_internal_len::<T, F::Geo>(mesh, internal)?;
        let slots = mesh
            .patches()
            .iter()
            .zip(&spec.patches)
            .map(|(patch, (_, patch_spec))| {
                let adjacent = adjacent_values::<T, F::Geo>(patch, internal);
                let ctx = PatchContext {
                    patch,
                    size: F::Geo::patch_size(patch),
                    adjacent: &adjacent,
                };
                Ok(Slot {
                    patch: patch.id(),
                    name: patch.name().to_string(),
                    field: selector.construct(patch_spec, &ctx)?,
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;
        Ok(Self { slots })
    }

    /// A boundary with no slots.
    pub fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at patch index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> &(dyn PatchField<T, F> + 'static) {
        &*self.slots[index].field
    }

    /// The mutable slot at patch index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut (dyn PatchField<T, F> + 'static) {
        &mut *self.slots[index].field
    }

    /// The slot for the patch named `name`.
    pub fn find(&self, name: &str) -> Option<&(dyn PatchField<T, F> + 'static)> {
        self.slots
            .iter()
            .find(|s| s.name == name)
            .map(|s| &*s.field)
    }

    /// The mutable slot for the patch named `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn PatchField<T, F> + 'static)> {
        self.slots
            .iter_mut()
            .find(|s| s.name == name)
            .map(|s| &mut *s.field)
    }

    /// Replace the slot at `index`, returning the previous one.
    ///
    /// Returns `Err(FieldError::ValueSizeMismatch)` if `field` does not
    /// hold as many values as the slot it replaces.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(
        &mut self,
        index: usize,
        field: Box<dyn PatchField<T, F>>,
    ) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
        let slot = &mut self.slots[index];
        if field.len() != slot.field.len() {
            return Err(FieldError::ValueSizeMismatch {
                patch: slot.name.clone(),
                expected: slot.field.len(),
                found: field.len(),
            });
        }
        Ok(std::mem::replace(&mut slot.field, field))
    }

    /// Identity of the patch the slot at `index` was built for.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn patch_id(&self, index: usize) -> PatchId {
        self.slots[index].patch
    }

    /// Name of the patch the slot at `index` was built for.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn patch_name(&self, index: usize) -> &str {
        &self.slots[index].name
    }

    /// Slots in patch-index order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn PatchField<T, F> + 'static)> + '_ {
        self.slots.iter().map(|s| &*s.field)
    }

    /// Mutable slots in patch-index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn PatchField<T, F> + 'static)> + '_ {
        self.slots.iter_mut().map(|s| &mut *s.field)
    }

    /// `(patch name, slot)` pairs in patch-index order.
    pub fn iter_named(&self) -> impl Iterator<Item = (&str, &(dyn PatchField<T, F> + 'static))> + '_ {
        self.slots.iter().map(|s| (s.name.as_str(), &*s.field))
    }

    /// Behavior type names in patch-index order.
    pub fn types(&self) -> Vec<&'static str> {
        self.slots.iter().map(|s| s.field.type_name()).collect()
    }

    /// Returns `true` if the slots match `mesh`'s patches by identity, in order.
    pub fn is_synced_with(&self, mesh: &dyn Mesh) -> bool {
        self.slots.len() == mesh.patch_count()
            && self
                .slots
                .iter()
                .zip(mesh.patches())
                .all(|(slot, patch)| slot.patch == patch.id())
    }

    /// Evaluate every slot against the interior values adjacent to its patch.
    ///
    /// # Panics
    ///
    /// Panics if `internal` is shorter than the mesh element count.
    pub fn evaluate(&mut self, mesh: &dyn Mesh, internal: &[T]) {
        debug_assert!(self.is_synced_with(mesh), "boundary out of sync with mesh");
        for (slot, patch) in self.slots.iter_mut().zip(mesh.patches()) {
            let adjacent = adjacent_values::<T, F::Geo>(patch, internal);
            slot.field.evaluate(&adjacent);
        }
    }

    /// Forward point motion to every slot.
    pub fn move_points(&mut self, mesh: &dyn Mesh) {
        debug_assert!(self.is_synced_with(mesh), "boundary out of sync with mesh");
        for (slot, patch) in self.slots.iter_mut().zip(mesh.patches()) {
            slot.field.move_points(patch);
        }
    }

    /// Re-associate slots with the patches of `mesh` after a topology edit.
    ///
    /// Slots follow their [`PatchId`]: a kept patch keeps its slot and
    /// values wherever it moved, and is auto-mapped if the edit resized it
    /// or supplied a face map. Patches new to the mesh get a fresh slot of
    /// the type hinted in `map`, or `default_type`, seeded from the
    /// adjacent values in `internal` (which must already be sized for
    /// `mesh`). Slots for patches absent from `mesh` are dropped.
    ///
    /// On `Err` the boundary is left unchanged.
    pub fn rebuild(
        &mut self,
        mesh: &dyn Mesh,
        map: &MeshMap,
        internal: &[T],
        selector: &PatchFieldSelector<T, F>,
        default_type: &str,
    ) -> Result<RebuildReport, FieldError> {
        check_internal_len::<T, F::Geo>(mesh, internal)?;

        // Fallible construction first so a failure leaves `self` intact.
        let known: IndexMap<PatchId, usize> = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.patch, i))
            .collect();
        let mut seen = IndexSet::with_capacity(mesh.patch_count());
        let mut fresh = Vec::with_capacity(mesh.patch_count());
        for patch in mesh.patches() {
            if !seen.insert(patch.id()) {
                return Err(FieldError::MeshMismatch {
                    reason: format!("patch id {} appears twice in the mesh", patch.id()),
                });
            }
            if known.contains_key(&patch.id()) {
                fresh.push(None);
                continue;
            }
            let type_name = map.patch_type_hint(patch.id()).unwrap_or(default_type);
            let adjacent = adjacent_values::<T, F::Geo>(patch, internal);
            let spec = PatchFieldSpec::new(type_name)
                .with_value(PatchValue::NonUniform(adjacent.clone()));
            let ctx = PatchContext {
                patch,
                size: F::Geo::patch_size(patch),
                adjacent: &adjacent,
            };
            fresh.push(Some(selector.construct(&spec, &ctx)?));
        }

        let mut report = RebuildReport::default();
        let mut old: IndexMap<PatchId, (usize, Slot<T, F>)> = std::mem::take(&mut self.slots)
            .into_iter()
            .enumerate()
            .map(|(i, s)| (s.patch, (i, s)))
            .collect();
        let mut slots = Vec::with_capacity(mesh.patch_count());
        for ((index, patch), created) in mesh.patches().iter().enumerate().zip(fresh) {
            let id = patch.id();
            let slot = match (created, old.swap_remove(&id)) {
                (Some(field), _) => {
                    report.created.push(id);
                    Slot {
                        patch: id,
                        name: patch.name().to_string(),
                        field,
                    }
                }
                (None, Some((old_index, mut slot))) => {
                    if old_index == index {
                        report.preserved.push(id);
                    } else {
                        report.migrated.push(id);
                    }
                    let size = F::Geo::patch_size(patch);
                    let face_map = map.face_map(id);
                    if face_map.is_some() || slot.field.len() != size {
                        slot.field.auto_map(face_map, size);
                        report.remapped.push(id);
                    }
                    slot.name = patch.name().to_string();
                    slot
                }
                (None, None) => unreachable!("kept patch {id} has an old slot"),
            };
            slots.push(slot);
        }
        report.dropped.extend(old.keys().copied());
        self.slots = slots;

        tracing::debug!(
            family = F::NAME,
            preserved = report.preserved.len(),
            migrated = report.migrated.len(),
            created = report.created.len(),
            dropped = report.dropped.len(),
            remapped = report.remapped.len(),
            "boundary rebuilt"
        );
        Ok(report)
    }
}

fn check_internal_len<T, M: GeoMesh>(mesh: &dyn Mesh, internal: &[T]) -> Result<(), FieldError> {
    let expected = M::size(mesh);
    if internal.len() != expected {
        return Err(FieldError::InternalSizeMismatch {
            expected,
            found: internal.len(),
        });
    }
    Ok(())
}

impl<T: FieldValue, F: PatchFamily> Clone for BoundaryField<T, F> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: FieldValue, F: PatchFamily> fmt::Debug for BoundaryField<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|s| (&s.name, &s.field)))
            .finish()
    }
}

impl<T: FieldValue, F: PatchFamily> Index<usize> for BoundaryField<T, F> {
    type Output = dyn PatchField<T, F>;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T: FieldValue, F: PatchFamily> IndexMut<usize> for BoundaryField<T, F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

/// Slot-level write access to a field's boundary.
///
/// Returned by [`GeometricField::boundary_field_mut`](crate::GeometricField::boundary_field_mut).
/// Slots can be edited or swapped for ones of the same size, but the
/// boundary as a whole cannot be replaced, so it stays aligned with the
/// field's mesh.
pub struct BoundaryFieldMut<'a, T: FieldValue, F: PatchFamily> {
    inner: &'a mut BoundaryField<T, F>,
}

impl<'a, T: FieldValue, F: PatchFamily> BoundaryFieldMut<'a, T, F> {
    pub(crate) fn new(inner: &'a mut BoundaryField<T, F>) -> Self {
        Self { inner }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Read-only view of the whole boundary.
    pub fn as_boundary(&self) -> &BoundaryField<T, F> {
        self.inner
    }

    /// See [`BoundaryField::get_mut`].
    pub fn get_mut(&mut self, index: usize) -> &mut (dyn PatchField<T, F> + 'static) {
        self.inner.get_mut(index)
    }

    /// See [`BoundaryField::find_mut`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn PatchField<T, F> + 'static)> {
        self.inner.find_mut(name)
    }

    /// See [`BoundaryField::iter_mut`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn PatchField<T, F> + 'static)> + '_ {
        self.inner.iter_mut()
    }

    /// See [`BoundaryField::set`].
    pub fn set(
        &mut self,
        index: usize,
        field: Box<dyn PatchField<T, F>>,
    ) -> Result<Box<dyn PatchField<T, F>>, FieldError> {
        self.inner.set(index, field)
    }
}

impl<T: FieldValue, F: PatchFamily> fmt::Debug for BoundaryFieldMut<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<T: FieldValue, F: PatchFamily> Index<usize> for BoundaryFieldMut<'_, T, F> {
    type Output = dyn PatchField<T, F>;

    fn index(&self, index: usize) -> &Self::Output {
        self.inner.get(index)
    }
}

impl<T: FieldValue, F: PatchFamily> IndexMut<usize> for BoundaryFieldMut<'_, T, F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.get_mut(index)
    }
}
