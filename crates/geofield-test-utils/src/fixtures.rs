//! Instrumented patch fields and field builders.

use geofield_core::{Dimensions, FieldValue};
use geofield_field::{
    BoundarySpec, FieldConfig, InitialValues, PatchFamily, PatchField, PatchFieldSelector,
    PatchFieldSpec, VolScalarField,
};
use geofield_mesh::{Mesh, Patch};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Call counters shared between a [`CountingPatchField`] and the test.
#[derive(Clone, Debug, Default)]
pub struct CallCounts {
    evaluate: Arc<AtomicUsize>,
    auto_map: Arc<AtomicUsize>,
    move_points: Arc<AtomicUsize>,
}

impl CallCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&self) -> usize {
        self.evaluate.load(Ordering::Relaxed)
    }

    pub fn auto_map(&self) -> usize {
        self.auto_map.load(Ordering::Relaxed)
    }

    pub fn move_points(&self) -> usize {
        self.move_points.load(Ordering::Relaxed)
    }
}

/// Zero-gradient behavior that counts every call it receives.
///
/// Clones share the same [`CallCounts`].
#[derive(Debug)]
pub struct CountingPatchField<T, F> {
    values: Vec<T>,
    counts: CallCounts,
    _family: PhantomData<fn() -> F>,
}

impl<T: FieldValue, F: PatchFamily> CountingPatchField<T, F> {
    pub fn new(values: Vec<T>, counts: CallCounts) -> Self {
        Self {
            values,
            counts,
            _family: PhantomData,
        }
    }
}

impl<T: FieldValue, F: PatchFamily> PatchField<T, F> for CountingPatchField<T, F> {
    fn type_name(&self) -> &'static str {
        "counting"
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn evaluate(&mut self, adjacent: &[T]) {
        self.counts.evaluate.fetch_add(1, Ordering::Relaxed);
        self.values.copy_from_slice(adjacent);
    }

    fn auto_map(&mut self, face_map: Option<&[Option<usize>]>, new_size: usize) {
        self.counts.auto_map.fetch_add(1, Ordering::Relaxed);
        self.values = geofield_mesh::remap(&self.values, face_map, new_size, T::zero());
    }

    fn move_points(&mut self, _patch: &Patch) {
        self.counts.move_points.fetch_add(1, Ordering::Relaxed);
    }

    fn clone_box(&self) -> Box<dyn PatchField<T, F>> {
        Box::new(Self::new(self.values.clone(), self.counts.clone()))
    }
}

/// A dimensionless cell scalar field with the given interior values and
/// `calculated` patches seeded from the adjacent cells.
///
/// # Panics
///
/// Panics if `values` does not have one entry per cell.
pub fn scalar_field(name: &str, mesh: Arc<dyn Mesh>, values: &[f64]) -> VolScalarField {
    let boundary = BoundarySpec::uniform(mesh.as_ref(), PatchFieldSpec::calculated());
    let config = FieldConfig::new(name, Dimensions::DIMENSIONLESS, 0.0)
        .with_initial(InitialValues::List(values.to_vec()))
        .with_boundary(boundary);
    VolScalarField::new(mesh, config, &PatchFieldSelector::default()).unwrap()
}
