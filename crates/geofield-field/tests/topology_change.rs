use geofield_core::{Dimensions, FieldError, Vector};
use geofield_field::{
    BoundarySpec, FieldConfig, PatchFieldSelector, PatchFieldSpec, VolScalarField, VolVectorField,
};
use geofield_mesh::{Mesh, PatchDef};
use geofield_test_utils::{channel_mesh, shared, three_patch_mesh, CallCounts, CountingPatchField};
use proptest::prelude::*;
use std::sync::Arc;

fn zero_gradient_field(mesh: Arc<dyn Mesh>) -> VolScalarField {
    VolScalarField::uniform(
        "p",
        mesh,
        Dimensions::PRESSURE,
        1.0,
        "zeroGradient",
        &PatchFieldSelector::default(),
    )
    .unwrap()
}

#[test]
fn removing_and_adding_patches_rebuilds_by_identity() {
    let base = three_patch_mesh();
    let selector = PatchFieldSelector::default();
    let mut field = zero_gradient_field(shared(base.clone()));
    let outlet_id = base.patches()[1].id();

    let mut edit = base.edit();
    edit.remove_patch("outlet")
        .unwrap()
        .add_patch(PatchDef::new("side", vec![1, 2]));
    let (next, map) = edit.apply().unwrap();
    let next = shared(next);
    let report = field.update_mesh(Arc::clone(&next), &map, &selector).unwrap();

    assert_eq!(field.boundary_field().len(), next.patch_count());
    assert!(field.is_synced_with(next.as_ref()));
    assert!(field.boundary_field().find("outlet").is_none());
    assert_eq!(report.dropped.as_slice(), &[outlet_id]);
    assert_eq!(report.created.len(), 1);

    let side = field.boundary_field().find("side").unwrap();
    assert_eq!(side.type_name(), "calculated");
    assert_eq!(side.values(), &[1.0, 1.0]);
}

#[test]
fn renamed_patch_keeps_its_slot() {
    let base = three_patch_mesh();
    let selector = PatchFieldSelector::default();
    let boundary = BoundarySpec::new()
        .with_patch("inlet", PatchFieldSpec::fixed_value(9.0))
        .with_patch("outlet", PatchFieldSpec::zero_gradient())
        .with_patch("walls", PatchFieldSpec::zero_gradient());
    let config = FieldConfig::new("p", Dimensions::PRESSURE, 0.0).with_boundary(boundary);
    let mut field = VolScalarField::new(shared(base.clone()), config, &selector).unwrap();

    let mut edit = base.edit();
    edit.rename_patch("inlet", "feed").unwrap();
    let (next, map) = edit.apply().unwrap();
    let report = field.update_mesh(shared(next), &map, &selector).unwrap();

    assert!(report.is_unchanged());
    let feed = field.boundary_field().find("feed").unwrap();
    assert_eq!(feed.type_name(), "fixedValue");
    assert_eq!(feed.values(), &[9.0]);
}

#[test]
fn resize_without_face_map_pads_with_zero() {
    let base = channel_mesh(3);
    let selector = PatchFieldSelector::default();
    let mut field = zero_gradient_field(shared(base.clone()));

    let mut edit = base.edit();
    edit.resize_patch("inlet", vec![0, 1], vec![0, 1], None)
        .unwrap();
    let (next, map) = edit.apply().unwrap();
    let report = field.update_mesh(shared(next), &map, &selector).unwrap();

    assert_eq!(report.remapped.len(), 1);
    assert_eq!(field.boundary_field()[0].values(), &[1.0, 0.0]);
    field.correct_boundary_conditions();
    assert_eq!(field.boundary_field()[0].values(), &[1.0, 1.0]);
}

#[test]
fn failed_update_leaves_field_on_old_mesh() {
    let base = three_patch_mesh();
    let mut field = zero_gradient_field(shared(base.clone()));
    let mut edit = base.edit();
    edit.add_patch_with_type(PatchDef::new("baffle", vec![2]), "fixedValue");
    let (next, map) = edit.apply().unwrap();

    let strict = PatchFieldSelector::<f64, _>::new();
    let err = field.update_mesh(shared(next), &map, &strict).unwrap_err();
    assert!(matches!(err, FieldError::UnknownPatchType { .. }));
    assert!(field.is_synced_with(&base));
    assert_eq!(field.boundary_field().len(), 3);
}

#[test]
fn custom_slots_are_driven_through_the_boundary() {
    let base = three_patch_mesh();
    let selector = PatchFieldSelector::default();
    let mut field = zero_gradient_field(shared(base.clone()));
    let counts = CallCounts::new();
    field
        .boundary_field_mut()
        .set(2, Box::new(CountingPatchField::new(vec![0.0; 4], counts.clone())))
        .unwrap();

    field.correct_boundary_conditions();
    field.move_points();
    assert_eq!(counts.evaluate(), 1);
    assert_eq!(counts.move_points(), 1);

    let mut edit = base.edit();
    edit.resize_patch("walls", vec![0, 1], vec![], Some(vec![Some(0), Some(1)]))
        .unwrap();
    let (next, map) = edit.apply().unwrap();
    field.update_mesh(shared(next), &map, &selector).unwrap();
    assert_eq!(counts.auto_map(), 1);
    assert_eq!(field.boundary_field().find("walls").unwrap().type_name(), "counting");
}

#[test]
fn set_rejects_wrong_size() {
    let mut field = zero_gradient_field(shared(three_patch_mesh()));
    let err = field
        .boundary_field_mut()
        .set(0, Box::new(CountingPatchField::new(vec![0.0; 2], CallCounts::new())))
        .unwrap_err();
    assert!(matches!(err, FieldError::ValueSizeMismatch { expected: 1, found: 2, .. }));
}

#[test]
fn vector_field_moves_with_cells() {
    let base = channel_mesh(2);
    let selector = PatchFieldSelector::default();
    let mut field = VolVectorField::uniform(
        "U",
        shared(base.clone()),
        Dimensions::VELOCITY,
        Vector::new(1.0, 0.0, 0.0),
        "zeroGradient",
        &selector,
    )
    .unwrap();
    field.internal_field_mut()[1] = Vector::new(0.0, 2.0, 0.0);

    let mut edit = base.edit();
    edit.renumber_cells(vec![Some(1), Some(0)]).unwrap();
    let (next, map) = edit.apply().unwrap();
    field.update_mesh(shared(next), &map, &selector).unwrap();

    assert_eq!(field.internal_field()[0], Vector::new(0.0, 2.0, 0.0));
    assert_eq!(field.internal_field()[1], Vector::new(1.0, 0.0, 0.0));
}

proptest! {
    #[test]
    fn slot_count_tracks_patch_count(cells in 1usize..12, extra in 0usize..4, drop_outlet in any::<bool>()) {
        let base = channel_mesh(cells);
        let selector = PatchFieldSelector::default();
        let mut field = zero_gradient_field(shared(base.clone()));
        prop_assert_eq!(field.boundary_field().len(), base.patch_count());

        let mut edit = base.edit();
        if drop_outlet {
            edit.remove_patch("outlet").unwrap();
        }
        for i in 0..extra {
            edit.add_patch(PatchDef::new(format!("extra{i}"), vec![i % cells]));
        }
        let (next, map) = edit.apply().unwrap();
        let next = shared(next);
        field.update_mesh(Arc::clone(&next), &map, &selector).unwrap();

        prop_assert_eq!(field.boundary_field().len(), next.patch_count());
        prop_assert!(field.is_synced_with(next.as_ref()));
    }
}
