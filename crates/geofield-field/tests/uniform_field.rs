use geofield_core::{Dimensions, TimeIndex};
use geofield_field::{PatchFieldSelector, VolScalarField};
use geofield_test_utils::{shared, three_patch_mesh};

#[test]
fn uniform_scalar_on_three_patch_mesh() {
    let mesh = shared(three_patch_mesh());
    let field = VolScalarField::uniform(
        "T",
        mesh,
        Dimensions::TEMPERATURE,
        1.0,
        "calculated",
        &PatchFieldSelector::default(),
    )
    .unwrap();

    assert!(field.internal_field().iter().all(|&v| v == 1.0));
    let names: Vec<_> = field.boundary_field().iter_named().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["inlet", "outlet", "walls"]);
    assert_eq!(field.boundary_field().iter().count(), 3);
    assert!(field
        .boundary_field()
        .iter()
        .all(|p| p.values().iter().all(|&v| v == 1.0)));
    // Iteration restarts from the first patch.
    assert_eq!(field.boundary_field().iter().count(), 3);
    assert_eq!(field.time_index(), TimeIndex::ZERO);
}

#[test]
fn time_index_is_what_the_owner_wrote() {
    let mut field = VolScalarField::uniform(
        "T",
        shared(three_patch_mesh()),
        Dimensions::TEMPERATURE,
        1.0,
        "calculated",
        &PatchFieldSelector::default(),
    )
    .unwrap();
    for step in [3u64, 4, 4, 10] {
        *field.time_index_mut() = TimeIndex(step);
        assert_eq!(field.time_index(), TimeIndex(step));
    }
}

#[test]
fn unknown_patch_type_fails_construction() {
    let err = VolScalarField::uniform(
        "T",
        shared(three_patch_mesh()),
        Dimensions::TEMPERATURE,
        1.0,
        "slip",
        &PatchFieldSelector::default(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        geofield_core::FieldError::UnknownPatchType {
            patch: "inlet".into(),
            type_name: "slip".into()
        }
        .to_string()
    );
}
