use geofield_core::{Dimensions, TimeIndex};
use geofield_field::{PatchFieldSelector, VolScalarField};
use geofield_functions::{Calculation, MoleFractions, MoleFractionsConfig, SpeciesTable};
use geofield_mesh::{Mesh, PatchDef, PolyMesh};
use geofield_registry::{FunctionObject, FunctionObjectError, FunctionObjectList, ObjectRegistry, RegistryError};
use geofield_test_utils::{channel_mesh, scalar_field, shared, three_patch_mesh};
use std::sync::Arc;

const W_O2: f64 = 32.0;
const W_N2: f64 = 28.0;

fn air() -> SpeciesTable {
    SpeciesTable::new([("O2", W_O2), ("N2", W_N2)]).unwrap()
}

fn registry_with_air() -> ObjectRegistry {
    registry_on(&three_patch_mesh())
}

fn registry_on(base: &PolyMesh) -> ObjectRegistry {
    let mesh = shared(base.clone());
    let mut registry = ObjectRegistry::default();
    registry
        .store(scalar_field("O2", mesh.clone(), &[0.23, 0.5, 1.0, 0.0]))
        .unwrap();
    registry
        .store(scalar_field("N2", mesh, &[0.77, 0.5, 0.0, 0.0]))
        .unwrap();
    registry
}

/// Move both mass fractions onto `base` plus a `baffle` patch on cell 1.
fn add_baffle(registry: &mut ObjectRegistry, base: &PolyMesh) -> Arc<dyn Mesh> {
    let mut edit = base.edit();
    edit.add_patch(PatchDef::new("baffle", vec![1]));
    let (next, map) = edit.apply().unwrap();
    let next = shared(next);
    let selector = PatchFieldSelector::default();
    for species in ["O2", "N2"] {
        registry
            .lookup_mut::<VolScalarField>(species)
            .unwrap()
            .update_mesh(Arc::clone(&next), &map, &selector)
            .unwrap();
    }
    next
}

fn advance_to(registry: &mut ObjectRegistry, step: u64) {
    while registry.time_index() < TimeIndex(step) {
        registry.time_mut().advance(1e-3);
    }
}

#[test]
fn recomputes_only_when_time_index_changes() {
    let mut registry = registry_with_air();
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();

    advance_to(&mut registry, 5);
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Computed);
    let id_at_5 = registry.object_id("X_O2").unwrap();
    assert_eq!(
        registry.lookup::<VolScalarField>("X_O2").unwrap().time_index(),
        TimeIndex(5)
    );

    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Cached);

    advance_to(&mut registry, 6);
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Computed);
    let x = registry.lookup::<VolScalarField>("X_O2").unwrap();
    assert_eq!(x.time_index(), TimeIndex(6));
    assert_eq!(registry.object_id("X_O2"), Some(id_at_5));
}

#[test]
fn remeshed_inputs_invalidate_results_within_a_step() {
    let base = three_patch_mesh();
    let mut registry = registry_on(&base);
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();

    advance_to(&mut registry, 5);
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Computed);
    assert!(fo.is_current(&registry));

    let next = add_baffle(&mut registry, &base);
    assert!(!fo.is_current(&registry));
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Computed);

    let x = registry.lookup::<VolScalarField>("X_O2").unwrap();
    assert!(x.is_synced_with(next.as_ref()));
    assert_eq!(x.time_index(), TimeIndex(5));
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Cached);
}

#[test]
fn results_are_replaced_when_inputs_change_mesh() {
    let base = three_patch_mesh();
    let mut registry = registry_on(&base);
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();

    advance_to(&mut registry, 1);
    fo.calculate(&mut registry).unwrap();
    let old_ids = [
        registry.object_id("X_O2").unwrap(),
        registry.object_id("X_N2").unwrap(),
    ];

    let next = add_baffle(&mut registry, &base);
    advance_to(&mut registry, 2);
    assert_eq!(fo.calculate(&mut registry).unwrap(), Calculation::Computed);

    for (name, old_id) in ["X_O2", "X_N2"].into_iter().zip(old_ids) {
        let x = registry.lookup::<VolScalarField>(name).unwrap();
        assert!(x.is_synced_with(next.as_ref()), "{name} left on the old mesh");
        assert_eq!(x.boundary_field().len(), 4);
        assert_eq!(x.time_index(), TimeIndex(2));
        assert_ne!(registry.object_id(name), Some(old_id));
    }

    // The new patch is seeded from cell 1, which holds equal masses.
    let baffle = registry
        .lookup::<VolScalarField>("X_O2")
        .unwrap()
        .boundary_field()
        .find("baffle")
        .unwrap()
        .values()[0];
    let expected = (0.5 / W_O2) / (0.5 / W_O2 + 0.5 / W_N2);
    assert!((baffle - expected).abs() < 1e-12);
}

#[test]
fn execute_alone_computes_nothing() {
    let mut registry = registry_with_air();
    let mut fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();

    fo.execute(&mut registry).unwrap();
    assert!(!registry.contains("X_O2"));

    fo.write(&mut registry).unwrap();
    assert!(registry.contains_type::<VolScalarField>("X_O2"));
    assert!(fo.is_current(&registry));
}

#[test]
fn values_match_the_mixture_formula() {
    let mut registry = registry_with_air();
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();
    fo.calculate(&mut registry).unwrap();

    let x_o2 = registry.lookup::<VolScalarField>("X_O2").unwrap();
    let x_n2 = registry.lookup::<VolScalarField>("X_N2").unwrap();
    let expected = (0.23 / W_O2) / (0.23 / W_O2 + 0.77 / W_N2);
    assert!((x_o2.internal_field()[0] - expected).abs() < 1e-12);
    assert!((x_n2.internal_field()[0] - (1.0 - expected)).abs() < 1e-12);
    assert_eq!(x_o2.internal_field()[2], 1.0);
    // Cell 3 holds no species.
    assert_eq!(x_o2.internal_field()[3], 0.0);
    assert_eq!(x_n2.internal_field()[3], 0.0);

    assert_eq!(x_o2.dimensions(), Dimensions::DIMENSIONLESS);
    assert!(x_o2.boundary_field().types().iter().all(|&t| t == "calculated"));
    let inlet = x_o2.boundary_field().find("inlet").unwrap();
    assert!((inlet.values()[0] - expected).abs() < 1e-12);
}

#[test]
fn updated_inputs_are_picked_up_next_step() {
    let mut registry = registry_with_air();
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();
    fo.calculate(&mut registry).unwrap();

    registry
        .lookup_mut::<VolScalarField>("N2")
        .unwrap()
        .internal_field_mut()[2] = 1.0;
    registry.time_mut().advance(1e-3);
    fo.calculate(&mut registry).unwrap();

    let x_o2 = registry.lookup::<VolScalarField>("X_O2").unwrap();
    let expected = (1.0 / W_O2) / (1.0 / W_O2 + 1.0 / W_N2);
    assert!((x_o2.internal_field()[2] - expected).abs() < 1e-12);
}

#[test]
fn missing_species_is_reported() {
    let mut registry = ObjectRegistry::default();
    registry
        .store(scalar_field("O2", shared(three_patch_mesh()), &[1.0; 4]))
        .unwrap();
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();
    let err = fo.calculate(&mut registry).unwrap_err();
    assert_eq!(
        err,
        FunctionObjectError::Registry(RegistryError::NotFound { name: "N2".into() })
    );
    assert!(!registry.contains("X_O2"));
}

#[test]
fn species_on_different_meshes_are_rejected() {
    let mut registry = ObjectRegistry::default();
    registry
        .store(scalar_field("O2", shared(channel_mesh(2)), &[1.0; 2]))
        .unwrap();
    registry
        .store(scalar_field("N2", shared(channel_mesh(2)), &[1.0; 2]))
        .unwrap();
    let fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();
    assert!(matches!(
        fo.calculate(&mut registry).unwrap_err(),
        FunctionObjectError::ExecutionFailed { .. }
    ));
}

#[test]
fn driven_through_a_function_object_list() {
    let mut registry = registry_with_air();
    let mut list = FunctionObjectList::new();
    list.push(Box::new(
        MoleFractions::new(
            MoleFractionsConfig {
                name: "composition".into(),
                prefix: "mole_".into(),
            },
            air(),
        )
        .unwrap(),
    ));

    list.execute(&mut registry).unwrap();
    list.write(&mut registry).unwrap();
    list.end(&mut registry).unwrap();

    assert_eq!(list.names().collect::<Vec<_>>(), vec!["composition"]);
    assert!(registry.contains_type::<VolScalarField>("mole_O2"));
    assert!(registry.contains_type::<VolScalarField>("mole_N2"));
}

#[test]
fn mesh_hooks_are_no_ops() {
    let mut fo = MoleFractions::new(MoleFractionsConfig::default(), air()).unwrap();
    let mesh = three_patch_mesh();
    let (next, map) = mesh.edit().apply().unwrap();
    fo.update_mesh(&map);
    fo.move_points(&next);
    fo.time_set(&ObjectRegistry::default());
    assert_eq!(fo.name(), "moleFractions");
}
