//! Species mole fractions from mass fractions.
//!
//! For species `i` with mass fraction `Y_i` and molecular weight `W_i`:
//!
//! ```text
//! X_i = (Y_i / W_i) / sum_j (Y_j / W_j)
//! ```
//!
//! evaluated on every interior cell and every boundary face. A point where
//! every mass fraction is zero gets `X_i = 0`.

use crate::thermo::SpeciesThermo;
use geofield_core::{Dimensions, TimeIndex};
use geofield_field::{
    BoundarySpec, FieldConfig, FvPatch, InitialValues, PatchFieldSelector, PatchFieldSpec,
    PatchValue, VolScalarField,
};
use geofield_mesh::Mesh;
use geofield_registry::{FunctionObject, FunctionObjectError, ObjectRegistry};
use std::sync::Arc;

/// Configuration for [`MoleFractions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoleFractionsConfig {
    /// Function object instance name. Default: `"moleFractions"`.
    pub name: String,
    /// Prepended to each species name to name its result field.
    /// Default: `"X_"`.
    pub prefix: String,
}

impl MoleFractionsConfig {
    /// Check that the name and prefix are non-empty.
    pub fn validate(&self) -> Result<(), FunctionObjectError> {
        if self.name.is_empty() {
            return Err(FunctionObjectError::InvalidConfig {
                reason: "function object name is empty".into(),
            });
        }
        if self.prefix.is_empty() {
            return Err(FunctionObjectError::InvalidConfig {
                reason: "result prefix is empty; results would overwrite the mass fractions".into(),
            });
        }
        Ok(())
    }
}

impl Default for MoleFractionsConfig {
    fn default() -> Self {
        Self {
            name: "moleFractions".into(),
            prefix: "X_".into(),
        }
    }
}

/// Outcome of [`MoleFractions::calculate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Calculation {
    /// Results were (re)computed and stamped with the current time index.
    Computed,
    /// Results were already stamped with the current time index.
    Cached,
}

/// Computes `X_<species>` mole-fraction fields from the registered
/// mass-fraction fields.
///
/// Mass fractions are read as [`VolScalarField`]s named after each
/// species. Results are dimensionless with `calculated` patches. They are
/// created on the first calculation and updated in place afterwards, so
/// their registry ids stay stable while the mesh does.
///
/// Results are calculated on [`write`](FunctionObject::write) or by a
/// direct [`calculate`](Self::calculate); [`execute`](FunctionObject::execute)
/// does nothing. A calculation is skipped when every result already carries
/// the registry's current time index and sits on the inputs' mesh.
pub struct MoleFractions<Th> {
    config: MoleFractionsConfig,
    thermo: Th,
    selector: PatchFieldSelector<f64, FvPatch>,
}

impl<Th: SpeciesThermo> MoleFractions<Th> {
    /// Create the function object.
    ///
    /// Returns `Err(FunctionObjectError::InvalidConfig)` if the config
    /// fails validation or `thermo` lists no species.
    pub fn new(config: MoleFractionsConfig, thermo: Th) -> Result<Self, FunctionObjectError> {
        config.validate()?;
        if thermo.species().is_empty() {
            return Err(FunctionObjectError::InvalidConfig {
                reason: "thermo lists no species".into(),
            });
        }
        Ok(Self {
            config,
            thermo,
            selector: PatchFieldSelector::default(),
        })
    }

    /// The species data.
    pub fn thermo(&self) -> &Th {
        &self.thermo
    }

    /// Name of the result field for `species`.
    pub fn field_name(&self, species: &str) -> String {
        format!("{}{species}", self.config.prefix)
    }

    /// Returns `true` if every result field exists, carries the registry's
    /// current time index, and lives on the same mesh as the mass fractions.
    pub fn is_current(&self, registry: &ObjectRegistry) -> bool {
        let now = registry.time_index();
        let species = self.thermo.species();
        let Some(mesh) = species
            .first()
            .and_then(|s| registry.lookup::<VolScalarField>(s).ok())
            .map(|y| y.mesh().instance_id())
        else {
            return false;
        };
        species.iter().all(|s| {
            registry
                .lookup::<VolScalarField>(&self.field_name(s))
                .is_ok_and(|x| x.time_index() == now && x.mesh().instance_id() == mesh)
        })
    }

    /// Compute the mole fractions unless they are current.
    ///
    /// Returns `Err` if a mass-fraction field is missing or of the wrong
    /// type, or if the mass fractions do not share one mesh.
    pub fn calculate(&self, registry: &mut ObjectRegistry) -> Result<Calculation, FunctionObjectError> {
        let now = registry.time_index();
        if self.is_current(registry) {
            tracing::debug!(object = %self.config.name, time_index = %now, "mole fractions current");
            return Ok(Calculation::Cached);
        }

        let (mesh, results) = self.compute(registry)?;
        for (species, result) in self.thermo.species().iter().zip(results) {
            self.store(registry, &mesh, self.field_name(species), result, now)?;
        }
        tracing::debug!(
            object = %self.config.name,
            time_index = %now,
            species = self.thermo.species().len(),
            "mole fractions computed"
        );
        Ok(Calculation::Computed)
    }

    fn compute(
        &self,
        registry: &ObjectRegistry,
    ) -> Result<(Arc<dyn Mesh>, Vec<SpeciesValues>), FunctionObjectError> {
        let species = self.thermo.species();
        let mass = species
            .iter()
            .map(|s| registry.lookup::<VolScalarField>(s))
            .collect::<Result<Vec<_>, _>>()?;
        let mesh = Arc::clone(mass[0].mesh());
        if let Some((s, _)) = species
            .iter()
            .zip(&mass)
            .find(|(_, y)| y.mesh().instance_id() != mesh.instance_id())
        {
            return Err(FunctionObjectError::ExecutionFailed {
                name: self.config.name.clone(),
                reason: format!("mass fraction '{s}' is on a different mesh than '{}'", species[0]),
            });
        }
        let weights: Vec<f64> = (0..species.len())
            .map(|i| self.thermo.molecular_weight(i))
            .collect();

        let interior: Vec<&[f64]> = mass.iter().map(|y| y.internal_field().as_slice()).collect();
        let mut results: Vec<SpeciesValues> = mole_fractions(&interior, &weights)
            .into_iter()
            .map(|internal| SpeciesValues {
                internal,
                patches: Vec::with_capacity(mesh.patch_count()),
            })
            .collect();
        for patch in 0..mesh.patch_count() {
            let faces: Vec<&[f64]> = mass.iter().map(|y| y.boundary_field()[patch].values()).collect();
            for (result, x) in results.iter_mut().zip(mole_fractions(&faces, &weights)) {
                result.patches.push(x);
            }
        }
        Ok((mesh, results))
    }

    fn store(
        &self,
        registry: &mut ObjectRegistry,
        mesh: &Arc<dyn Mesh>,
        name: String,
        result: SpeciesValues,
        now: TimeIndex,
    ) -> Result<(), FunctionObjectError> {
        let reusable = registry
            .lookup::<VolScalarField>(&name)
            .is_ok_and(|x| x.mesh().instance_id() == mesh.instance_id() && x.is_synced_with(mesh.as_ref()));
        if reusable {
            let x = registry.lookup_mut::<VolScalarField>(&name)?;
            let (internal, mut boundary) = x.parts_mut();
            internal.copy_from_slice(&result.internal);
            for (slot, values) in boundary.iter_mut().zip(&result.patches) {
                slot.values_mut().copy_from_slice(values);
            }
            *x.time_index_mut() = now;
            return Ok(());
        }

        let mut boundary = BoundarySpec::new();
        for (patch, values) in mesh.patches().iter().zip(result.patches) {
            boundary = boundary.with_patch(
                patch.name(),
                PatchFieldSpec::calculated().with_value(PatchValue::NonUniform(values)),
            );
        }
        let config = FieldConfig::new(name, Dimensions::DIMENSIONLESS, 0.0)
            .with_initial(InitialValues::List(result.internal))
            .with_boundary(boundary)
            .with_time_index(now);
        let field = VolScalarField::new(Arc::clone(mesh), config, &self.selector)?;
        registry.replace(field);
        Ok(())
    }
}

impl<Th: SpeciesThermo> FunctionObject for MoleFractions<Th> {
    fn name(&self) -> &str {
        &self.config.name
    }

    /// Does nothing; results are produced on [`write`](FunctionObject::write).
    fn execute(&mut self, _registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        Ok(())
    }

    fn write(&mut self, registry: &mut ObjectRegistry) -> Result<(), FunctionObjectError> {
        self.calculate(registry).map(|_| ())
    }
}

struct SpeciesValues {
    internal: Vec<f64>,
    patches: Vec<Vec<f64>>,
}

/// Mole fractions of each species at each point.
///
/// `mass[i][k]` is the mass fraction of species `i` at point `k`, and
/// `weights[i]` its molecular weight. The result has the same shape as
/// `mass`. Points where `sum_j mass[j][k] / weights[j]` is zero get zero
/// for every species.
///
/// # Panics
///
/// Panics if `weights` is shorter than `mass` or the species slices
/// differ in length.
///
/// # Examples
///
/// ```
/// use geofield_functions::mole_fractions;
///
/// // Equal masses of species with weights 1 and 3.
/// let x = mole_fractions(&[&[0.5], &[0.5]], &[1.0, 3.0]);
/// assert!((x[0][0] - 0.75).abs() < 1e-12);
/// assert!((x[1][0] - 0.25).abs() < 1e-12);
/// ```
pub fn mole_fractions(mass: &[&[f64]], weights: &[f64]) -> Vec<Vec<f64>> {
    assert!(
        weights.len() >= mass.len(),
        "{} species but {} molecular weights",
        mass.len(),
        weights.len()
    );
    let points = mass.first().map_or(0, |y| y.len());
    let mut moles: Vec<Vec<f64>> = mass
        .iter()
        .zip(weights)
        .map(|(y, &w)| {
            assert_eq!(y.len(), points, "species sampled at different point counts");
            y.iter().map(|&v| v / w).collect()
        })
        .collect();
    for k in 0..points {
        let total: f64 = moles.iter().map(|n| n[k]).sum();
        for n in &mut moles {
            n[k] = if total == 0.0 { 0.0 } else { n[k] / total };
        }
    }
    moles
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    #[should_panic(expected = "2 species but 1 molecular weights")]
    fn missing_weight_panics() {
        mole_fractions(&[&[0.5], &[0.5]], &[1.0]);
    }

    #[test]
    fn zero_mixture_gives_zero() {
        let x = mole_fractions(&[&[0.0, 1.0], &[0.0, 0.0]], &[2.0, 4.0]);
        assert_eq!(x, vec![vec![0.0, 1.0], vec![0.0, 0.0]]);
    }

    #[test]
    fn config_rejects_empty_prefix() {
        let config = MoleFractionsConfig {
            prefix: String::new(),
            ..MoleFractionsConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            FunctionObjectError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn default_config_is_valid() {
        let config = MoleFractionsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix, "X_");
    }

    proptest! {
        #[test]
        fn fractions_sum_to_one(
            ys in prop::collection::vec(0.0f64..1.0, 1..6),
            ws in prop::collection::vec(1.0f64..100.0, 6),
        ) {
            prop_assume!(ys.iter().any(|&y| y > 1e-9));
            let mass: Vec<Vec<f64>> = ys.iter().map(|&y| vec![y]).collect();
            let slices: Vec<&[f64]> = mass.iter().map(Vec::as_slice).collect();
            let x = mole_fractions(&slices, &ws[..ys.len()]);
            let total: f64 = x.iter().map(|xi| xi[0]).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            prop_assert!(x.iter().all(|xi| (0.0..=1.0 + 1e-12).contains(&xi[0])));
        }
    }
}
