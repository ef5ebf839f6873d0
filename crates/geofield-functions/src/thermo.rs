//! Species data needed by composition function objects.

use geofield_registry::FunctionObjectError;

/// Species names and molecular weights of a mixture.
pub trait SpeciesThermo: Send + Sync {
    /// Species names, in species-index order. Each names the registered
    /// mass-fraction field of that species.
    fn species(&self) -> &[String];

    /// Molecular weight of species `index` in kg/kmol.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.species().len()`.
    fn molecular_weight(&self, index: usize) -> f64;
}

/// Species data held in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesTable {
    species: Vec<String>,
    weights: Vec<f64>,
}

impl SpeciesTable {
    /// Build from `(name, molecular weight)` pairs.
    ///
    /// Returns `Err(FunctionObjectError::InvalidConfig)` if the list is
    /// empty, a name is empty or repeated, or a weight is not finite and
    /// positive.
    pub fn new<S: Into<String>>(
        entries: impl IntoIterator<Item = (S, f64)>,
    ) -> Result<Self, FunctionObjectError> {
        let mut species: Vec<String> = Vec::new();
        let mut weights = Vec::new();
        for (name, weight) in entries {
            let name = name.into();
            if name.is_empty() {
                return Err(invalid("species name is empty".to_string()));
            }
            if species.contains(&name) {
                return Err(invalid(format!("species '{name}' listed twice")));
            }
            if !(weight.is_finite() && weight > 0.0) {
                return Err(invalid(format!(
                    "species '{name}' has molecular weight {weight}"
                )));
            }
            species.push(name);
            weights.push(weight);
        }
        if species.is_empty() {
            return Err(invalid("no species".to_string()));
        }
        Ok(Self { species, weights })
    }
}

fn invalid(reason: String) -> FunctionObjectError {
    FunctionObjectError::InvalidConfig { reason }
}

impl SpeciesThermo for SpeciesTable {
    fn species(&self) -> &[String] {
        &self.species
    }

    fn molecular_weight(&self, index: usize) -> f64 {
        self.weights[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_order() {
        let t = SpeciesTable::new([("O2", 31.998), ("N2", 28.014)]).unwrap();
        assert_eq!(t.species(), &["O2".to_string(), "N2".to_string()]);
        assert_eq!(t.molecular_weight(1), 28.014);
    }

    #[test]
    fn table_rejects_bad_entries() {
        assert!(SpeciesTable::new(Vec::<(String, f64)>::new()).is_err());
        assert!(SpeciesTable::new([("O2", 0.0)]).is_err());
        assert!(SpeciesTable::new([("O2", f64::NAN)]).is_err());
        assert!(SpeciesTable::new([("O2", 32.0), ("O2", 32.0)]).is_err());
        assert!(SpeciesTable::new([("", 32.0)]).is_err());
    }
}
