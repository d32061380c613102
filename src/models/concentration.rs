use crate::lookups::vocabularies::ion_for_chemical;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Ions tracked for the charge balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ion {
    Calcium,
    Magnesium,
    Sodium,
    Potassium,
    Chloride,
    Bicarbonate,
    Carbonate,
    Sulfate,
    Nitrite,
    Nitrate,
    SodiumPlusPotassium,
}

impl Ion {
    pub const ALL: [Ion; 11] = [
        Ion::Calcium,
        Ion::Magnesium,
        Ion::Sodium,
        Ion::Potassium,
        Ion::Chloride,
        Ion::Bicarbonate,
        Ion::Carbonate,
        Ion::Sulfate,
        Ion::Nitrite,
        Ion::Nitrate,
        Ion::SodiumPlusPotassium,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Ion::Calcium => "ca",
            Ion::Magnesium => "mg",
            Ion::Sodium => "na",
            Ion::Potassium => "k",
            Ion::Chloride => "cl",
            Ion::Bicarbonate => "hco3",
            Ion::Carbonate => "co3",
            Ion::Sulfate => "so4",
            Ion::Nitrite => "no2",
            Ion::Nitrate => "no3",
            Ion::SodiumPlusPotassium => "na+k",
        }
    }

    pub fn is_cation(&self) -> bool {
        matches!(
            self,
            Ion::Calcium
                | Ion::Magnesium
                | Ion::Sodium
                | Ion::Potassium
                | Ion::SodiumPlusPotassium
        )
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Observed amount(s) for one ion. Duplicates are kept and averaged on read.
#[derive(Debug, Clone, PartialEq)]
enum Amount {
    Single(f64),
    Many(Vec<f64>),
}

impl Amount {
    fn push(&mut self, amount: f64) {
        match self {
            Amount::Single(first) => *self = Amount::Many(vec![*first, amount]),
            Amount::Many(values) => values.push(amount),
        }
    }

    fn mean(&self) -> f64 {
        match self {
            Amount::Single(value) => *value,
            Amount::Many(values) => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

/// Per-sample accumulator of major-ion concentrations (mg/l).
///
/// Build one per sample, feed it that sample's rows, hand it to the charge
/// balance calculator, drop it.
#[derive(Debug, Clone, Default)]
pub struct Concentration {
    amounts: HashMap<Ion, Amount>,
}

impl Concentration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. Flagged, incomplete and untracked observations
    /// are dropped.
    pub fn set(&mut self, chemical: Option<&str>, amount: Option<f64>, detect_condition: bool) {
        if detect_condition {
            return;
        }

        let (Some(chemical), Some(amount)) = (chemical, amount) else {
            return;
        };

        let Some(ion) = ion_for_chemical(chemical) else {
            return;
        };

        match self.amounts.get_mut(&ion) {
            Some(existing) => existing.push(amount),
            None => {
                self.amounts.insert(ion, Amount::Single(amount));
            }
        }
    }

    /// Stored value for `ion` without sodium/potassium resolution.
    pub fn raw(&self, ion: Ion) -> Option<f64> {
        self.amounts.get(&ion).map(Amount::mean)
    }

    pub fn calcium(&self) -> Option<f64> {
        self.raw(Ion::Calcium)
    }

    pub fn magnesium(&self) -> Option<f64> {
        self.raw(Ion::Magnesium)
    }

    pub fn chloride(&self) -> Option<f64> {
        self.raw(Ion::Chloride)
    }

    pub fn bicarbonate(&self) -> Option<f64> {
        self.raw(Ion::Bicarbonate)
    }

    pub fn carbonate(&self) -> Option<f64> {
        self.raw(Ion::Carbonate)
    }

    pub fn sulfate(&self) -> Option<f64> {
        self.raw(Ion::Sulfate)
    }

    pub fn nitrite(&self) -> Option<f64> {
        self.raw(Ion::Nitrite)
    }

    pub fn nitrate(&self) -> Option<f64> {
        self.raw(Ion::Nitrate)
    }

    /// Measured sodium, or combined minus potassium when only that is known.
    pub fn sodium(&self) -> Option<f64> {
        let sodium = self.raw(Ion::Sodium);
        if sodium.is_some() {
            return sodium;
        }

        match (self.raw(Ion::SodiumPlusPotassium), self.raw(Ion::Potassium)) {
            (Some(combined), Some(potassium)) => Some(combined - potassium),
            _ => None,
        }
    }

    /// Measured potassium, or combined minus sodium when only that is known.
    pub fn potassium(&self) -> Option<f64> {
        let potassium = self.raw(Ion::Potassium);
        if potassium.is_some() {
            return potassium;
        }

        match (self.raw(Ion::SodiumPlusPotassium), self.raw(Ion::Sodium)) {
            (Some(combined), Some(sodium)) => Some(combined - sodium),
            _ => None,
        }
    }

    /// Combined sodium plus potassium. Zero once sodium and potassium both
    /// resolve, so the pair is not counted twice.
    pub fn sodium_plus_potassium(&self) -> Option<f64> {
        let combined = self.raw(Ion::SodiumPlusPotassium)?;

        if self.sodium().is_some() && self.potassium().is_some() {
            return Some(0.0);
        }

        Some(combined)
    }

    /// Resolved value for any tracked ion.
    pub fn get(&self, ion: Ion) -> Option<f64> {
        match ion {
            Ion::Sodium => self.sodium(),
            Ion::Potassium => self.potassium(),
            Ion::SodiumPlusPotassium => self.sodium_plus_potassium(),
            other => self.raw(other),
        }
    }

    /// Whether enough major ions are present to compute a charge balance.
    pub fn has_major_params(&self) -> bool {
        self.calcium().is_some()
            && self.magnesium().is_some()
            && self.chloride().is_some()
            && self.bicarbonate().is_some()
            && self.sulfate().is_some()
            && (self.sodium().is_some() || self.sodium_plus_potassium().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_observations_are_averaged() {
        let mut concentration = Concentration::new();
        concentration.set(Some("Calcium"), Some(60.0), false);
        concentration.set(Some("Dissolved Calcium"), Some(70.0), false);
        concentration.set(Some("total calcium"), Some(80.0), false);

        assert_eq!(concentration.calcium(), Some(70.0));
    }

    #[test]
    fn test_detect_condition_discards_observation() {
        let mut concentration = Concentration::new();
        concentration.set(Some("Sulfate"), Some(273.0), true);

        assert_eq!(concentration.sulfate(), None);
        assert!(concentration.is_empty());
    }

    #[test]
    fn test_missing_or_unknown_inputs_are_ignored() {
        let mut concentration = Concentration::new();
        concentration.set(None, Some(1.0), false);
        concentration.set(Some("Calcium"), None, false);
        concentration.set(Some("Arsenic"), Some(4.0), false);

        assert!(concentration.is_empty());
    }

    #[test]
    fn test_sodium_derived_from_combined() {
        let mut concentration = Concentration::new();
        concentration.set(Some("Sodium plus potassium"), Some(25.0), false);
        concentration.set(Some("Potassium"), Some(5.0), false);

        assert_eq!(concentration.sodium(), Some(20.0));
        assert_eq!(concentration.potassium(), Some(5.0));
        assert_eq!(concentration.sodium_plus_potassium(), Some(0.0));
    }

    #[test]
    fn test_potassium_derived_from_combined() {
        let mut concentration = Concentration::new();
        concentration.set(Some("sodium+potassium"), Some(30.0), false);
        concentration.set(Some("Sodium"), Some(26.0), false);

        assert_eq!(concentration.potassium(), Some(4.0));
    }

    #[test]
    fn test_combined_kept_when_neither_is_known() {
        let mut concentration = Concentration::new();
        concentration.set(Some("Sodium plus potassium"), Some(25.0), false);

        assert_eq!(concentration.sodium(), None);
        assert_eq!(concentration.potassium(), None);
        assert_eq!(concentration.sodium_plus_potassium(), Some(25.0));
    }

    #[test]
    fn test_has_major_params() {
        let mut concentration = Concentration::new();
        for (name, amount) in [
            ("Calcium", 66.0),
            ("Magnesium", 27.0),
            ("Chloride", 57.0),
            ("Bicarbonate", 188.0),
            ("Sulfate", 273.0),
        ] {
            concentration.set(Some(name), Some(amount), false);
        }
        assert!(!concentration.has_major_params());

        concentration.set(Some("Sodium plus potassium"), Some(25.0), false);
        assert!(concentration.has_major_params());
    }
}
