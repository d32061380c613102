//! Electroneutrality check for a single sample.
//!
//! Each resolved ion concentration (mg/l) is converted to meq/l with a fixed
//! factor (charge / molar mass), cations and anions are summed, and the
//! percent difference is reported as three synthetic result rows.

use crate::models::schema::RESULT_SCHEMA;
use crate::models::{CanonicalRow, Concentration, Ion, Value};
use crate::utils::constants::{
    ANION_TOTAL_PARAM, CATION_TOTAL_PARAM, CHARGE_BALANCE_PARAM, FIELD_DETECT_COND, FIELD_PARAM,
    FIELD_RESULT_VALUE, FIELD_SAMPLE_ID, FIELD_UNIT, MEQ_UNIT, PERCENT_UNIT,
};

/// mg/l -> meq/l
pub fn meq_factor(ion: Ion) -> f64 {
    match ion {
        Ion::Calcium => 0.04990269,
        Ion::Magnesium => 0.082287595,
        Ion::Sodium => 0.043497608,
        Ion::Potassium => 0.02557656,
        Ion::Chloride => 0.028206596,
        Ion::Bicarbonate => 0.016388838,
        Ion::Carbonate => 0.033328223,
        Ion::Sulfate => 0.020833333,
        Ion::Nitrite => 0.021736513,
        Ion::Nitrate => 0.016129032,
        Ion::SodiumPlusPotassium => 0.043497608,
    }
}

/// Totals of one sample, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeBalance {
    pub cation_total: f64,
    pub anion_total: f64,
    pub balance: f64,
}

impl ChargeBalance {
    pub fn from_concentration(concentration: &Concentration) -> Self {
        let (cations, anions) = Ion::ALL.iter().fold((0.0, 0.0), |(cat, an), &ion| {
            let meq = concentration.get(ion).unwrap_or(0.0) * meq_factor(ion);
            if ion.is_cation() {
                (cat + meq, an)
            } else {
                (cat, an + meq)
            }
        });

        // Derived sodium or potassium can be negative, so the totals may cancel
        let total = cations + anions;
        let balance = if total.abs() < f64::EPSILON {
            0.0
        } else {
            100.0 * (cations - anions) / total
        };

        Self {
            cation_total: round2(cations),
            anion_total: round2(anions),
            balance: round2(balance),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The three synthetic rows for a populated concentration.
pub fn calculate_charge_balance(concentration: Concentration, sample_id: &Value) -> Vec<CanonicalRow> {
    let totals = ChargeBalance::from_concentration(&concentration);

    [
        (CHARGE_BALANCE_PARAM, totals.balance, PERCENT_UNIT),
        (CATION_TOTAL_PARAM, totals.cation_total, MEQ_UNIT),
        (ANION_TOTAL_PARAM, totals.anion_total, MEQ_UNIT),
    ]
    .into_iter()
    .map(|(param, amount, unit)| {
        CanonicalRow::empty(&RESULT_SCHEMA)
            .with(FIELD_SAMPLE_ID, sample_id.clone())
            .with(FIELD_PARAM, param)
            .with(FIELD_RESULT_VALUE, amount)
            .with(FIELD_UNIT, unit)
    })
    .collect()
}

/// Charge balance rows for the result rows of one sample, or nothing when
/// a major ion is missing.
pub fn get_charge_balance(rows: &[CanonicalRow]) -> Vec<CanonicalRow> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut concentration = Concentration::new();
    for row in rows {
        concentration.set(
            row.text(FIELD_PARAM),
            row.number(FIELD_RESULT_VALUE),
            row.get(FIELD_DETECT_COND).is_some_and(Value::is_truthy),
        );
    }

    if !concentration.has_major_params() {
        return Vec::new();
    }

    let sample_id = first.get(FIELD_SAMPLE_ID).cloned().unwrap_or_default();
    calculate_charge_balance(concentration, &sample_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(id: &str, analytes: &[(&str, f64)]) -> Vec<CanonicalRow> {
        analytes
            .iter()
            .map(|(param, value)| {
                CanonicalRow::empty(&RESULT_SCHEMA)
                    .with(FIELD_SAMPLE_ID, id)
                    .with(FIELD_PARAM, *param)
                    .with(FIELD_RESULT_VALUE, *value)
                    .with(FIELD_UNIT, "mg/l")
            })
            .collect()
    }

    fn summary(rows: &[CanonicalRow]) -> Vec<(String, f64, String)> {
        rows.iter()
            .map(|row| {
                (
                    row.text(FIELD_PARAM).unwrap_or_default().to_string(),
                    row.number(FIELD_RESULT_VALUE).unwrap_or(f64::NAN),
                    row.text(FIELD_UNIT).unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_balanced_sample() {
        let rows = sample(
            "S-1",
            &[
                ("Bicarbonate", 188.0),
                ("Calcium", 66.0),
                ("Chloride", 57.0),
                ("Magnesium", 27.0),
                ("Nitrate", 0.8),
                ("Potassium", 7.4),
                ("Sodium", 109.0),
                ("Sulfate", 273.0),
            ],
        );

        let balance = get_charge_balance(&rows);

        assert_eq!(
            summary(&balance),
            vec![
                ("Charge Balance".to_string(), 0.27, "%".to_string()),
                ("Cation Total".to_string(), 10.45, "meq/l".to_string()),
                ("Anions Total".to_string(), 10.39, "meq/l".to_string()),
            ]
        );
        assert!(balance
            .iter()
            .all(|row| row.text(FIELD_SAMPLE_ID) == Some("S-1")));
    }

    #[test]
    fn test_cancelling_totals_give_zero_balance() {
        let sulfate = (meq_factor(Ion::Sodium) - meq_factor(Ion::Potassium)) / meq_factor(Ion::Sulfate);
        let mut concentration = Concentration::new();
        concentration.set(Some("Potassium"), Some(1.0), false);
        concentration.set(Some("Sodium plus potassium"), Some(0.0), false);
        concentration.set(Some("Sulfate"), Some(sulfate), false);

        assert_eq!(concentration.sodium(), Some(-1.0));

        let totals = ChargeBalance::from_concentration(&concentration);
        assert!(totals.balance.is_finite());
        assert_eq!(totals.balance, 0.0);
        assert_eq!(totals.cation_total, -0.02);
        assert_eq!(totals.anion_total, 0.02);
    }

    #[test]
    fn test_sodium_plus_potassium_sample() {
        let rows = sample(
            "S-2",
            &[
                ("Bicarbonate", 139.0),
                ("Calcium", 46.0),
                ("Chloride", 12.0),
                ("Magnesium", 10.0),
                ("Nitrate", 0.5),
                ("Sodium plus potassium", 25.0),
                ("Sulfate", 76.0),
            ],
        );

        let balance = get_charge_balance(&rows);

        assert_eq!(
            summary(&balance),
            vec![
                ("Charge Balance".to_string(), -0.02, "%".to_string()),
                ("Cation Total".to_string(), 4.21, "meq/l".to_string()),
                ("Anions Total".to_string(), 4.21, "meq/l".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_major_ion_yields_nothing() {
        let complete = [
            ("Bicarbonate", 188.0),
            ("Calcium", 66.0),
            ("Chloride", 57.0),
            ("Magnesium", 27.0),
            ("Sodium", 109.0),
            ("Sulfate", 273.0),
        ];

        for skipped in 0..complete.len() {
            let analytes: Vec<_> = complete
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skipped)
                .map(|(_, a)| *a)
                .collect();
            assert!(
                get_charge_balance(&sample("S", &analytes)).is_empty(),
                "missing {}",
                complete[skipped].0
            );
        }

        assert!(get_charge_balance(&[]).is_empty());
    }

    #[test]
    fn test_flagged_observation_is_ignored() {
        let mut rows = sample(
            "S-3",
            &[
                ("Bicarbonate", 188.0),
                ("Calcium", 66.0),
                ("Chloride", 57.0),
                ("Magnesium", 27.0),
                ("Sodium", 109.0),
            ],
        );
        rows.push(
            CanonicalRow::empty(&RESULT_SCHEMA)
                .with(FIELD_SAMPLE_ID, "S-3")
                .with(FIELD_PARAM, "Sulfate")
                .with(FIELD_RESULT_VALUE, 273.0)
                .with(FIELD_DETECT_COND, "Not Detected"),
        );

        assert!(get_charge_balance(&rows).is_empty());
    }

    #[test]
    fn test_other_result_fields_are_null() {
        let rows = calculate_charge_balance(Concentration::new(), &Value::from("S-4"));

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.len(), RESULT_SCHEMA.len());
            assert_eq!(row.get("StationId"), Some(&Value::Null));
            assert_eq!(row.get("SampleDate"), Some(&Value::Null));
        }
        assert_eq!(rows[0].number(FIELD_RESULT_VALUE), Some(0.0));
    }
}
