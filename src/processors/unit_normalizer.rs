use crate::lookups::find_rule;
use tracing::trace;

/// Canonical (amount, unit, chemical) triple for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMeasurement {
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub chemical: Option<String>,
}

/// Lowercase, trim and collapse inner whitespace of a unit or chemical name.
pub fn canonical_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Convert a reported amount to the canonical unit of its chemical.
///
/// The first unit rule matching the chemical and unit decides the factor,
/// the target unit and, for rules that rename, the new chemical name.
/// Without a match the triple is returned unchanged.
pub fn normalize_unit(
    chemical: Option<&str>,
    unit: Option<&str>,
    amount: Option<f64>,
) -> NormalizedMeasurement {
    let unchanged = NormalizedMeasurement {
        amount,
        unit: unit.map(str::to_string),
        chemical: chemical.map(str::to_string),
    };

    let (Some(chemical), Some(unit)) = (chemical, unit) else {
        return unchanged;
    };

    let chemical_key = canonical_key(chemical);
    let unit_key = canonical_key(unit);

    let Some(rule) = find_rule(&chemical_key, &unit_key) else {
        trace!(chemical, unit, "no unit rule");
        return unchanged;
    };

    NormalizedMeasurement {
        amount: amount.map(|a| a * rule.factor),
        unit: Some(rule.unit.to_string()),
        chemical: Some(
            rule.rename
                .map(str::to_string)
                .unwrap_or_else(|| chemical.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bicarbonate_as_caco3() {
        let normalized = normalize_unit(Some("Bicarbonate as CaCO3"), Some("mg/L as CaCO3"), Some(100.0));

        assert_eq!(normalized.chemical.as_deref(), Some("bicarbonate"));
        assert_eq!(normalized.unit.as_deref(), Some("mg/l"));
        assert!((normalized.amount.unwrap() - 122.0).abs() < 1e-9);
    }

    #[test]
    fn test_nitrate_as_nitrogen_is_renamed() {
        let normalized = normalize_unit(Some("Nitrate-Nitrogen"), Some("mg/l as N"), Some(1.0));

        assert_eq!(normalized.chemical.as_deref(), Some("nitrate"));
        assert_eq!(normalized.unit.as_deref(), Some("mg/l"));
        assert!((normalized.amount.unwrap() - 4.426802887).abs() < 1e-12);
    }

    #[test]
    fn test_group_conversion_keeps_name() {
        let normalized = normalize_unit(Some("Arsenic"), Some("MG/L"), Some(0.01));

        assert_eq!(normalized.chemical.as_deref(), Some("Arsenic"));
        assert_eq!(normalized.unit.as_deref(), Some("ug/l"));
        assert!((normalized.amount.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmatched_and_missing_inputs_pass_through() {
        let normalized = normalize_unit(Some("Atrazine"), Some("ug/L"), Some(0.3));
        assert_eq!(
            normalized,
            NormalizedMeasurement {
                amount: Some(0.3),
                unit: Some("ug/L".to_string()),
                chemical: Some("Atrazine".to_string()),
            }
        );

        let normalized = normalize_unit(None, Some("mg/l"), Some(1.0));
        assert_eq!(normalized.chemical, None);
        assert_eq!(normalized.amount, Some(1.0));
    }

    #[test]
    fn test_missing_amount_still_converts_unit() {
        let normalized = normalize_unit(Some("calcium"), Some("ug/l"), None);
        assert_eq!(normalized.unit.as_deref(), Some("mg/l"));
        assert_eq!(normalized.amount, None);
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("  mg/L   as  N "), "mg/l as n");
    }
}
