use crate::models::CanonicalRow;
use crate::utils::constants::{
    CHARGE_BALANCE_PARAM, DEFAULT_BALANCE_THRESHOLD, FIELD_PARAM, FIELD_PARAM_GROUP,
    FIELD_RESULT_VALUE, FIELD_SAMPLE_ID,
};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct QualityReport {
    pub total_rows: usize,
    pub samples: usize,
    pub balance_sets: usize,
    pub null_result_values: usize,
    /// Parameter name -> rows without a ParamGroup
    pub unclassified_params: BTreeMap<String, usize>,
    pub balance_outliers: Vec<BalanceOutlier>,
}

/// A sample whose charge balance error exceeds the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceOutlier {
    pub sample_id: String,
    pub balance: f64,
}

impl QualityReport {
    pub fn has_outliers(&self) -> bool {
        !self.balance_outliers.is_empty()
    }
}

/// Summarises a normalized result set. Findings are reported, never rejected.
pub struct QualityChecker {
    balance_threshold: f64,
}

impl QualityChecker {
    pub fn new() -> Self {
        Self {
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
        }
    }

    pub fn with_balance_threshold(mut self, threshold: f64) -> Self {
        self.balance_threshold = threshold;
        self
    }

    pub fn check(&self, results: &[CanonicalRow]) -> QualityReport {
        let mut report = QualityReport {
            total_rows: results.len(),
            ..QualityReport::default()
        };
        let mut samples = HashSet::new();

        for row in results {
            let sample_id = row
                .get(FIELD_SAMPLE_ID)
                .filter(|v| !v.is_null())
                .map(|v| v.to_string());
            if let Some(ref id) = sample_id {
                samples.insert(id.clone());
            }

            let value = row.number(FIELD_RESULT_VALUE);
            if value.is_none() {
                report.null_result_values += 1;
            }

            let Some(param) = row.text(FIELD_PARAM) else {
                continue;
            };

            if param == CHARGE_BALANCE_PARAM {
                report.balance_sets += 1;
                if let Some(balance) = value.filter(|b| b.abs() > self.balance_threshold) {
                    report.balance_outliers.push(BalanceOutlier {
                        sample_id: sample_id.unwrap_or_default(),
                        balance,
                    });
                }
            }

            if row.text(FIELD_PARAM_GROUP).is_none() {
                *report
                    .unclassified_params
                    .entry(param.to_string())
                    .or_insert(0) += 1;
            }
        }

        report.samples = samples.len();
        report
    }

    pub fn generate_summary(&self, report: &QualityReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Quality Report ===\n");
        summary.push_str(&format!("Result Rows: {}\n", report.total_rows));
        summary.push_str(&format!("Samples: {}\n", report.samples));
        summary.push_str(&format!(
            "Charge Balances: {} ({:.1}% of samples)\n",
            report.balance_sets,
            percent(report.balance_sets, report.samples)
        ));
        summary.push_str(&format!(
            "Null Result Values: {} ({:.1}%)\n",
            report.null_result_values,
            percent(report.null_result_values, report.total_rows)
        ));

        summary.push_str(&format!(
            "\nUnclassified Parameters: {}\n",
            report.unclassified_params.len()
        ));
        let mut unclassified: Vec<_> = report.unclassified_params.iter().collect();
        unclassified.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (param, count) in unclassified.iter().take(10) {
            summary.push_str(&format!("  {} ({} rows)\n", param, count));
        }

        summary.push_str(&format!(
            "\nCharge Balance Outliers (|balance| > {}%): {}\n",
            self.balance_threshold,
            report.balance_outliers.len()
        ));
        for (i, outlier) in report.balance_outliers.iter().take(10).enumerate() {
            summary.push_str(&format!(
                "  {}. Sample {}: {:+.2}%\n",
                i + 1,
                outlier.sample_id,
                outlier.balance
            ));
        }

        summary
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::RESULT_SCHEMA;
    use crate::models::Value;

    fn result(sample: &str, param: &str, value: Option<f64>, group: Option<&str>) -> CanonicalRow {
        CanonicalRow::empty(&RESULT_SCHEMA)
            .with(FIELD_SAMPLE_ID, sample)
            .with(FIELD_PARAM, param)
            .with(FIELD_RESULT_VALUE, value)
            .with(FIELD_PARAM_GROUP, group)
    }

    #[test]
    fn test_check() {
        let rows = vec![
            result("S1", "Calcium", Some(66.0), Some("inorganics, major, metals")),
            result("S1", "Charge Balance", Some(0.27), Some("physical")),
            result("S2", "Mystery Compound", None, None),
            result("S2", "Mystery Compound", Some(1.0), None),
            result("S3", "Charge Balance", Some(-14.5), Some("physical")),
            CanonicalRow::empty(&RESULT_SCHEMA).with(FIELD_SAMPLE_ID, Value::Null),
        ];

        let report = QualityChecker::new().check(&rows);

        assert_eq!(report.total_rows, 6);
        assert_eq!(report.samples, 3);
        assert_eq!(report.balance_sets, 2);
        assert_eq!(report.null_result_values, 2);
        assert_eq!(report.unclassified_params.get("Mystery Compound"), Some(&2));
        assert_eq!(
            report.balance_outliers,
            vec![BalanceOutlier {
                sample_id: "S3".to_string(),
                balance: -14.5
            }]
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let rows = vec![result("S1", "Charge Balance", Some(4.0), Some("physical"))];

        assert!(!QualityChecker::new().check(&rows).has_outliers());
        assert!(QualityChecker::new()
            .with_balance_threshold(2.5)
            .check(&rows)
            .has_outliers());
    }

    #[test]
    fn test_generate_summary() {
        let checker = QualityChecker::new();
        let report = checker.check(&[result("S1", "Charge Balance", Some(12.0), None)]);
        let summary = checker.generate_summary(&report);

        assert!(summary.contains("Samples: 1"));
        assert!(summary.contains("Sample S1: +12.00%"));
        assert!(summary.contains("Charge Balance (1 rows)"));
    }

    #[test]
    fn test_empty_report_summary() {
        let checker = QualityChecker::new();
        let summary = checker.generate_summary(&checker.check(&[]));
        assert!(summary.contains("Charge Balances: 0 (0.0% of samples)"));
    }
}
