pub mod caster;
pub mod charge_balance;
pub mod normalizer;
pub mod pipeline;
pub mod quality_report;
pub mod sample_processor;
pub mod unit_normalizer;

pub use caster::{cast_for_sql, Caster, SqlRow};
pub use charge_balance::{calculate_charge_balance, get_charge_balance, ChargeBalance};
pub use normalizer::{normalize_sample, normalize_station, reorder_filter};
pub use pipeline::EtlPipeline;
pub use quality_report::{BalanceOutlier, QualityChecker, QualityReport};
pub use sample_processor::{ProcessedResults, SampleGroup, SampleProcessor};
pub use unit_normalizer::{normalize_unit, NormalizedMeasurement};
