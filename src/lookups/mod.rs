//! Immutable, process-wide lookup tables. Built lazily on first use and never
//! mutated afterwards, so they are safe to share across worker threads.

pub mod chemical_groups;
pub mod param_groups;
pub mod unit_rules;
pub mod vocabularies;

pub use chemical_groups::{classify, ChemicalGroup};
pub use param_groups::{calculate_paramgroup, ParamGroup};
pub use unit_rules::{find_rule, ChemicalPattern, UnitRule, UNIT_RULES};
pub use vocabularies::{ion_for_chemical, sample_media, station_type, StationType};
