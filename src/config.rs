//! Run settings.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file (TOML, JSON or YAML by extension), then `WQCHEM_*`
//! environment variables. Command-line flags are applied on top by the CLI.

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    DEFAULT_BALANCE_THRESHOLD, DEFAULT_BATCH_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_RESULTS_TABLE,
    DEFAULT_SPATIAL_REFERENCE, DEFAULT_STATIONS_TABLE, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Rows per INSERT statement
    #[validate(range(min = 1, max = 10000))]
    pub batch_size: usize,

    #[validate(length(min = 1))]
    pub stations_table: String,

    #[validate(length(min = 1))]
    pub results_table: String,

    pub output_dir: PathBuf,

    /// Threads for per-sample charge balancing
    #[validate(range(min = 1, max = 512))]
    pub max_workers: usize,

    /// Absolute charge balance error (percent) reported as an outlier
    #[validate(range(min = 0.0, max = 100.0))]
    pub balance_threshold: f64,

    /// Single-character field delimiter of the input exports
    #[validate(length(equal = 1))]
    pub delimiter: String,

    /// SRID of the Shape geometry
    pub spatial_reference: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            stations_table: DEFAULT_STATIONS_TABLE.to_string(),
            results_table: DEFAULT_RESULTS_TABLE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_workers: num_cpus::get(),
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
            delimiter: ",".to_string(),
            spatial_reference: DEFAULT_SPATIAL_REFERENCE,
        }
    }
}

impl Settings {
    /// Defaults, then `file` if given, then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(file: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("batch_size", defaults.batch_size as i64)?
            .set_default("stations_table", defaults.stations_table)?
            .set_default("results_table", defaults.results_table)?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().to_string())?
            .set_default("max_workers", defaults.max_workers as i64)?
            .set_default("balance_threshold", defaults.balance_threshold)?
            .set_default("delimiter", defaults.delimiter)?
            .set_default("spatial_reference", defaults.spatial_reference as i64)?;

        if let Some(path) = file {
            if !path.exists() {
                return Err(ProcessingError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let settings: Self = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, no_env()).unwrap();

        assert_eq!(settings.batch_size, 500);
        assert_eq!(settings.stations_table, "Stations");
        assert_eq!(settings.results_table, "Results");
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert_eq!(settings.delimiter_byte(), b',');
        assert_eq!(settings.spatial_reference, 4326);
        assert!(settings.max_workers >= 1);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "batch_size = 250").unwrap();
        writeln!(file, "results_table = \"WaterResults\"").unwrap();
        writeln!(file, "delimiter = \"\\t\"").unwrap();

        let settings = Settings::load_with_env(Some(file.path()), no_env()).unwrap();

        assert_eq!(settings.batch_size, 250);
        assert_eq!(settings.results_table, "WaterResults");
        assert_eq!(settings.delimiter_byte(), b'\t');
        assert_eq!(settings.stations_table, "Stations");
    }

    #[test]
    fn test_environment_overrides_file() {
        let env: HashMap<String, String> = [("WQCHEM_BATCH_SIZE".to_string(), "42".to_string())]
            .into_iter()
            .collect();
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(env));

        let settings = Settings::load_with_env(None, environment).unwrap();
        assert_eq!(settings.batch_size, 42);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "batch_size = 0").unwrap();

        let result = Settings::load_with_env(Some(file.path()), no_env());
        assert!(matches!(result, Err(ProcessingError::Validation(_))));

        let settings = Settings {
            delimiter: ",;".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load_with_env(Some(Path::new("/nonexistent/settings.toml")), no_env());
        assert!(matches!(result, Err(ProcessingError::Config(_))));
    }
}
