use crate::cli::args::{Cli, Commands, SourceArgs};
use crate::config::Settings;
use crate::error::{ProcessingError, Result};
use crate::lookups::{calculate_paramgroup, classify};
use crate::models::schema::{RESULT_SCHEMA, STATION_SCHEMA};
use crate::models::{RecordKind, SourceMapping};
use crate::processors::unit_normalizer::{canonical_key, normalize_unit};
use crate::processors::{EtlPipeline, QualityChecker};
use crate::readers::{ConcurrentReader, DelimitedReader};
use crate::utils::filename::generate_default_sql_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::SqlScriptWriter;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Set up structured logging to stderr and, optionally, a log file.
pub fn setup_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("water_chemistry_etl={}", level)));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

pub async fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.get_log_level(), cli.log_file.as_deref())?;

    match cli.command {
        Commands::Process {
            source,
            output_dir,
            batch_size,
            validate_only,
        } => {
            let mut settings = load_settings(&source)?;
            if let Some(dir) = output_dir {
                settings.output_dir = dir;
            }
            if let Some(size) = batch_size {
                settings.batch_size = size;
            }
            validator::Validate::validate(&settings)?;

            process(&source, &settings, validate_only, cli.quiet).await?;
        }

        Commands::Validate { source } => {
            let settings = load_settings(&source)?;
            process(&source, &settings, true, cli.quiet).await?;
        }

        Commands::Lookup {
            chemical,
            unit,
            amount,
        } => {
            println!("{}", lookup_summary(&chemical, unit.as_deref(), amount));
        }
    }

    Ok(())
}

fn load_settings(source: &SourceArgs) -> Result<Settings> {
    let mut settings = Settings::load(source.config.as_deref())?;
    if let Some(workers) = source.max_workers {
        settings.max_workers = workers;
    }
    validator::Validate::validate(&settings)?;
    Ok(settings)
}

async fn process(source: &SourceArgs, settings: &Settings, validate_only: bool, quiet: bool) -> Result<()> {
    if source.stations.is_none() && source.results.is_none() {
        return Err(ProcessingError::MissingData(
            "Provide --stations and/or --results".to_string(),
        ));
    }

    let mapping = Arc::new(SourceMapping::resolve(&source.source)?);
    info!(
        "Processing source '{}' with {} workers",
        mapping.name, settings.max_workers
    );

    let progress = ProgressReporter::new_spinner("Reading exports...", quiet);

    let reader = DelimitedReader::new().with_delimiter(settings.delimiter_byte());
    let data = ConcurrentReader::new(reader)
        .read_source(
            mapping.clone(),
            source.stations.clone(),
            source.results.clone(),
        )
        .await?;
    info!(
        "Read {} station rows and {} result rows",
        data.stations.len(),
        data.results.len()
    );

    progress.set_message("Normalizing...");
    let pipeline = EtlPipeline::new()
        .with_data_source(mapping.data_source.clone())
        .with_spatial_reference(settings.spatial_reference)
        .with_max_workers(settings.max_workers);

    let stations = pipeline.process_stations(&data.stations);
    let results = pipeline.process_results(&data.results, Some(&progress))?;

    progress.finish_with_message(&format!(
        "Normalized {} stations, {} results",
        stations.len(),
        results.rows.len()
    ));

    let checker = QualityChecker::new().with_balance_threshold(settings.balance_threshold);
    let report = checker.check(&results.rows);
    println!("\n{}", checker.generate_summary(&report));

    if validate_only {
        println!("Validation complete - no SQL written");
        return Ok(());
    }

    let writer = SqlScriptWriter::new().with_batch_size(settings.batch_size)?;

    if !stations.is_empty() {
        let path = generate_default_sql_filename(&settings.output_dir, &mapping.name, RecordKind::Station);
        let info = writer.write_rows(&settings.stations_table, &STATION_SCHEMA, &stations, &path)?;
        println!("Stations: {} -> {}", info.summary(), path.display());
    }

    if !results.rows.is_empty() {
        let path = generate_default_sql_filename(&settings.output_dir, &mapping.name, RecordKind::Result);
        let info = writer.write_rows(&settings.results_table, &RESULT_SCHEMA, &results.rows, &path)?;
        println!("Results: {} -> {}", info.summary(), path.display());
    }

    println!("Processing complete!");
    Ok(())
}

/// Human-readable normalization of one chemical.
pub fn lookup_summary(chemical: &str, unit: Option<&str>, amount: Option<f64>) -> String {
    let normalized = normalize_unit(Some(chemical), unit, amount);
    let key = canonical_key(normalized.chemical.as_deref().unwrap_or(chemical));
    let param_group = normalized
        .chemical
        .as_deref()
        .and_then(calculate_paramgroup);

    let or_none = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    format!(
        "Chemical:       {}\n\
         Param group:    {}\n\
         Chemical group: {}\n\
         Normalized:     {} {} ({})",
        chemical,
        or_none(param_group.map(|g| g.to_string())),
        or_none(classify(&key).map(|g| format!("{} ({})", g, g.canonical_unit()))),
        or_none(normalized.amount.map(|a| a.to_string())),
        or_none(normalized.unit),
        or_none(normalized.chemical),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_summary() {
        let summary = lookup_summary("Nitrate as N", Some("mg/l as N"), Some(1.0));

        assert!(summary.contains("Param group:    nutrient"));
        assert!(summary.contains("mg/l (nitrate)"));
        assert!(summary.contains("Chemical group: nutrient (mg/l)"));
    }

    #[test]
    fn test_lookup_summary_unknown_chemical() {
        let summary = lookup_summary("Unobtainium", None, None);

        assert!(summary.contains("Param group:    -"));
        assert!(summary.contains("Chemical group: -"));
    }
}
