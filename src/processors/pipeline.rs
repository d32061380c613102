use crate::error::Result;
use crate::models::schema::{RESULT_SCHEMA, STATION_SCHEMA};
use crate::models::{CanonicalRow, RawRow};
use crate::processors::caster::Caster;
use crate::processors::normalizer::{normalize_sample, normalize_station, reorder_filter};
use crate::processors::sample_processor::{ProcessedResults, SampleProcessor};
use crate::utils::constants::{DEFAULT_SPATIAL_REFERENCE, FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_SHAPE};
use crate::utils::coordinates::shape_expression;
use crate::utils::progress::ProgressReporter;
use tracing::{debug, info};

/// Raw rows in, schema-shaped canonical rows out.
///
/// Stations: cast, normalize, Shape, reorder/filter.
/// Results: cast, normalize, per-sample charge balance, reorder/filter.
pub struct EtlPipeline {
    caster: Caster,
    data_source: Option<String>,
    spatial_reference: u32,
    max_workers: usize,
}

impl EtlPipeline {
    pub fn new() -> Self {
        Self {
            caster: Caster::new(),
            data_source: None,
            spatial_reference: DEFAULT_SPATIAL_REFERENCE,
            max_workers: num_cpus::get(),
        }
    }

    pub fn with_caster(mut self, caster: Caster) -> Self {
        self.caster = caster;
        self
    }

    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = Some(data_source.into());
        self
    }

    pub fn with_spatial_reference(mut self, spatial_reference: u32) -> Self {
        self.spatial_reference = spatial_reference;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn process_station(&self, raw: &RawRow) -> CanonicalRow {
        let mut row = normalize_station(self.caster.cast(raw, &STATION_SCHEMA));

        if row.get(FIELD_SHAPE).map_or(true, |v| v.is_null()) {
            let shape = shape_expression(
                row.number(FIELD_LONGITUDE),
                row.number(FIELD_LATITUDE),
                self.spatial_reference,
            );
            row.set(FIELD_SHAPE, shape);
        }

        reorder_filter(&row, &STATION_SCHEMA)
    }

    pub fn process_stations(&self, raw: &[RawRow]) -> Vec<CanonicalRow> {
        let rows: Vec<_> = raw.iter().map(|r| self.process_station(r)).collect();
        let located = rows
            .iter()
            .filter(|r| r.get(FIELD_SHAPE).is_some_and(|v| !v.is_null()))
            .count();

        info!("Normalized {} stations ({} located)", rows.len(), located);
        rows
    }

    /// Cast and normalize one result row; no charge balance.
    pub fn normalize_result(&self, raw: &RawRow) -> CanonicalRow {
        normalize_sample(
            self.caster.cast(raw, &RESULT_SCHEMA),
            self.data_source.as_deref(),
        )
    }

    pub fn process_results(
        &self,
        raw: &[RawRow],
        progress: Option<&ProgressReporter>,
    ) -> Result<ProcessedResults> {
        let normalized: Vec<_> = raw.iter().map(|r| self.normalize_result(r)).collect();
        debug!("Normalized {} result rows", normalized.len());

        let mut processed = SampleProcessor::new(self.max_workers).process(normalized, progress)?;
        processed.rows = processed
            .rows
            .iter()
            .map(|row| reorder_filter(row, &RESULT_SCHEMA))
            .collect();

        info!(
            "Normalized {} result rows across {} samples ({} charge balances)",
            processed.rows.len(),
            processed.samples,
            processed.balanced_samples
        );
        Ok(processed)
    }
}

impl Default for EtlPipeline {
    fn default() -> Self {
        Self::new()
    }
}
