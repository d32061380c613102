use crate::error::{ProcessingError, Result};
use crate::models::CanonicalRow;
use crate::processors::charge_balance::get_charge_balance;
use crate::utils::constants::FIELD_SAMPLE_ID;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Result rows of one sample, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGroup {
    pub sample_id: String,
    pub rows: Vec<CanonicalRow>,
}

/// Result rows with the synthetic charge balance rows appended per sample.
#[derive(Debug, Clone, Default)]
pub struct ProcessedResults {
    pub rows: Vec<CanonicalRow>,
    pub samples: usize,
    pub balanced_samples: usize,
}

/// Groups result rows by sample and derives each sample's charge balance
/// on a bounded thread pool.
pub struct SampleProcessor {
    max_workers: usize,
}

impl SampleProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    /// Groups in order of first appearance, plus the rows without a SampleId.
    pub fn group_by_sample(rows: Vec<CanonicalRow>) -> (Vec<SampleGroup>, Vec<CanonicalRow>) {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<SampleGroup> = Vec::new();
        let mut ungrouped = Vec::new();

        for row in rows {
            let sample_id = match row.get(FIELD_SAMPLE_ID) {
                Some(value) if !value.is_null() => value.to_string(),
                _ => {
                    ungrouped.push(row);
                    continue;
                }
            };

            match index.get(&sample_id) {
                Some(&i) => groups[i].rows.push(row),
                None => {
                    index.insert(sample_id.clone(), groups.len());
                    groups.push(SampleGroup {
                        sample_id,
                        rows: vec![row],
                    });
                }
            }
        }

        (groups, ungrouped)
    }

    pub fn process(
        &self,
        rows: Vec<CanonicalRow>,
        progress: Option<&ProgressReporter>,
    ) -> Result<ProcessedResults> {
        let (groups, ungrouped) = Self::group_by_sample(rows);
        let samples = groups.len();
        let processed_count = AtomicUsize::new(0);

        if let Some(p) = progress {
            p.set_message(&format!("Balancing {} samples...", samples));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::ThreadPool(e.to_string()))?;

        // One Concentration per sample, created and dropped inside the worker
        let balanced: Vec<(Vec<CanonicalRow>, bool)> = pool.install(|| {
            groups
                .into_par_iter()
                .map(|group| {
                    let balance = get_charge_balance(&group.rows);
                    let has_balance = !balance.is_empty();

                    let mut rows = group.rows;
                    rows.extend(balance);

                    let count = processed_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(count as u64);
                    }

                    (rows, has_balance)
                })
                .collect()
        });

        let balanced_samples = balanced.iter().filter(|(_, has)| *has).count();
        let mut all_rows: Vec<CanonicalRow> =
            balanced.into_iter().flat_map(|(rows, _)| rows).collect();
        all_rows.extend(ungrouped);

        debug!(
            "Charge balance computed for {} of {} samples",
            balanced_samples, samples
        );

        Ok(ProcessedResults {
            rows: all_rows,
            samples,
            balanced_samples,
        })
    }
}

impl Default for SampleProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
