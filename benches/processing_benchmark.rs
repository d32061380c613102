use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use water_chemistry_etl::lookups::calculate_paramgroup;
use water_chemistry_etl::models::{RawRow, RESULT_SCHEMA};
use water_chemistry_etl::processors::{
    get_charge_balance, normalize_unit, Caster, EtlPipeline, SampleProcessor,
};

const ANALYTES: &[(&str, &str, &str)] = &[
    ("Bicarbonate as CaCO3", "154", "mg/l as CaCO3"),
    ("Calcium", "66", "mg/l"),
    ("Chloride", "57", "mg/l"),
    ("Magnesium", "27000", "ug/l"),
    ("Nitrate as N", "0.18", "mg/l as N"),
    ("Potassium", "7.4", "mg/l"),
    ("Sodium", "109", "mg/l"),
    ("Sulfate", "273", "mg/l"),
    ("Arsenic", "0.004", "mg/l"),
    ("Atrazine", "0.1", "ug/l"),
];

// Create raw result rows for benchmarking
fn create_result_rows(sample_count: usize) -> Vec<RawRow> {
    let mut rows = Vec::with_capacity(sample_count * ANALYTES.len());

    for sample in 0..sample_count {
        for (param, value, unit) in ANALYTES {
            rows.push(
                RawRow::new()
                    .with("SampleId", format!("SAMPLE-{}", sample))
                    .with("StationId", format!("ORG_WQX-{}", sample % 50))
                    .with("SampleDate", "2015-06-12")
                    .with("SampleTime", "10:30:00")
                    .with("Param", *param)
                    .with("ResultValue", *value)
                    .with("Unit", *unit)
                    .with("SampMedia", "WL"),
            );
        }
    }

    rows
}

fn caster() -> Caster {
    Caster::with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

fn benchmark_cast(c: &mut Criterion) {
    let rows = create_result_rows(10);
    let caster = caster();

    c.bench_function("cast_result_rows", |b| {
        b.iter(|| {
            let cast: Vec<_> = rows.iter().map(|r| caster.cast(r, &RESULT_SCHEMA)).collect();
            black_box(cast.len())
        })
    });
}

fn benchmark_unit_normalization(c: &mut Criterion) {
    c.bench_function("normalize_unit", |b| {
        b.iter(|| {
            let mut converted = 0;
            for (param, value, unit) in ANALYTES {
                let normalized = normalize_unit(Some(*param), Some(*unit), value.parse().ok());
                if normalized.unit.as_deref() != Some(*unit) {
                    converted += 1;
                }
            }
            black_box(converted)
        })
    });
}

fn benchmark_paramgroup_lookup(c: &mut Criterion) {
    let names = ["calcium", "Nitrate", "atrazine", "gross alpha", "unknown compound"];

    c.bench_function("calculate_paramgroup", |b| {
        b.iter(|| {
            let found = names
                .iter()
                .filter(|n| calculate_paramgroup(n).is_some())
                .count();
            black_box(found)
        })
    });
}

fn benchmark_charge_balance(c: &mut Criterion) {
    let pipeline = EtlPipeline::new().with_caster(caster());
    let rows: Vec<_> = create_result_rows(1)
        .iter()
        .map(|r| pipeline.normalize_result(r))
        .collect();

    c.bench_function("get_charge_balance", |b| {
        b.iter(|| black_box(get_charge_balance(&rows).len()))
    });
}

fn benchmark_varying_sample_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("results_by_sample_count");
    let pipeline = EtlPipeline::new().with_caster(caster());

    for &size in &[10, 100, 1000] {
        let rows: Vec<_> = create_result_rows(size)
            .iter()
            .map(|r| pipeline.normalize_result(r))
            .collect();

        group.bench_with_input(BenchmarkId::new("samples", size), &rows, |b, rows| {
            b.iter(|| {
                let processed = SampleProcessor::new(4).process(rows.clone(), None);
                black_box(processed.map(|p| p.balanced_samples).unwrap_or(0))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cast,
    benchmark_unit_normalization,
    benchmark_paramgroup_lookup,
    benchmark_charge_balance,
    benchmark_varying_sample_counts
);
criterion_main!(benches);
