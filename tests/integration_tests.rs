use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};
use water_chemistry_etl::models::{
    CanonicalRow, Concentration, RawRow, RecordKind, SourceMapping, Value, RESULT_SCHEMA,
    STATION_SCHEMA,
};
use water_chemistry_etl::processors::{
    cast_for_sql, get_charge_balance, normalize_sample, normalize_station, reorder_filter, Caster,
    EtlPipeline, QualityChecker,
};
use water_chemistry_etl::readers::{ConcurrentReader, DelimitedReader};
use water_chemistry_etl::utils::filename::sql_filename_for_date;
use water_chemistry_etl::writers::SqlScriptWriter;

const STATIONS_CSV: &str = "\
OrganizationIdentifier,MonitoringLocationIdentifier,MonitoringLocationName,MonitoringLocationTypeName,LatitudeMeasure,LongitudeMeasure,StateCode
UTAHDWQ_WQX,UTAHDWQ_WQX-4990000,Big Spring,Spring,40.7608,-111.891,49
USGS-UT,USGS-404500111530001,Old Well,Well: Test hole not completed as a well,40:45:00,-111:53:00,49
";

const RESULTS_CSV: &str = "\
ActivityIdentifier,MonitoringLocationIdentifier,ActivityStartDate,ActivityStartTime/Time,ActivityMediaSubdivisionName,CharacteristicName,ResultMeasureValue,ResultMeasure/MeasureUnitCode,ResultDetectionConditionText
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Bicarbonate,188,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Calcium,66,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Chloride,57,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Magnesium,27,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Nitrate,0.8,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Potassium,7.4,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Sodium,109,mg/l,
A-1,UTAHDWQ_WQX-4990000,2015-06-12,10:30:00,Groundwater,Sulfate,273,mg/l,
A-2,USGS-404500111530001,1750-01-01,,Groundwater,Calcium,12,mg/l,
A-2,USGS-404500111530001,1750-01-01,,Groundwater,Arsenic,,mg/l,Not Detected
";

fn caster() -> Caster {
    Caster::with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn result_rows(sample: &str, analytes: &[(&str, f64)]) -> Vec<CanonicalRow> {
    analytes
        .iter()
        .map(|(param, value)| {
            CanonicalRow::empty(&RESULT_SCHEMA)
                .with("SampleId", sample)
                .with("Param", *param)
                .with("ResultValue", *value)
                .with("Unit", "mg/l")
        })
        .collect()
}

fn param_values(rows: &[CanonicalRow]) -> Vec<(String, f64, String)> {
    rows.iter()
        .map(|r| {
            (
                r.text("Param").unwrap().to_string(),
                r.number("ResultValue").unwrap(),
                r.text("Unit").unwrap().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_csv_to_sql_end_to_end() {
    let stations_file = temp_csv(STATIONS_CSV);
    let results_file = temp_csv(RESULTS_CSV);
    let output_dir = TempDir::new().expect("Failed to create temp directory");

    let mapping = Arc::new(SourceMapping::builtin("wqp").unwrap());
    let data = ConcurrentReader::new(DelimitedReader::new())
        .read_source(
            mapping.clone(),
            Some(stations_file.path().to_path_buf()),
            Some(results_file.path().to_path_buf()),
        )
        .await
        .unwrap();

    let pipeline = EtlPipeline::new()
        .with_caster(caster())
        .with_data_source(mapping.data_source.clone())
        .with_max_workers(2);

    let stations = pipeline.process_stations(&data.stations);
    let results = pipeline.process_results(&data.results, None).unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].text("StationId"), Some("UTAHDWQ-4990000"));
    assert_eq!(stations[0].text("StationType"), Some("Spring"));
    assert_eq!(stations[1].text("StationType"), Some("Well"));
    assert_eq!(stations[1].number("Lat_Y"), Some(40.75));
    assert!(stations[1]
        .text("Shape")
        .is_some_and(|s| s.starts_with("geometry::STGeomFromText('POINT (-111.88")));

    assert_eq!(results.samples, 2);
    assert_eq!(results.balanced_samples, 1);
    assert_eq!(results.rows.len(), 10 + 3);

    let sample_two: Vec<_> = results
        .rows
        .iter()
        .filter(|r| r.text("SampleId") == Some("A-2"))
        .collect();
    assert_eq!(sample_two[0].get("SampleDate"), Some(&Value::Null));
    assert_eq!(sample_two[0].get("SampleTime"), Some(&Value::Null));

    let writer = SqlScriptWriter::new().with_batch_size(5).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let stations_path = sql_filename_for_date(output_dir.path(), &mapping.name, RecordKind::Station, date);
    let results_path = sql_filename_for_date(output_dir.path(), &mapping.name, RecordKind::Result, date);

    let station_info = writer
        .write_rows("Stations", &STATION_SCHEMA, &stations, &stations_path)
        .unwrap();
    let result_info = writer
        .write_rows("Results", &RESULT_SCHEMA, &results.rows, &results_path)
        .unwrap();

    assert_eq!(station_info.statements, 1);
    assert_eq!(result_info.statements, 3);
    assert!(results_path.ends_with("wqp-results-240101.sql"));

    let script = std::fs::read_to_string(&results_path).unwrap();
    assert!(script.starts_with("INSERT INTO Results (AnalysisDate, AnalytMeth,"));
    assert!(script.contains("Cast('2015-06-12' as date)"));
    assert!(script.contains("'10:30:00'"));
    assert!(script.contains("'Charge Balance'"));
    assert!(script.contains("'UTAHDWQ-4990000'"));
    assert!(!script.contains("_WQX-"));

    let report = QualityChecker::new().check(&results.rows);
    assert_eq!(report.samples, 2);
    assert_eq!(report.balance_sets, 1);
    assert!(!report.has_outliers());
}

#[test]
fn test_charge_balance_scenario_with_sodium_and_potassium() {
    let rows = result_rows(
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

    assert_eq!(
        param_values(&get_charge_balance(&rows)),
        vec![
            ("Charge Balance".to_string(), 0.27, "%".to_string()),
            ("Cation Total".to_string(), 10.45, "meq/l".to_string()),
            ("Anions Total".to_string(), 10.39, "meq/l".to_string()),
        ]
    );
}

#[test]
fn test_charge_balance_scenario_with_combined_sodium_potassium() {
    let rows = result_rows(
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

    assert_eq!(
        param_values(&get_charge_balance(&rows)),
        vec![
            ("Charge Balance".to_string(), -0.02, "%".to_string()),
            ("Cation Total".to_string(), 4.21, "meq/l".to_string()),
            ("Anions Total".to_string(), 4.21, "meq/l".to_string()),
        ]
    );
}

#[test]
fn test_missing_sodium_and_combined_yields_no_balance() {
    let rows = result_rows(
        "S-3",
        &[
            ("Bicarbonate", 139.0),
            ("Calcium", 46.0),
            ("Chloride", 12.0),
            ("Magnesium", 10.0),
            ("Potassium", 3.0),
            ("Sulfate", 76.0),
        ],
    );

    assert!(get_charge_balance(&rows).is_empty());
}

#[test]
fn test_concentration_averaging_and_detect_exclusion() {
    let mut concentration = Concentration::new();
    concentration.set(Some("Calcium"), Some(40.0), false);
    concentration.set(Some("Calcium"), Some(50.0), false);
    concentration.set(Some("Chloride"), Some(12.0), true);

    assert_eq!(concentration.calcium(), Some(45.0));
    assert_eq!(concentration.chloride(), None);
}

#[test]
fn test_cast_leaves_native_values_unchanged() {
    let date = NaiveDate::from_ymd_opt(1995, 5, 17).unwrap();
    let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
    let raw = RawRow::new()
        .with("SampleDate", date)
        .with("SampleTime", time)
        .with("ResultValue", 3.25)
        .with("IdNum", 7_i64);

    let row = caster().cast(&raw, &RESULT_SCHEMA);

    assert_eq!(row.get("SampleDate"), Some(&Value::Date(date)));
    assert_eq!(row.get("SampleTime"), Some(&Value::Time(time)));
    assert_eq!(row.get("ResultValue"), Some(&Value::Double(3.25)));
    assert_eq!(row.get("IdNum"), Some(&Value::Integer(7)));
}

#[test]
fn test_suffix_stripping_in_both_paths() {
    let station = normalize_station(
        CanonicalRow::empty(&STATION_SCHEMA).with("StationId", "ABC_WQX-abc"),
    );
    let sample = normalize_sample(
        CanonicalRow::empty(&RESULT_SCHEMA).with("StationId", "ABC_WQX-abc"),
        None,
    );

    assert_eq!(station.text("StationId"), Some("ABC-abc"));
    assert_eq!(sample.text("StationId"), Some("ABC-abc"));
}

#[test]
fn test_bicarbonate_as_caco3_normalization() {
    let row = normalize_sample(
        CanonicalRow::empty(&RESULT_SCHEMA)
            .with("Param", "bicarbonate as caco3")
            .with("Unit", "mg/l as caco3")
            .with("ResultValue", 50.0),
        None,
    );

    assert_eq!(row.text("Param"), Some("bicarbonate"));
    assert_eq!(row.text("Unit"), Some("mg/l"));
    assert!((row.number("ResultValue").unwrap() - 61.0).abs() < 1e-9);
}

#[test]
fn test_reorder_filter_then_sql_literals() {
    let row = CanonicalRow::new()
        .with("Unit", "mg/l")
        .with("Bogus", "x")
        .with("Param", "Calcium");

    let shaped = reorder_filter(&row, &RESULT_SCHEMA);
    let sql = cast_for_sql(&shaped);

    assert_eq!(
        sql.columns().collect::<Vec<_>>(),
        RESULT_SCHEMA.names().collect::<Vec<_>>()
    );
    assert_eq!(sql.get("Param"), Some("'Calcium'"));
    assert_eq!(sql.get("SampleDate"), Some("Null"));
    assert_eq!(sql.get("Bogus"), None);
}

#[test]
fn test_mapping_file_drives_reader() {
    let mut mapping_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        mapping_file,
        r#"{{"name": "lab", "data_source": "LAB", "results": {{"Sample": "SampleId", "Analyte": "Param", "Value": "ResultValue"}}}}"#
    )
    .unwrap();
    let mapping = SourceMapping::resolve(mapping_file.path().to_str().unwrap()).unwrap();

    let csv = temp_csv("Sample;Analyte;Value;Notes\nL-1;Calcium;12.5;ok\n");
    let rows = DelimitedReader::new()
        .with_delimiter(b';')
        .read(csv.path(), &mapping, RecordKind::Result)
        .unwrap();

    let row = EtlPipeline::new()
        .with_caster(caster())
        .normalize_result(&rows[0]);
    assert_eq!(row.text("DataSource"), Some("LAB"));
    assert_eq!(row.number("ResultValue"), Some(12.5));
}
