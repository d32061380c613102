use crate::models::RecordKind;
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Default SQL script path: {output_dir}/{source}-{stations|results}-{YYMMDD}.sql
pub fn generate_default_sql_filename(output_dir: &Path, source: &str, kind: RecordKind) -> PathBuf {
    sql_filename_for_date(output_dir, source, kind, Local::now().date_naive())
}

pub fn sql_filename_for_date(
    output_dir: &Path,
    source: &str,
    kind: RecordKind,
    date: NaiveDate,
) -> PathBuf {
    let table = match kind {
        RecordKind::Station => "stations",
        RecordKind::Result => "results",
    };

    let filename = format!(
        "{}-{}-{:02}{:02}{:02}.sql",
        source.to_lowercase(),
        table,
        date.year() % 100,
        date.month(),
        date.day()
    );
    output_dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_filename_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        assert_eq!(
            sql_filename_for_date(Path::new("output"), "WQP", RecordKind::Station, date),
            PathBuf::from("output/wqp-stations-240307.sql")
        );
        assert_eq!(
            sql_filename_for_date(Path::new("out"), "ugs", RecordKind::Result, date),
            PathBuf::from("out/ugs-results-240307.sql")
        );
    }

    #[test]
    fn test_generate_default_sql_filename() {
        let filename = generate_default_sql_filename(Path::new("output"), "wqp", RecordKind::Result);
        let name = filename.file_name().unwrap().to_string_lossy();

        assert!(filename.starts_with("output"));
        assert!(name.starts_with("wqp-results-"));
        assert!(name.ends_with(".sql"));
        assert_eq!(name.len(), "wqp-results-YYMMDD.sql".len());
    }
}
