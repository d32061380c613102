use crate::error::{ProcessingError, Result};
use crate::models::{RawRow, RecordKind, SourceMapping, Value};
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, FIELD_DATA_SOURCE, FIELD_LATITUDE, FIELD_LONGITUDE};
use crate::utils::coordinates::parse_coordinate;
use encoding_rs::{UTF_8, WINDOWS_1252};
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const TABLE_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Reads a delimited export into raw rows keyed by canonical field name.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    delimiter: u8,
    use_mmap: bool,
}

impl DelimitedReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            use_mmap: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Read every record of `path`, renaming mapped columns and dropping the
    /// rest. `.zip` archives are read from their first table entry.
    pub fn read(&self, path: &Path, mapping: &SourceMapping, kind: RecordKind) -> Result<Vec<RawRow>> {
        let text = self.read_text(path)?;
        let rows = self.parse(&text, mapping, kind)?;

        debug!("Read {} {} rows from {}", rows.len(), kind, path.display());
        Ok(rows)
    }

    /// Parse delimited text already in memory.
    pub fn parse(&self, text: &str, mapping: &SourceMapping, kind: RecordKind) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<Option<String>> = reader
            .headers()?
            .iter()
            .map(|header| mapping.canonical_name(kind, header).map(str::to_string))
            .collect();

        if columns.iter().all(Option::is_none) {
            return Err(ProcessingError::MissingData(format!(
                "No {} columns known to mapping '{}'",
                kind, mapping.name
            )));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let mut row: RawRow = columns
                .iter()
                .zip(record.iter())
                .filter_map(|(column, field)| column.as_deref().map(|c| (c, field)))
                .collect();

            for field in [FIELD_LATITUDE, FIELD_LONGITUDE] {
                convert_dms(&mut row, field);
            }
            if !row.get(FIELD_DATA_SOURCE).is_some_and(Value::is_truthy) {
                row.insert(FIELD_DATA_SOURCE, mapping.data_source.as_str());
            }

            rows.push(row);
        }

        Ok(rows)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

        if is_zip {
            let bytes = read_zip_entry(path)?;
            return Ok(decode(&bytes).into_owned());
        }

        let file = File::open(path)?;
        if self.use_mmap {
            // SAFETY: the export is opened read-only and not modified while mapped
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(decode(&mmap).into_owned())
        } else {
            let mut bytes = Vec::new();
            BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file).read_to_end(&mut bytes)?;
            Ok(decode(&bytes).into_owned())
        }
    }
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_zip_entry(path: &Path) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(File::open(path)?)?;

    let name = archive
        .file_names()
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| TABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        })
        .min()
        .map(str::to_string)
        .ok_or_else(|| {
            ProcessingError::MissingData(format!("No table entry in archive {}", path.display()))
        })?;

    debug!("Reading archive entry {} from {}", name, path.display());
    let mut entry = archive.by_name(&name)?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;

    Ok(bytes)
}

/// UTF-8, falling back to Windows-1252 for legacy exports.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            warn!("Input is not valid UTF-8, decoding as Windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        }
    }
}

fn convert_dms(row: &mut RawRow, field: &str) {
    let Some(Value::Text(text)) = row.get(field) else {
        return;
    };
    if !text.contains(':') {
        return;
    }

    match parse_coordinate(text) {
        Ok(decimal) => row.insert(field, decimal),
        Err(e) => debug!("Leaving {} as text: {}", field, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn mapping() -> SourceMapping {
        SourceMapping::builtin("wqp").unwrap()
    }

    const RESULTS: &str = "\
ActivityIdentifier,CharacteristicName,ResultMeasureValue,ResultMeasure/MeasureUnitCode,Ignored
A-1,Calcium,66,mg/l,x
A-1,Sodium,109,mg/l,y
";

    #[test]
    fn test_parse_maps_headers() {
        let rows = DelimitedReader::new()
            .parse(RESULTS, &mapping(), RecordKind::Result)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("SampleId"), Some(&Value::from("A-1")));
        assert_eq!(rows[0].get("Param"), Some(&Value::from("Calcium")));
        assert_eq!(rows[1].get("ResultValue"), Some(&Value::from("109")));
        assert_eq!(rows[0].get("DataSource"), Some(&Value::from("WQP")));
        assert!(!rows[0].contains("Ignored"));
    }

    #[test]
    fn test_mapped_data_source_column_is_kept() {
        let mut mapping = mapping();
        mapping
            .results
            .insert("ProviderName".to_string(), "DataSource".to_string());
        let text = "ActivityIdentifier,ProviderName\nA-1,STORET\nA-2,\n";

        let rows = DelimitedReader::new()
            .parse(text, &mapping, RecordKind::Result)
            .unwrap();

        assert_eq!(rows[0].get("DataSource"), Some(&Value::from("STORET")));
        assert_eq!(rows[1].get("DataSource"), Some(&Value::from("WQP")));
    }

    #[test]
    fn test_unknown_headers_are_rejected() {
        let result = DelimitedReader::new().parse("a,b\n1,2\n", &mapping(), RecordKind::Result);
        assert!(matches!(result, Err(ProcessingError::MissingData(_))));
    }

    #[test]
    fn test_dms_coordinates_are_converted() {
        let text = "MonitoringLocationIdentifier,LatitudeMeasure,LongitudeMeasure\nS1,40:45:36,-111.89\n";
        let rows = DelimitedReader::new()
            .parse(text, &mapping(), RecordKind::Station)
            .unwrap();

        let lat = rows[0].get("Lat_Y").and_then(Value::as_f64).unwrap();
        assert!((lat - 40.76).abs() < 1e-9);
        assert_eq!(rows[0].get("Lon_X"), Some(&Value::from("-111.89")));
    }

    #[test]
    fn test_tab_delimited_with_mmap() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", RESULTS.replace(',', "\t")).unwrap();

        let rows = DelimitedReader::new()
            .with_delimiter(b'\t')
            .with_mmap(true)
            .read(file.path(), &mapping(), RecordKind::Result)
            .unwrap();

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_windows_1252_fallback() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"MonitoringLocationIdentifier,MonitoringLocationName\nS1,Ca\xf1on Spring\n")
            .unwrap();

        let rows = DelimitedReader::new()
            .read(file.path(), &mapping(), RecordKind::Station)
            .unwrap();

        assert_eq!(rows[0].get("StationName"), Some(&Value::from("Cañon Spring")));
    }

    #[test]
    fn test_zip_archive_entry() {
        let file = tempfile::Builder::new().suffix(".zip").tempfile().unwrap();
        {
            let mut zip = ZipWriter::new(file.reopen().unwrap());
            zip.start_file("result.csv", FileOptions::default()).unwrap();
            zip.write_all(RESULTS.as_bytes()).unwrap();
            zip.finish().unwrap();
        }

        let rows = DelimitedReader::new()
            .read(file.path(), &mapping(), RecordKind::Result)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("Param"), Some(&Value::from("Sodium")));
    }
}
