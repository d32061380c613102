use crate::error::Result;
use crate::models::{RawRow, RecordKind, SourceMapping};
use crate::readers::DelimitedReader;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Raw rows of one source run.
#[derive(Debug, Default)]
pub struct SourceData {
    pub stations: Vec<RawRow>,
    pub results: Vec<RawRow>,
}

impl SourceData {
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.results.is_empty()
    }
}

/// Reads the station and result exports of a source side by side.
pub struct ConcurrentReader {
    reader: DelimitedReader,
}

impl ConcurrentReader {
    pub fn new(reader: DelimitedReader) -> Self {
        Self { reader }
    }

    /// Read whichever of the two exports are given; a missing one yields no rows.
    pub async fn read_source(
        &self,
        mapping: Arc<SourceMapping>,
        stations: Option<PathBuf>,
        results: Option<PathBuf>,
    ) -> Result<SourceData> {
        let stations_handle = self.spawn_read(mapping.clone(), stations, RecordKind::Station);
        let results_handle = self.spawn_read(mapping, results, RecordKind::Result);

        let (stations, results) = tokio::try_join!(stations_handle, results_handle)?;

        Ok(SourceData {
            stations: stations?,
            results: results?,
        })
    }

    fn spawn_read(
        &self,
        mapping: Arc<SourceMapping>,
        path: Option<PathBuf>,
        kind: RecordKind,
    ) -> JoinHandle<Result<Vec<RawRow>>> {
        let reader = self.reader;
        tokio::task::spawn_blocking(move || match path {
            Some(path) => reader.read(&path, &mapping, kind),
            None => Ok(Vec::new()),
        })
    }
}

impl Default for ConcurrentReader {
    fn default() -> Self {
        Self::new(DelimitedReader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_source() {
        let mut stations = NamedTempFile::new().unwrap();
        writeln!(stations, "MonitoringLocationIdentifier,MonitoringLocationName").unwrap();
        writeln!(stations, "S1,Big Spring").unwrap();

        let mut results = NamedTempFile::new().unwrap();
        writeln!(results, "ActivityIdentifier,CharacteristicName,ResultMeasureValue").unwrap();
        writeln!(results, "A-1,Calcium,66").unwrap();
        writeln!(results, "A-1,Sodium,109").unwrap();

        let mapping = Arc::new(SourceMapping::builtin("wqp").unwrap());
        let data = ConcurrentReader::default()
            .read_source(
                mapping,
                Some(stations.path().to_path_buf()),
                Some(results.path().to_path_buf()),
            )
            .await
            .unwrap();

        assert_eq!(data.stations.len(), 1);
        assert_eq!(data.results.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_inputs() {
        let mapping = Arc::new(SourceMapping::builtin("wqp").unwrap());
        let data = ConcurrentReader::default()
            .read_source(mapping.clone(), None, None)
            .await
            .unwrap();
        assert!(data.is_empty());

        let missing = ConcurrentReader::default()
            .read_source(mapping, Some(PathBuf::from("/nonexistent/results.csv")), None)
            .await;
        assert!(missing.is_err());
    }
}
