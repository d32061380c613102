use crate::error::{ProcessingError, Result};
use crate::models::{CanonicalRow, Schema};
use crate::processors::caster::cast_for_sql;
use crate::processors::normalizer::reorder_filter;
use crate::utils::constants::{DEFAULT_BATCH_SIZE, DEFAULT_BUFFER_SIZE};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes canonical rows as batched `INSERT` statements.
pub struct SqlScriptWriter {
    batch_size: usize,
}

impl SqlScriptWriter {
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(ProcessingError::Config(
                "Batch size must be at least 1".to_string(),
            ));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// One statement per batch of rows, each row shaped to `schema`.
    pub fn render_statements(&self, table: &str, schema: &Schema, rows: &[CanonicalRow]) -> Vec<String> {
        let columns = schema.names().collect::<Vec<_>>().join(", ");

        rows.chunks(self.batch_size)
            .map(|chunk| {
                let values = chunk
                    .iter()
                    .map(|row| {
                        let literals: Vec<_> = cast_for_sql(&reorder_filter(row, schema))
                            .literals()
                            .map(str::to_string)
                            .collect();
                        format!("({})", literals.join(", "))
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");

                format!("INSERT INTO {} ({}) VALUES\n{};\n", table, columns, values)
            })
            .collect()
    }

    /// Write all statements to `path`, creating parent directories.
    pub fn write_rows(
        &self,
        table: &str,
        schema: &Schema,
        rows: &[CanonicalRow],
        path: &Path,
    ) -> Result<SqlFileInfo> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let info = self.write_to(&mut writer, table, schema, rows)?;
        writer.flush()?;

        debug!(
            "Wrote {} rows in {} statements to {}",
            info.rows,
            info.statements,
            path.display()
        );
        Ok(info)
    }

    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        table: &str,
        schema: &Schema,
        rows: &[CanonicalRow],
    ) -> Result<SqlFileInfo> {
        let mut info = SqlFileInfo {
            rows: rows.len(),
            ..SqlFileInfo::default()
        };

        for statement in self.render_statements(table, schema, rows) {
            writer.write_all(statement.as_bytes())?;
            info.statements += 1;
            info.bytes += statement.len() as u64;
        }

        Ok(info)
    }
}

impl Default for SqlScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlFileInfo {
    pub statements: usize,
    pub rows: usize,
    pub bytes: u64,
}

impl SqlFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "{} rows in {} statements ({:.2} KB)",
            self.rows,
            self.statements,
            self.bytes as f64 / 1024.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::STATION_SCHEMA;
    use pretty_assertions::assert_eq;

    fn station(id: &str) -> CanonicalRow {
        CanonicalRow::new()
            .with("StationId", id)
            .with("StationName", "O'Neil Well")
            .with("Lat_Y", 40.5)
    }

    #[test]
    fn test_render_statements_batches_rows() {
        let writer = SqlScriptWriter::new().with_batch_size(2).unwrap();
        let rows = vec![station("S1"), station("S2"), station("S3")];

        let statements = writer.render_statements("Stations", &STATION_SCHEMA, &rows);

        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("INSERT INTO Stations (OrgId, OrgName, StationId,"));
        assert!(statements[0].contains("'S1'"));
        assert!(statements[0].contains("'S2'"));
        assert!(statements[1].contains("'S3'"));
        assert!(statements[0].contains("'O''Neil Well'"));
        assert!(statements[0].trim_end().ends_with(");"));
    }

    #[test]
    fn test_every_column_has_a_literal() {
        let writer = SqlScriptWriter::new();
        let statements = writer.render_statements("Stations", &STATION_SCHEMA, &[station("S1")]);

        let values = statements[0].split("VALUES\n").nth(1).unwrap();
        let literal_count = values.trim().trim_end_matches(';').split(", ").count();
        assert_eq!(literal_count, STATION_SCHEMA.len());
    }

    #[test]
    fn test_write_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stations.sql");

        let info = SqlScriptWriter::new()
            .write_rows("Stations", &STATION_SCHEMA, &[station("S1")], &path)
            .unwrap();

        assert_eq!(info.rows, 1);
        assert_eq!(info.statements, 1);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.len() as u64, info.bytes);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        assert!(SqlScriptWriter::new().with_batch_size(0).is_err());
    }

    #[test]
    fn test_no_rows_no_statements() {
        let mut out = Vec::new();
        let info = SqlScriptWriter::new()
            .write_to(&mut out, "Stations", &STATION_SCHEMA, &[])
            .unwrap();
        assert_eq!(info, SqlFileInfo::default());
        assert!(out.is_empty());
    }
}
