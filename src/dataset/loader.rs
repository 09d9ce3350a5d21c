// src/dataset/loader.rs - Delimited-text dataset loading

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::types::{is_missing, Observation};
use crate::infra::config::DatasetConfig;
use crate::infra::errors::{PatternError, Result};

/// An in-memory table of observations, in source row order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Observation>,
    skipped_rows: usize,
}

/// Header positions of the three columns the extractor reads.
struct ColumnIndex {
    day_type: usize,
    leaving: usize,
    returning: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, config: &DatasetConfig, source: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    PatternError::malformed(source, format!("missing required column '{name}'"))
                })
        };
        Ok(Self {
            day_type: find(&config.day_type_column)?,
            leaving: find(&config.leaving_column)?,
            returning: find(&config.returning_column)?,
        })
    }
}

impl Dataset {
    /// Read a dataset from a file on disk.
    pub fn load(path: &Path, config: &DatasetConfig) -> Result<Self> {
        let not_found = |source: std::io::Error| PatternError::DatasetNotFound {
            path: path.to_path_buf(),
            source,
        };

        let meta = std::fs::metadata(path).map_err(not_found)?;
        if !meta.is_file() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let file = File::open(path).map_err(not_found)?;

        let dataset = Self::from_reader(BufReader::new(file), path, config)?;
        tracing::info!(
            "Loaded {} rows from {} ({} skipped)",
            dataset.len(),
            path.display(),
            dataset.skipped_rows
        );
        Ok(dataset)
    }

    /// Read a dataset from any byte source. `source` only labels errors.
    pub fn from_reader<R: Read>(reader: R, source: &Path, config: &DatasetConfig) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter_byte()?)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| PatternError::malformed(source, format!("unreadable header: {e}")))?
            .clone();
        let columns = ColumnIndex::resolve(&headers, config, source)?;

        let mut rows = Vec::new();
        let mut skipped_rows = 0;
        for result in reader.records() {
            let record = result.map_err(|e| PatternError::malformed(source, e.to_string()))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            match parse_row(&record, &columns, line) {
                Some(row) => rows.push(row),
                None => skipped_rows += 1,
            }
        }

        if skipped_rows > 0 {
            tracing::warn!(
                "Skipped {} rows with no '{}' value",
                skipped_rows,
                config.day_type_column
            );
        }

        Ok(Self { rows, skipped_rows })
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped for lacking a day type.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(rows: Vec<Observation>) -> Self {
        Self {
            rows,
            skipped_rows: 0,
        }
    }
}

/// `Ok(None)` means the row has no day type and is left out of grouping.
fn parse_row(record: &StringRecord, columns: &ColumnIndex, line: u64) -> Option<Observation> {
    let cell = |idx: usize| record.get(idx).unwrap_or("");

    let day_type = cell(columns.day_type);
    if is_missing(day_type) {
        tracing::debug!("line {line}: no day type, skipping");
        return None;
    }

    let time = |idx: usize| {
        let raw = cell(idx);
        (!is_missing(raw)).then(|| raw.to_string())
    };

    Some(Observation {
        day_type: day_type.to_string(),
        leaving_time: time(columns.leaving),
        returning_time: time(columns.returning),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(csv: &str) -> Result<Dataset> {
        Dataset::from_reader(
            csv.as_bytes(),
            Path::new("inline.csv"),
            &DatasetConfig::default(),
        )
    }

    #[test]
    fn test_basic_rows() {
        let ds = load_str(
            "date,day_type,leaving_time,returning_time,season\n\
             2023-01-02,weekday,08:00:00,18:00:00,winter\n\
             2023-01-07,weekend,10:00:00,16:00:00,winter\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[0].day_type, "weekday");
        assert_eq!(ds.rows()[1].leaving_time.as_deref(), Some("10:00:00"));
        assert_eq!(ds.skipped_rows(), 0);
    }

    #[test]
    fn test_missing_day_type_skipped() {
        let ds = load_str(
            "day_type,leaving_time,returning_time\n\
             ,08:00:00,18:00:00\n\
             weekday,08:00:00,18:00:00\n\
             NaN,09:00:00,17:00:00\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.skipped_rows(), 2);
    }

    #[test]
    fn test_missing_times_kept_as_none() {
        let ds = load_str(
            "day_type,leaving_time,returning_time\n\
             weekday,,18:00:00\n\
             weekday,08:00:00,NA\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.rows()[0].leaving_time.is_none());
        assert!(ds.rows()[0].returning_time.is_some());
        assert!(ds.rows()[1].returning_time.is_none());
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let err = load_str("day_type,leaving_time\nweekday,08:00:00\n").unwrap_err();
        assert_eq!(err.kind(), "dataset_malformed");
        assert!(err.to_string().contains("returning_time"));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = load_str("").unwrap_err();
        assert_eq!(err.kind(), "dataset_malformed");
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = load_str(
            "day_type,leaving_time,returning_time\n\
             weekday,08:00:00\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), "dataset_malformed");
    }

    #[test]
    fn test_cells_kept_verbatim() {
        let ds = load_str(
            "day_type,leaving_time,returning_time\n\
             weekday ,08:00,18:00:00\n\
             weekday,8:00:00,late\n\
             weekday,08:00:00.000,18:00:00\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows()[0].day_type, "weekday ");
        assert_eq!(ds.rows()[0].leaving_time.as_deref(), Some("08:00"));
        assert_eq!(ds.rows()[1].leaving_time.as_deref(), Some("8:00:00"));
        assert_eq!(ds.rows()[1].returning_time.as_deref(), Some("late"));
        assert_eq!(ds.rows()[2].leaving_time.as_deref(), Some("08:00:00.000"));
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let config = DatasetConfig {
            day_type_column: "kind".into(),
            leaving_column: "out".into(),
            returning_column: "in".into(),
            delimiter: ";".into(),
        };
        let ds = Dataset::from_reader(
            "in;kind;out\n17:30:00;holiday;11:00:00\n".as_bytes(),
            Path::new("inline.csv"),
            &config,
        )
        .unwrap();
        assert_eq!(ds.rows()[0].day_type, "holiday");
        assert_eq!(ds.rows()[0].leaving_time.as_deref(), Some("11:00:00"));
        assert_eq!(ds.rows()[0].returning_time.as_deref(), Some("17:30:00"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = Dataset::load(
            Path::new("/nonexistent/home_data.csv"),
            &DatasetConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "dataset_not_found");
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(dir.path(), &DatasetConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "dataset_not_found");
    }
}
