//! CSV configuration loader.
//!
//! # Feature
//!
//! Requires the `config-csv` feature.
//!
//! # Supported format
//!
//! A header row followed by one record per line. Column order does not
//! matter; headers are matched through the alias table in
//! [`super::canonical_field`], so both the original configuration headers
//! and snake_case spellings work:
//!
//! ```csv
//! Issuer Name;supported pan length;prefixLength;innRangeLow;innRangeHigh;pattern
//! Visa;16;1;4;4;#### #### #### ####
//! ```
//!
//! Unknown columns are ignored. A record missing a required field is not an
//! error here: it becomes a single malformed-record defect during table
//! construction, keeping each mistake independently visible.

use super::{canonical_field, ConfigSource, RawRecord};
use crate::error::ConfigError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// CSV configuration loader.
///
/// Static entry points producing the raw record sequence; pair it with
/// [`CsvFileSource`] when a [`ConfigSource`] value is needed.
pub struct CsvConfigLoader;

impl CsvConfigLoader {
    /// Loads records from a comma-separated file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, ConfigError> {
        Self::from_file_with_delimiter(path, b',')
    }

    /// Loads records from a file with a custom delimiter.
    ///
    /// The original configuration files are semicolon-separated; pass
    /// `b';'` for those.
    pub fn from_file_with_delimiter<P: AsRef<Path>>(
        path: P,
        delimiter: u8,
    ) -> Result<Vec<RawRecord>, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader_with_delimiter(file, delimiter)
    }

    /// Loads records from a reader, comma-separated.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, ConfigError> {
        Self::from_reader_with_delimiter(reader, b',')
    }

    /// Loads records from a reader with a custom delimiter.
    pub fn from_reader_with_delimiter<R: Read>(
        reader: R,
        delimiter: u8,
    ) -> Result<Vec<RawRecord>, ConfigError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| ConfigError::Parse(format!("failed to read CSV headers: {}", e)))?
            .clone();

        // Map each column index onto the canonical field it feeds
        let columns: Vec<Option<&'static str>> = headers.iter().map(canonical_field).collect();

        let mut records = Vec::new();

        for result in csv_reader.records() {
            let row =
                result.map_err(|e| ConfigError::Parse(format!("CSV parse error: {}", e)))?;

            // Blank lines carry no record
            if row.iter().all(|value| value.trim().is_empty()) {
                continue;
            }

            let mut record = RawRecord::new();
            for (i, value) in row.iter().enumerate() {
                if let Some(Some(field)) = columns.get(i) {
                    let value = value.trim();
                    if !value.is_empty() {
                        record.insert((*field).to_string(), value.to_string());
                    }
                }
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Loads records from a CSV string, comma-separated.
    pub fn parse(csv_text: &str) -> Result<Vec<RawRecord>, ConfigError> {
        Self::from_reader(csv_text.as_bytes())
    }

    /// Loads records from a CSV string with a custom delimiter.
    pub fn parse_with_delimiter(
        csv_text: &str,
        delimiter: u8,
    ) -> Result<Vec<RawRecord>, ConfigError> {
        Self::from_reader_with_delimiter(csv_text.as_bytes(), delimiter)
    }
}

/// A CSV file as a [`ConfigSource`].
///
/// The file is opened and read when the facade is constructed, not when the
/// source value is created.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    /// Points the source at a comma-separated file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Overrides the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl ConfigSource for CsvFileSource {
    fn records(&self) -> Result<Vec<RawRecord>, ConfigError> {
        CsvConfigLoader::from_file_with_delimiter(&self.path, self.delimiter)
    }
}
