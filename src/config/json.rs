//! JSON configuration loader.
//!
//! # Feature
//!
//! Requires the `config-json` feature.
//!
//! # Supported format
//!
//! A top-level array of objects, one per rule. Keys go through the same
//! alias table as the CSV headers, and scalar values (strings, numbers)
//! are accepted interchangeably:
//!
//! ```json
//! [
//!   {
//!     "issuer_name": "Visa",
//!     "supported_length": 16,
//!     "prefix_length": 1,
//!     "prefix_low": 4,
//!     "prefix_high": 4,
//!     "pattern": "#### #### #### ####"
//!   }
//! ]
//! ```

use super::{canonical_field, ConfigSource, RawRecord};
use crate::error::ConfigError;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// JSON configuration loader.
pub struct JsonConfigLoader;

impl JsonConfigLoader {
    /// Loads records from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads records from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, ConfigError> {
        let rows: Vec<HashMap<String, Value>> = serde_json::from_reader(reader)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?;

        Ok(rows.into_iter().map(canonicalize).collect())
    }

    /// Loads records from a JSON string.
    pub fn parse(json: &str) -> Result<Vec<RawRecord>, ConfigError> {
        Self::from_reader(json.as_bytes())
    }
}

fn canonicalize(row: HashMap<String, Value>) -> RawRecord {
    let mut record = RawRecord::new();
    for (key, value) in row {
        let field = match canonical_field(&key) {
            Some(field) => field,
            None => continue,
        };
        if let Some(text) = scalar(&value) {
            let text = text.trim().to_string();
            if !text.is_empty() {
                record.insert(field.to_string(), text);
            }
        }
    }
    record
}

// Arrays and objects have no place in a record field; skip them so the
// record fails as missing-field rather than as a bogus value.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A JSON file as a [`ConfigSource`].
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Points the source at a JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for JsonFileSource {
    fn records(&self) -> Result<Vec<RawRecord>, ConfigError> {
        JsonConfigLoader::from_file(&self.path)
    }
}
