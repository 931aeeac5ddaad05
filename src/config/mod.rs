//! Pluggable configuration sources for the rule table.
//!
//! The core never cares where its records come from: a source only has to
//! hand over the full sequence once, at facade construction time. This
//! module provides the seam plus several implementations.
//!
//! # Features
//!
//! File-based loaders are optional and require feature flags:
//!
//! - `config-csv` - CSV file loader
//! - `config-json` - JSON file loader
//!
//! # Example
//!
//! ```rust,ignore
//! use pan_formatter::PanFormatter;
//! use pan_formatter::config::CsvFileSource;
//!
//! // Original-style semicolon-separated configuration file
//! let source = CsvFileSource::new("conf.csv").with_delimiter(b';');
//! let formatter = PanFormatter::from_source(&source)?;
//! ```

mod memory;

#[cfg(feature = "config-csv")]
mod csv;

#[cfg(feature = "config-json")]
mod json;

pub use memory::{MemorySource, MemorySourceBuilder};

#[cfg(feature = "config-csv")]
pub use self::csv::{CsvConfigLoader, CsvFileSource};

#[cfg(feature = "config-json")]
pub use self::json::{JsonConfigLoader, JsonFileSource};

use crate::error::ConfigError;
use crate::rule::{
    FIELD_ISSUER_NAME, FIELD_PATTERN, FIELD_PREFIX_HIGH, FIELD_PREFIX_LENGTH, FIELD_PREFIX_LOW,
    FIELD_SUPPORTED_LENGTH,
};
use std::collections::HashMap;

/// One raw configuration record: canonical field name to raw string value.
pub type RawRecord = HashMap<String, String>;

/// Supplies the raw record sequence the rule table is built from.
///
/// Implementations are read exactly once, synchronously, during facade
/// construction. Any failure to produce the sequence (missing file,
/// unreadable bytes, a collaborator timeout) surfaces as
/// [`ConfigError::Io`] or [`ConfigError::Parse`] and aborts construction.
pub trait ConfigSource {
    /// Produces the full record sequence in source order.
    fn records(&self) -> Result<Vec<RawRecord>, ConfigError>;
}

/// Maps a source header or key onto the canonical field it feeds.
///
/// Accepts the original configuration-file headers (`Issuer Name`,
/// `supported pan length`, `prefixLength`, `innRangeLow`, `innRangeHigh`,
/// `pattern`) as well as snake_case spellings. Unknown columns map to
/// `None` and are ignored by the loaders.
pub fn canonical_field(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "issuer name" | "issuer_name" | "issuer" => Some(FIELD_ISSUER_NAME),
        "supported pan length" | "supported_length" | "supported length" | "pan_length" => {
            Some(FIELD_SUPPORTED_LENGTH)
        }
        "prefixlength" | "prefix_length" | "prefix length" => Some(FIELD_PREFIX_LENGTH),
        "innrangelow" | "inn_range_low" | "prefix_low" | "range_low" => Some(FIELD_PREFIX_LOW),
        "innrangehigh" | "inn_range_high" | "prefix_high" | "range_high" => Some(FIELD_PREFIX_HIGH),
        "pattern" | "pan_pattern" => Some(FIELD_PATTERN),
        _ => None,
    }
}
