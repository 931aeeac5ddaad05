//! In-memory configuration source.
//!
//! Useful for tests and for callers that assemble their rule configuration
//! programmatically instead of loading it from a file.

use super::{ConfigSource, RawRecord};
use crate::error::ConfigError;
use crate::rule::{
    FIELD_ISSUER_NAME, FIELD_PATTERN, FIELD_PREFIX_HIGH, FIELD_PREFIX_LENGTH, FIELD_PREFIX_LOW,
    FIELD_SUPPORTED_LENGTH,
};

/// Configuration source backed by an in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    /// Wraps an existing record list.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records the source holds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ConfigSource for MemorySource {
    fn records(&self) -> Result<Vec<RawRecord>, ConfigError> {
        Ok(self.records.clone())
    }
}

/// Builder for assembling a [`MemorySource`] rule by rule.
///
/// # Example
///
/// ```
/// use pan_formatter::config::{ConfigSource, MemorySourceBuilder};
///
/// let source = MemorySourceBuilder::new()
///     .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
///     .rule("Diners Club", 14, 3, 300, 305, "#### ###### ####")
///     .build();
///
/// assert_eq!(source.records().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySourceBuilder {
    records: Vec<RawRecord>,
}

impl MemorySourceBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one fully-specified rule record.
    pub fn rule(
        mut self,
        issuer_name: &str,
        supported_length: usize,
        prefix_length: usize,
        prefix_low: u64,
        prefix_high: u64,
        pattern: &str,
    ) -> Self {
        let mut record = RawRecord::new();
        record.insert(FIELD_ISSUER_NAME.to_string(), issuer_name.to_string());
        record.insert(
            FIELD_SUPPORTED_LENGTH.to_string(),
            supported_length.to_string(),
        );
        record.insert(FIELD_PREFIX_LENGTH.to_string(), prefix_length.to_string());
        record.insert(FIELD_PREFIX_LOW.to_string(), prefix_low.to_string());
        record.insert(FIELD_PREFIX_HIGH.to_string(), prefix_high.to_string());
        record.insert(FIELD_PATTERN.to_string(), pattern.to_string());
        self.records.push(record);
        self
    }

    /// Adds a raw record as-is, for exercising malformed input paths.
    pub fn record(mut self, record: RawRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Builds the source.
    pub fn build(self) -> MemorySource {
        MemorySource::new(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_canonical_records() {
        let source = MemorySourceBuilder::new()
            .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
            .build();

        let records = source.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(FIELD_ISSUER_NAME).unwrap(), "Visa");
        assert_eq!(records[0].get(FIELD_SUPPORTED_LENGTH).unwrap(), "16");
        assert_eq!(records[0].get(FIELD_PATTERN).unwrap(), "#### #### #### ####");
    }

    #[test]
    fn test_raw_record_escape_hatch() {
        let mut incomplete = RawRecord::new();
        incomplete.insert(FIELD_ISSUER_NAME.to_string(), "NoPattern".to_string());

        let source = MemorySourceBuilder::new().record(incomplete).build();
        let records = source.records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].contains_key(FIELD_PATTERN));
    }

    #[test]
    fn test_empty_source() {
        let source = MemorySource::new(Vec::new());
        assert!(source.is_empty());
        assert_eq!(source.records().unwrap().len(), 0);
    }

    #[test]
    fn test_records_returns_source_order() {
        let source = MemorySourceBuilder::new()
            .rule("A", 4, 1, 1, 1, "####")
            .rule("B", 4, 1, 2, 2, "####")
            .build();

        let records = source.records().unwrap();
        assert_eq!(records[0].get(FIELD_ISSUER_NAME).unwrap(), "A");
        assert_eq!(records[1].get(FIELD_ISSUER_NAME).unwrap(), "B");
    }
}
