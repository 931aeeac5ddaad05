//! The `PanFormatter` facade.
//!
//! Owns the rule table for its lifetime and composes matching with
//! rendering behind a single `format(pan)` operation. Construction is
//! eager: the table is built (and the configuration source read) exactly
//! once, so every configuration error surfaces at one predictable point
//! and a failed construction exposes no partial object. Reconfiguration
//! means constructing a new facade.

use crate::config::{ConfigSource, RawRecord};
use crate::defect::{DefectLog, DefectSink};
use crate::detect::find_rule;
use crate::error::{ConfigError, FormatError};
use crate::format::render;
use crate::rule::RangeRule;
use crate::table::RuleTable;

/// Formats PANs according to a validated table of IIN-range rules.
///
/// `format()` is a pure read over the immutable table, so a single facade
/// can be shared freely across threads.
///
/// # Example
///
/// ```
/// use pan_formatter::PanFormatter;
/// use pan_formatter::config::MemorySourceBuilder;
///
/// let source = MemorySourceBuilder::new()
///     .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
///     .build();
///
/// let formatter = PanFormatter::from_source(&source).unwrap();
/// assert_eq!(
///     formatter.format("4444444444444444").unwrap(),
///     "4444 4444 4444 4444"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PanFormatter {
    table: RuleTable,
}

impl PanFormatter {
    /// Builds a formatter from raw records, logging discards via `tracing`.
    pub fn from_records(records: &[RawRecord]) -> Result<Self, ConfigError> {
        Self::from_records_with_sink(records, &mut DefectLog)
    }

    /// Builds a formatter from raw records, reporting discards to `sink`.
    pub fn from_records_with_sink(
        records: &[RawRecord],
        sink: &mut dyn DefectSink,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            table: RuleTable::from_records(records, sink)?,
        })
    }

    /// Builds a formatter by pulling the record sequence from a source,
    /// logging discards via `tracing`.
    ///
    /// Source failures ([`ConfigError::Io`], [`ConfigError::Parse`])
    /// propagate unchanged.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        Self::from_source_with_sink(source, &mut DefectLog)
    }

    /// Builds a formatter from a source, reporting discards to `sink`.
    pub fn from_source_with_sink(
        source: &dyn ConfigSource,
        sink: &mut dyn DefectSink,
    ) -> Result<Self, ConfigError> {
        let records = source.records()?;
        Self::from_records_with_sink(&records, sink)
    }

    /// Formats a PAN according to its unique matching rule.
    ///
    /// Either returns the fully rendered string or fails outright; there is
    /// no partial success and no retry.
    pub fn format(&self, pan: &str) -> Result<String, FormatError> {
        let rule = find_rule(pan, &self.table)?;
        render(pan, rule.pattern())
    }

    /// Returns the unique rule matching a PAN without rendering it.
    pub fn find_rule(&self, pan: &str) -> Result<&RangeRule, FormatError> {
        find_rule(pan, &self.table)
    }

    /// Returns the issuer name of the rule matching a PAN.
    pub fn issuer(&self, pan: &str) -> Result<&str, FormatError> {
        self.find_rule(pan).map(|rule| rule.issuer_name())
    }

    /// Read-only view of the loaded rule table.
    #[inline]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}
