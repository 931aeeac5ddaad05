//! Core rule type: one validated row of the IIN-range configuration.

use crate::config::RawRecord;
use crate::error::RecordError;

/// The pattern symbol that consumes one PAN digit during rendering.
pub const PLACEHOLDER: char = '#';

/// Canonical record key for the issuer display name.
pub const FIELD_ISSUER_NAME: &str = "issuer_name";
/// Canonical record key for the exact PAN digit length a rule applies to.
pub const FIELD_SUPPORTED_LENGTH: &str = "supported_length";
/// Canonical record key for the number of leading digits checked for range membership.
pub const FIELD_PREFIX_LENGTH: &str = "prefix_length";
/// Canonical record key for the inclusive lower prefix bound.
pub const FIELD_PREFIX_LOW: &str = "prefix_low";
/// Canonical record key for the inclusive upper prefix bound.
pub const FIELD_PREFIX_HIGH: &str = "prefix_high";
/// Canonical record key for the formatting pattern.
pub const FIELD_PATTERN: &str = "pattern";

/// One formatting rule: an IIN prefix range bound to a display pattern.
///
/// Immutable once constructed. Construction itself enforces nothing beyond
/// field types; the validation chain in [`crate::validate`] decides whether
/// a rule is admitted into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "config-json",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RangeRule {
    /// Name of the institution that issues the card. Display only.
    issuer_name: String,
    /// Exact PAN digit length this rule applies to.
    supported_length: usize,
    /// Number of leading digits examined for range membership.
    prefix_length: usize,
    /// Inclusive lower bound on the numeric value of the prefix.
    prefix_low: u64,
    /// Inclusive upper bound on the numeric value of the prefix.
    prefix_high: u64,
    /// Formatting template of placeholders and literal spaces.
    pattern: String,
}

impl RangeRule {
    /// Creates a rule from already-typed fields.
    ///
    /// The result may violate table invariants; run it through
    /// [`crate::validate::validate_rule`] before trusting it.
    pub fn new(
        issuer_name: impl Into<String>,
        supported_length: usize,
        prefix_length: usize,
        prefix_low: u64,
        prefix_high: u64,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            issuer_name: issuer_name.into(),
            supported_length,
            prefix_length,
            prefix_low,
            prefix_high,
            pattern: pattern.into(),
        }
    }

    /// Maps one raw record onto a candidate rule.
    ///
    /// Fails when a required field is missing or an integer field does not
    /// parse; such a record is discarded by the table builder, never fatal
    /// to the whole load.
    pub fn from_record(record: &RawRecord) -> Result<Self, RecordError> {
        Ok(Self {
            issuer_name: text_field(record, FIELD_ISSUER_NAME)?.to_string(),
            supported_length: int_field(record, FIELD_SUPPORTED_LENGTH)? as usize,
            prefix_length: int_field(record, FIELD_PREFIX_LENGTH)? as usize,
            prefix_low: int_field(record, FIELD_PREFIX_LOW)?,
            prefix_high: int_field(record, FIELD_PREFIX_HIGH)?,
            pattern: text_field(record, FIELD_PATTERN)?.to_string(),
        })
    }

    /// Returns the issuer display name.
    #[inline]
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// Returns the exact PAN digit length this rule applies to.
    #[inline]
    pub const fn supported_length(&self) -> usize {
        self.supported_length
    }

    /// Returns the number of leading digits checked for range membership.
    #[inline]
    pub const fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Returns the inclusive lower prefix bound.
    #[inline]
    pub const fn prefix_low(&self) -> u64 {
        self.prefix_low
    }

    /// Returns the inclusive upper prefix bound.
    #[inline]
    pub const fn prefix_high(&self) -> u64 {
        self.prefix_high
    }

    /// Returns the formatting pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Counts the placeholder characters in the pattern.
    #[inline]
    pub fn placeholder_count(&self) -> usize {
        self.pattern.chars().filter(|&c| c == PLACEHOLDER).count()
    }
}

fn text_field<'a>(record: &'a RawRecord, field: &'static str) -> Result<&'a str, RecordError> {
    record
        .get(field)
        .map(String::as_str)
        .ok_or(RecordError::MissingField { field })
}

fn int_field(record: &RawRecord, field: &'static str) -> Result<u64, RecordError> {
    let value = text_field(record, field)?;
    value
        .parse::<u64>()
        .map_err(|_| RecordError::NonNumericField {
            field,
            value: value.to_string(),
        })
}
