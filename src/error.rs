//! Rich error types for rule loading and PAN formatting.
//!
//! Errors carry masked PANs only; the full card number never appears in an
//! error message.

use std::fmt;

/// Errors raised while mapping a single raw record to a rule.
///
/// A malformed record is never fatal to the table: the builder discards the
/// record, reports a defect, and continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent from the record.
    MissingField {
        /// Canonical name of the absent field.
        field: &'static str,
    },

    /// A field that must hold an integer does not parse as one.
    NonNumericField {
        /// Canonical name of the offending field.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "required field '{}' is missing", field)
            }

            Self::NonNumericField { field, value } => {
                write!(
                    f,
                    "field '{}' must be a non-negative integer, got '{}'",
                    field, value
                )
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Fatal errors raised while constructing the rule table.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration source could not be read.
    Io(std::io::Error),

    /// The configuration source was read but could not be interpreted.
    Parse(String),

    /// Every record was discarded; the rule table would be empty.
    ///
    /// A formatter with no rules can never succeed and must not silently
    /// exist, so this aborts construction.
    NoValidRules,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unable to read configuration source: {}", e),
            Self::Parse(s) => write!(f, "unable to parse configuration source: {}", s),
            Self::NoValidRules => {
                write!(f, "no valid formatting rule survived validation")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Errors raised by a single `format()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No configured rule matches the PAN.
    ///
    /// Recoverable per call; the caller decides what to do (for instance,
    /// show the raw PAN ungrouped).
    UnsupportedPan {
        /// Masked form of the rejected PAN.
        masked: String,
        /// Digit count of the rejected PAN.
        length: usize,
    },

    /// Two or more rules match the PAN.
    ///
    /// This is a configuration defect, not a PAN defect: a well-formed table
    /// partitions PAN-space by (length, prefix range) without overlap. Fix
    /// the configuration rather than retrying.
    AmbiguousMatch {
        /// Masked form of the PAN that exposed the overlap.
        masked: String,
        /// Issuer names of every colliding rule, in table order.
        issuers: Vec<String>,
    },

    /// The matched pattern and the PAN disagree on digit count.
    ///
    /// Unreachable through the facade: the table admits only rules whose
    /// placeholder count equals their supported length, and the matcher only
    /// returns a rule whose supported length equals the PAN length.
    PatternDigitMismatch {
        /// Placeholder count of the pattern.
        placeholders: usize,
        /// Digit count of the PAN.
        digits: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPan { masked, length } => {
                write!(
                    f,
                    "no configured rule matches pan {} ({} digits)",
                    masked, length
                )
            }

            Self::AmbiguousMatch { masked, issuers } => {
                write!(
                    f,
                    "{} rules match pan {} (issuers: {}); the rule table is internally inconsistent",
                    issuers.len(),
                    masked,
                    issuers.join(", ")
                )
            }

            Self::PatternDigitMismatch {
                placeholders,
                digits,
            } => {
                write!(
                    f,
                    "pattern has {} placeholders but pan has {} digits; a table invariant was violated upstream",
                    placeholders, digits
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}
