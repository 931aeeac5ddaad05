//! # pan_formatter
//!
//! IIN-range driven PAN formatting library for Rust. Work in progress.
//!
//! Validates a Primary Account Number (PAN) against a configurable table of
//! Issuer Identification Number (IIN) range rules, selects the single
//! matching rule, and renders the PAN into its spaced display form - for
//! any UI or log that shows card numbers grouped per issuer convention.
//!
//! ## Features
//!
//! - Per-rule validation chain with full defect accumulation
//! - Unique-rule matching over overlapping-by-length range tables
//! - Ambiguity detection for inconsistent configurations
//! - Structured defect reporting through an injected sink
//! - Pluggable configuration sources: in-memory, CSV, JSON
//! - PCI-DSS aware masking in every error message and log line
//!
//! ## Quick Start
//!
//! ```rust
//! use pan_formatter::PanFormatter;
//! use pan_formatter::config::MemorySourceBuilder;
//!
//! let source = MemorySourceBuilder::new()
//!     .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
//!     .rule("Diners Club", 14, 3, 300, 305, "#### ###### ####")
//!     .build();
//!
//! let formatter = PanFormatter::from_source(&source).unwrap();
//!
//! assert_eq!(
//!     formatter.format("4444444444444444").unwrap(),
//!     "4444 4444 4444 4444"
//! );
//! assert_eq!(
//!     formatter.format("30122994494222").unwrap(),
//!     "3012 299449 4222"
//! );
//!
//! // An unmatched PAN fails per call, recoverably
//! assert!(formatter.format("23").is_err());
//! ```
//!
//! ## Rule Validation
//!
//! Every configuration record runs through four independent checks; a rule
//! with any defect is discarded (never fatal on its own) and reported to a
//! defect sink, so one pass surfaces every problem a record carries:
//!
//! ```rust
//! use pan_formatter::PanFormatter;
//! use pan_formatter::config::MemorySourceBuilder;
//! use pan_formatter::defect::DefectList;
//!
//! let source = MemorySourceBuilder::new()
//!     .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
//!     .rule("Broken", 5, 1, 1, 1, "XX XX")
//!     .build();
//!
//! let mut defects = DefectList::new();
//! let formatter = PanFormatter::from_source_with_sink(&source, &mut defects).unwrap();
//!
//! assert_eq!(formatter.table().len(), 1);
//! assert_eq!(defects.len(), 1);
//! ```
//!
//! Only an entirely empty table is fatal: a formatter with no rules can
//! never succeed and must not silently exist.
//!
//! ## Masking
//!
//! ```rust
//! use pan_formatter::mask::mask_pan;
//!
//! // Safe for logging - never exposes the full card number
//! assert_eq!(mask_pan("4444444444444444"), "****-****-****-4444");
//! ```
//!
//! ## Rule Semantics
//!
//! A PAN matches a rule iff its digit count equals the rule's supported
//! length and the numeric value of its leading `prefix_length` digits lies
//! inside the rule's inclusive bounds. A well-formed table partitions
//! PAN-space this way; two rules matching one PAN is reported as a
//! configuration defect, not a PAN defect.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `config-csv` | CSV configuration loader |
//! | `config-json` | JSON configuration loader |
//! | `config-all` | Every configuration loader |
//! | `cli` | `panfmt` command-line tool |
//!
//! ## Security
//!
//! This library is designed with PCI-DSS compliance in mind:
//!
//! - Error messages carry masked PANs only
//! - Defect logging never touches PAN data at all
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod defect;
pub mod detect;
pub mod error;
pub mod format;
pub mod formatter;
pub mod mask;
pub mod rule;
pub mod table;
pub mod validate;

// Re-export main types at crate root
pub use error::{ConfigError, FormatError, RecordError};
pub use formatter::PanFormatter;
pub use rule::{RangeRule, PLACEHOLDER};
pub use table::RuleTable;

// Re-export the per-call building blocks
pub use detect::find_rule;
pub use format::{render, strip_formatting};
pub use mask::mask_pan;
pub use validate::{is_valid_rule, validate_rule};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemorySourceBuilder;
    use crate::defect::{DefectKind, DefectList};

    fn sample_formatter() -> PanFormatter {
        let source = MemorySourceBuilder::new()
            .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
            .rule("Diners Club", 14, 3, 300, 305, "#### ###### ####")
            .rule("Mastercard", 16, 2, 51, 55, "#### #### #### ####")
            .build();
        PanFormatter::from_source(&source).unwrap()
    }

    #[test]
    fn test_format_visa_16() {
        let formatter = sample_formatter();
        assert_eq!(
            formatter.format("4444444444444444").unwrap(),
            "4444 4444 4444 4444"
        );
    }

    #[test]
    fn test_format_diners_14() {
        let formatter = sample_formatter();
        assert_eq!(
            formatter.format("30122994494222").unwrap(),
            "3012 299449 4222"
        );
    }

    #[test]
    fn test_unsupported_length() {
        let formatter = sample_formatter();
        assert!(matches!(
            formatter.format("23"),
            Err(FormatError::UnsupportedPan { length: 2, .. })
        ));
    }

    #[test]
    fn test_ambiguous_configuration() {
        let source = MemorySourceBuilder::new()
            .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
            .rule("Visa Duplicate", 16, 1, 4, 4, "#### #### #### ####")
            .build();
        let formatter = PanFormatter::from_source(&source).unwrap();

        assert!(matches!(
            formatter.format("4444444444444444"),
            Err(FormatError::AmbiguousMatch { .. })
        ));
    }

    #[test]
    fn test_empty_configuration_is_fatal() {
        let source = MemorySourceBuilder::new()
            .rule("Broken", 5, 1, 1, 1, "XX XX")
            .build();

        assert!(matches!(
            PanFormatter::from_source(&source),
            Err(ConfigError::NoValidRules)
        ));
    }

    #[test]
    fn test_invalid_rule_is_excluded_but_logged() {
        let source = MemorySourceBuilder::new()
            .rule("Visa", 16, 1, 4, 4, "#### #### #### ####")
            .rule("Broken", 5, 1, 1, 1, "XX XX")
            .build();

        let mut defects = DefectList::new();
        let formatter = PanFormatter::from_source_with_sink(&source, &mut defects).unwrap();

        assert_eq!(formatter.table().len(), 1);
        assert_eq!(defects.len(), 1);
        assert!(matches!(
            defects.defects()[0].kind,
            DefectKind::Rejected { .. }
        ));

        // The surviving rule still formats
        assert!(formatter.format("4444444444444444").is_ok());
    }

    #[test]
    fn test_errors_never_expose_the_pan() {
        let formatter = sample_formatter();

        let err = formatter.format("4444444444444449999").unwrap_err();
        assert!(!err.to_string().contains("4444444444444449999"));

        let source = MemorySourceBuilder::new()
            .rule("A", 16, 1, 4, 4, "#### #### #### ####")
            .rule("B", 16, 1, 4, 4, "#### #### #### ####")
            .build();
        let ambiguous = PanFormatter::from_source(&source).unwrap();
        let err = ambiguous.format("4444444444444444").unwrap_err();
        assert!(!err.to_string().contains("4444444444444444"));
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PanFormatter>();
        assert_send_sync::<RuleTable>();
        assert_send_sync::<RangeRule>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<FormatError>();
    }
}
