//! Structured defect reporting for configuration loading.
//!
//! Discarded records are never fatal, but they must be visible. The table
//! builder hands every discard to a [`DefectSink`] as a structured record,
//! so production code can log them and tests can assert on them without
//! capturing log output.

use crate::error::RecordError;

/// One discarded configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefect {
    /// Zero-based index of the record in source order.
    pub record: usize,
    /// Issuer name, when the record carried one.
    pub issuer: Option<String>,
    /// Why the record was discarded.
    pub kind: DefectKind,
}

/// The reason a configuration record was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefectKind {
    /// The record could not be mapped to a candidate rule at all.
    Malformed(RecordError),
    /// A candidate rule was built but failed the validation chain.
    Rejected {
        /// Every defect message the chain produced, in check order.
        issues: Vec<&'static str>,
    },
}

/// Receives structured defect records during table construction.
pub trait DefectSink {
    /// Accepts one discarded record.
    fn report(&mut self, defect: ConfigDefect);
}

/// Sink that emits one `tracing` warning per defect.
///
/// The default sink used by [`crate::PanFormatter`] constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefectLog;

impl DefectSink for DefectLog {
    fn report(&mut self, defect: ConfigDefect) {
        match &defect.kind {
            DefectKind::Malformed(err) => tracing::warn!(
                record = defect.record,
                issuer = defect.issuer.as_deref(),
                error = %err,
                "discarding malformed configuration record"
            ),
            DefectKind::Rejected { issues } => tracing::warn!(
                record = defect.record,
                issuer = defect.issuer.as_deref(),
                issues = ?issues,
                "discarding invalid formatting rule"
            ),
        }
    }
}

/// Sink that collects defects for later inspection.
#[derive(Debug, Clone, Default)]
pub struct DefectList {
    defects: Vec<ConfigDefect>,
}

impl DefectList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected defects in report order.
    pub fn defects(&self) -> &[ConfigDefect] {
        &self.defects
    }

    /// Returns the number of collected defects.
    pub fn len(&self) -> usize {
        self.defects.len()
    }

    /// Returns true if nothing was discarded.
    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }
}

impl DefectSink for DefectList {
    fn report(&mut self, defect: ConfigDefect) {
        self.defects.push(defect);
    }
}
