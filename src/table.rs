//! Rule table construction.
//!
//! The table is built once from the raw record sequence and is read-only
//! afterwards: no rule is ever added, removed, or mutated after load, which
//! makes concurrent matching safe without locking.

use crate::config::RawRecord;
use crate::defect::{ConfigDefect, DefectKind, DefectSink};
use crate::error::ConfigError;
use crate::rule::{RangeRule, FIELD_ISSUER_NAME};
use crate::validate::validate_rule;

/// An ordered, immutable collection of validated formatting rules.
///
/// Only the builders below can create one, and they refuse to create an
/// empty table, so every `RuleTable` in existence holds at least one rule.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<RangeRule>,
}

impl RuleTable {
    /// Builds a table from raw records.
    ///
    /// Per record: map it to a candidate rule, run the validation chain,
    /// keep the rule iff it is defect-free. Every discard goes to `sink`;
    /// discards are accumulated, never aborting the load. Fails with
    /// [`ConfigError::NoValidRules`] when nothing survives.
    pub fn from_records(
        records: &[RawRecord],
        sink: &mut dyn DefectSink,
    ) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let issuer = record.get(FIELD_ISSUER_NAME).cloned();

            let rule = match RangeRule::from_record(record) {
                Ok(rule) => rule,
                Err(err) => {
                    sink.report(ConfigDefect {
                        record: index,
                        issuer,
                        kind: DefectKind::Malformed(err),
                    });
                    continue;
                }
            };

            let issues = validate_rule(&rule);
            if issues.is_empty() {
                rules.push(rule);
            } else {
                sink.report(ConfigDefect {
                    record: index,
                    issuer,
                    kind: DefectKind::Rejected { issues },
                });
            }
        }

        Self::from_rule_vec(rules)
    }

    /// Builds a table from already-typed rules, applying the same admission
    /// as [`RuleTable::from_records`].
    pub fn from_rules(
        rules: Vec<RangeRule>,
        sink: &mut dyn DefectSink,
    ) -> Result<Self, ConfigError> {
        let mut kept = Vec::with_capacity(rules.len());

        for (index, rule) in rules.into_iter().enumerate() {
            let issues = validate_rule(&rule);
            if issues.is_empty() {
                kept.push(rule);
            } else {
                sink.report(ConfigDefect {
                    record: index,
                    issuer: Some(rule.issuer_name().to_string()),
                    kind: DefectKind::Rejected { issues },
                });
            }
        }

        Self::from_rule_vec(kept)
    }

    fn from_rule_vec(rules: Vec<RangeRule>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::NoValidRules);
        }
        Ok(Self { rules })
    }

    /// Returns the rules in source order.
    #[inline]
    pub fn rules(&self) -> &[RangeRule] {
        &self.rules
    }

    /// Returns the number of rules in the table. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; kept for API symmetry with collection types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RangeRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawRecord;
    use crate::defect::DefectList;
    use crate::error::RecordError;
    use crate::rule::{
        FIELD_PATTERN, FIELD_PREFIX_HIGH, FIELD_PREFIX_LENGTH, FIELD_PREFIX_LOW,
        FIELD_SUPPORTED_LENGTH,
    };
    use crate::validate::BAD_PATTERN_SHAPE;

    fn record(
        issuer: &str,
        length: &str,
        prefix_length: &str,
        low: &str,
        high: &str,
        pattern: &str,
    ) -> RawRecord {
        let mut map = RawRecord::new();
        map.insert(FIELD_ISSUER_NAME.to_string(), issuer.to_string());
        map.insert(FIELD_SUPPORTED_LENGTH.to_string(), length.to_string());
        map.insert(FIELD_PREFIX_LENGTH.to_string(), prefix_length.to_string());
        map.insert(FIELD_PREFIX_LOW.to_string(), low.to_string());
        map.insert(FIELD_PREFIX_HIGH.to_string(), high.to_string());
        map.insert(FIELD_PATTERN.to_string(), pattern.to_string());
        map
    }

    #[test]
    fn test_valid_records_are_kept_in_order() {
        let records = vec![
            record("Visa", "16", "1", "4", "4", "#### #### #### ####"),
            record("Diners", "14", "3", "300", "305", "#### ###### ####"),
        ];

        let mut sink = DefectList::new();
        let table = RuleTable::from_records(&records, &mut sink).unwrap();

        assert_eq!(table.len(), 2);
        assert!(sink.is_empty());
        assert_eq!(table.rules()[0].issuer_name(), "Visa");
        assert_eq!(table.rules()[1].issuer_name(), "Diners");
    }

    #[test]
    fn test_invalid_rule_is_discarded_and_reported() {
        let records = vec![
            record("Visa", "16", "1", "4", "4", "#### #### #### ####"),
            record("Broken", "5", "1", "1", "1", "XX XX"),
        ];

        let mut sink = DefectList::new();
        let table = RuleTable::from_records(&records, &mut sink).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(sink.len(), 1);

        let defect = &sink.defects()[0];
        assert_eq!(defect.record, 1);
        assert_eq!(defect.issuer.as_deref(), Some("Broken"));
        match &defect.kind {
            DefectKind::Rejected { issues } => assert!(issues.contains(&BAD_PATTERN_SHAPE)),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_record_is_discarded_and_reported() {
        let mut broken = record("NoLength", "16", "1", "4", "4", "#### #### #### ####");
        broken.remove(FIELD_SUPPORTED_LENGTH);

        let records = vec![
            broken,
            record("Visa", "16", "1", "4", "4", "#### #### #### ####"),
        ];

        let mut sink = DefectList::new();
        let table = RuleTable::from_records(&records, &mut sink).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(sink.len(), 1);
        assert!(matches!(
            sink.defects()[0].kind,
            DefectKind::Malformed(RecordError::MissingField {
                field: FIELD_SUPPORTED_LENGTH
            })
        ));
    }

    #[test]
    fn test_empty_table_is_fatal() {
        let records = vec![record("Broken", "5", "1", "1", "1", "XX XX")];

        let mut sink = DefectList::new();
        let err = RuleTable::from_records(&records, &mut sink).unwrap_err();

        assert!(matches!(err, ConfigError::NoValidRules));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_no_records_at_all_is_fatal() {
        let mut sink = DefectList::new();
        assert!(matches!(
            RuleTable::from_records(&[], &mut sink),
            Err(ConfigError::NoValidRules)
        ));
    }

    #[test]
    fn test_every_defect_is_accumulated() {
        let records = vec![
            record("Bad1", "5", "1", "1", "1", "XX XX"),
            record("Bad2", "16", "3", "30", "305", "#### #### #### ####"),
            record("Visa", "16", "1", "4", "4", "#### #### #### ####"),
        ];

        let mut sink = DefectList::new();
        let table = RuleTable::from_records(&records, &mut sink).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.defects()[0].record, 0);
        assert_eq!(sink.defects()[1].record, 1);
    }

    #[test]
    fn test_from_rules_applies_same_admission() {
        let rules = vec![
            RangeRule::new("Visa", 16, 1, 4, 4, "#### #### #### ####"),
            RangeRule::new("Broken", 5, 1, 1, 1, "XX XX"),
        ];

        let mut sink = DefectList::new();
        let table = RuleTable::from_rules(rules, &mut sink).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.defects()[0].issuer.as_deref(), Some("Broken"));
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleTable>();
    }
}
