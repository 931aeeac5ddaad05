//! Rule lookup by IIN prefix range matching.
//!
//! A PAN is matched against the table by exact length plus the numeric
//! value of its leading digits. A well-formed table partitions PAN-space,
//! so at most one rule can apply; more than one is a configuration defect
//! and is reported as such.

use crate::error::FormatError;
use crate::mask::mask_pan;
use crate::rule::RangeRule;
use crate::table::RuleTable;

/// Finds the unique rule applicable to the given digit string.
///
/// The table is scanned in source order; order never affects which rules
/// are candidates, only the diagnostics on ambiguity.
///
/// # Errors
///
/// * [`FormatError::UnsupportedPan`] when no rule is a candidate.
/// * [`FormatError::AmbiguousMatch`] when two or more rules are candidates
///   at once; the table is internally inconsistent.
///
/// # Example
///
/// ```
/// use pan_formatter::defect::DefectList;
/// use pan_formatter::rule::RangeRule;
/// use pan_formatter::table::RuleTable;
/// use pan_formatter::detect::find_rule;
///
/// let rules = vec![RangeRule::new("Visa", 16, 1, 4, 4, "#### #### #### ####")];
/// let table = RuleTable::from_rules(rules, &mut DefectList::new()).unwrap();
///
/// let rule = find_rule("4444444444444444", &table).unwrap();
/// assert_eq!(rule.issuer_name(), "Visa");
/// ```
pub fn find_rule<'t>(pan: &str, table: &'t RuleTable) -> Result<&'t RangeRule, FormatError> {
    let candidates: Vec<&RangeRule> = table.iter().filter(|rule| is_candidate(pan, rule)).collect();

    match candidates.as_slice() {
        [] => Err(FormatError::UnsupportedPan {
            masked: mask_pan(pan),
            length: pan.len(),
        }),
        [rule] => Ok(*rule),
        rules => Err(FormatError::AmbiguousMatch {
            masked: mask_pan(pan),
            issuers: rules
                .iter()
                .map(|rule| rule.issuer_name().to_string())
                .collect(),
        }),
    }
}

/// Returns true if the rule applies to the PAN.
///
/// A candidate match requires the exact supported length and the numeric
/// value of the leading `prefix_length` digits to fall inside the rule's
/// inclusive bounds. Leading zeros are fine: invariant checking guarantees
/// the bounds carry the same digit count as the prefix, so numeric and
/// lexicographic comparison coincide.
#[inline]
pub fn is_candidate(pan: &str, rule: &RangeRule) -> bool {
    if pan.len() != rule.supported_length() {
        return false;
    }

    let prefix = match pan.get(..rule.prefix_length()) {
        Some(prefix) => prefix,
        None => return false,
    };

    // A non-digit sneaking past the collaborator's sanitization can never
    // match; str::parse would also accept a leading '+', so check first.
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match prefix.parse::<u64>() {
        Ok(value) => value >= rule.prefix_low() && value <= rule.prefix_high(),
        Err(_) => false,
    }
}
