//! Validation chain for candidate rules.
//!
//! Four independent, stateless checks run over every candidate rule in a
//! fixed order, with no short-circuiting: a single pass gathers every defect
//! a rule carries so a maintainer sees all of them at once. A rule enters
//! the table iff the defect list is empty.
//!
//! The checks are a flat table of message/predicate pairs rather than a
//! handler chain; order only affects the defect listing, never the
//! accept/reject outcome.

use crate::rule::{RangeRule, PLACEHOLDER};

/// Defect message: the pattern is not placeholder-and-space shaped.
pub const BAD_PATTERN_SHAPE: &str =
    "pattern must start with a placeholder and contain only placeholders and spaces";
/// Defect message: placeholder count and supported length disagree.
pub const BAD_PLACEHOLDER_COUNT: &str =
    "placeholder count in pattern does not match supported pan length";
/// Defect message: a range bound has a different digit count than the prefix.
pub const BAD_PREFIX_RANGE_DIGITS: &str =
    "range bound digit count does not match prefix length";
/// Defect message: the prefix is longer than the whole PAN.
pub const BAD_PREFIX_LENGTH_BOUND: &str =
    "prefix length is bigger than supported pan length";

const CHECKS: &[(&str, fn(&RangeRule) -> bool)] = &[
    (BAD_PATTERN_SHAPE, pattern_shape_ok),
    (BAD_PLACEHOLDER_COUNT, placeholder_count_ok),
    (BAD_PREFIX_RANGE_DIGITS, prefix_range_digits_ok),
    (BAD_PREFIX_LENGTH_BOUND, prefix_length_bound_ok),
];

/// Runs every check against the rule and returns all defect messages.
///
/// Deterministic: messages appear in check-table order, and re-running the
/// chain on an already-accepted rule yields an empty list.
pub fn validate_rule(rule: &RangeRule) -> Vec<&'static str> {
    CHECKS
        .iter()
        .filter(|(_, ok)| !ok(rule))
        .map(|(message, _)| *message)
        .collect()
}

/// Returns true if the rule passes every check.
#[inline]
pub fn is_valid_rule(rule: &RangeRule) -> bool {
    CHECKS.iter().all(|(_, ok)| ok(rule))
}

// Invariant: pattern matches ^#[#\s]*$
fn pattern_shape_ok(rule: &RangeRule) -> bool {
    let pattern = rule.pattern();
    pattern.starts_with(PLACEHOLDER)
        && pattern
            .chars()
            .all(|c| c == PLACEHOLDER || c.is_ascii_whitespace())
}

// Invariant: placeholder count == supported length
fn placeholder_count_ok(rule: &RangeRule) -> bool {
    rule.placeholder_count() == rule.supported_length()
}

// Invariant: both bounds carry exactly prefix_length decimal digits. This is
// what makes numeric and lexicographic prefix comparison coincide in the
// matcher.
fn prefix_range_digits_ok(rule: &RangeRule) -> bool {
    decimal_digits(rule.prefix_low()) == rule.prefix_length()
        && decimal_digits(rule.prefix_high()) == rule.prefix_length()
}

// Invariant: prefix_length <= supported_length
fn prefix_length_bound_ok(rule: &RangeRule) -> bool {
    rule.prefix_length() <= rule.supported_length()
}

fn decimal_digits(mut value: u64) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_rule() -> RangeRule {
        RangeRule::new("Visa", 16, 1, 4, 4, "#### #### #### ####")
    }

    #[test]
    fn test_valid_rule_has_no_defects() {
        assert!(validate_rule(&valid_rule()).is_empty());
        assert!(is_valid_rule(&valid_rule()));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let rule = valid_rule();
        assert!(validate_rule(&rule).is_empty());
        assert!(validate_rule(&rule).is_empty());
    }

    #[test]
    fn test_wrong_placeholder_character() {
        let rule = RangeRule::new("Bad", 4, 1, 1, 1, "XX XX");
        let issues = validate_rule(&rule);
        assert!(issues.contains(&BAD_PATTERN_SHAPE));
        // The bogus pattern also breaks the placeholder count
        assert!(issues.contains(&BAD_PLACEHOLDER_COUNT));
    }

    #[test]
    fn test_pattern_must_start_with_placeholder() {
        let rule = RangeRule::new("Bad", 3, 1, 1, 1, " ###");
        assert!(validate_rule(&rule).contains(&BAD_PATTERN_SHAPE));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let rule = RangeRule::new("Bad", 0, 1, 1, 1, "");
        assert!(validate_rule(&rule).contains(&BAD_PATTERN_SHAPE));
    }

    #[test]
    fn test_placeholder_count_mismatch() {
        let rule = RangeRule::new("Bad", 16, 1, 4, 4, "#### ####");
        let issues = validate_rule(&rule);
        assert_eq!(issues, vec![BAD_PLACEHOLDER_COUNT]);
    }

    #[test]
    fn test_range_bound_digit_mismatch() {
        // 3-digit prefix but 2-digit lower bound
        let rule = RangeRule::new("Bad", 14, 3, 30, 305, "#### ###### ####");
        assert_eq!(validate_rule(&rule), vec![BAD_PREFIX_RANGE_DIGITS]);

        // high bound off as well
        let rule = RangeRule::new("Bad", 14, 3, 300, 3055, "#### ###### ####");
        assert_eq!(validate_rule(&rule), vec![BAD_PREFIX_RANGE_DIGITS]);
    }

    #[test]
    fn test_leading_zero_bound_loses_a_digit() {
        // A bound written "034" arrives as the integer 34, which has two
        // decimal digits and so cannot back a 3-digit prefix.
        let rule = RangeRule::new("Bad", 14, 3, 34, 305, "#### ###### ####");
        assert!(validate_rule(&rule).contains(&BAD_PREFIX_RANGE_DIGITS));
    }

    #[test]
    fn test_prefix_longer_than_pan() {
        let rule = RangeRule::new("Bad", 4, 6, 400000, 499999, "####");
        assert_eq!(validate_rule(&rule), vec![BAD_PREFIX_LENGTH_BOUND]);
    }

    #[test]
    fn test_all_defects_reported_at_once() {
        // Every check fails; all four messages must be present, in order.
        let rule = RangeRule::new("Bad", 2, 3, 3, 3055, "ab");
        let issues = validate_rule(&rule);
        assert_eq!(
            issues,
            vec![
                BAD_PATTERN_SHAPE,
                BAD_PLACEHOLDER_COUNT,
                BAD_PREFIX_RANGE_DIGITS,
                BAD_PREFIX_LENGTH_BOUND,
            ]
        );
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(4), 1);
        assert_eq!(decimal_digits(34), 2);
        assert_eq!(decimal_digits(300), 3);
        assert_eq!(decimal_digits(u64::MAX), 20);
    }
}
