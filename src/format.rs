//! Pattern rendering for matched PANs.
//!
//! Rendering walks the matched rule's pattern left to right: a placeholder
//! consumes and emits the next PAN digit, anything else is emitted
//! unchanged. The table guarantees placeholder count equals PAN length for
//! any matched rule, so the input is exactly exhausted when the pattern
//! ends.

use crate::error::FormatError;
use crate::rule::PLACEHOLDER;

/// Renders a digit string into the given pattern.
///
/// # Errors
///
/// [`FormatError::PatternDigitMismatch`] when placeholder count and digit
/// count disagree. This cannot happen for a pan/pattern pair produced by
/// [`crate::detect::find_rule`]; it only guards hand-assembled input.
///
/// # Example
///
/// ```
/// use pan_formatter::format::render;
///
/// assert_eq!(
///     render("4444444444444444", "#### #### #### ####").unwrap(),
///     "4444 4444 4444 4444"
/// );
/// assert_eq!(
///     render("30122994494222", "#### ###### ####").unwrap(),
///     "3012 299449 4222"
/// );
/// ```
pub fn render(pan: &str, pattern: &str) -> Result<String, FormatError> {
    let mut digits = pan.chars();
    let mut result = String::with_capacity(pattern.len());

    for c in pattern.chars() {
        if c == PLACEHOLDER {
            match digits.next() {
                Some(digit) => result.push(digit),
                None => return Err(mismatch(pan, pattern)),
            }
        } else {
            result.push(c);
        }
    }

    if digits.next().is_some() {
        return Err(mismatch(pan, pattern));
    }

    Ok(result)
}

fn mismatch(pan: &str, pattern: &str) -> FormatError {
    FormatError::PatternDigitMismatch {
        placeholders: pattern.chars().filter(|&c| c == PLACEHOLDER).count(),
        digits: pan.chars().count(),
    }
}

/// Strips all formatting from a PAN, leaving only digits.
///
/// # Example
///
/// ```
/// use pan_formatter::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4444 4444 4444 4444"), "4444444444444444");
/// assert_eq!(strip_formatting("4444-4444-4444-4444"), "4444444444444444");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
