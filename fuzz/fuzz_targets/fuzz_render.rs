//! Fuzz target for pattern rendering and masking.
//!
//! Tests that rendering, stripping, and masking never panic on arbitrary
//! input, and that successful renders preserve the input digits.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pan_formatter::{mask_pan, render, strip_formatting};

fuzz_target!(|data: (&str, &str)| {
    let (pan, pattern) = data;

    // These should never panic
    let _ = strip_formatting(pan);
    let _ = mask_pan(pan);
    let _ = mask_pan(pattern);

    if let Ok(rendered) = render(pan, pattern) {
        // Digits pass through rendering in order, as long as the pattern
        // itself contributes none
        if !pattern.chars().any(|c| c.is_ascii_digit()) {
            assert_eq!(
                strip_formatting(&rendered),
                strip_formatting(pan),
                "render should preserve input digits"
            );
        }
    }
});
