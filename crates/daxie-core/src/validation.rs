//! # Validation Module
//!
//! Input validation for the conversion pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  validate(input) ← the single gate for the whole pipeline              │
//! │       │                                                                 │
//! │       ├── starts with '-'?        → NegativeNumber                     │
//! │       │                                                                 │
//! │       ├── not digits[.digits]?    → InvalidFormat                      │
//! │       │                                                                 │
//! │       ├── > 999999999999 yuan     → NumberTooLarge                     │
//! │       │   (after truncation to two fractional digits)                  │
//! │       │                                                                 │
//! │       └── OK → safe to decompose and render                            │
//! │                                                                         │
//! │  Every call path runs this, including the cached one. Caching only     │
//! │  skips re-rendering, never re-validation.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No floating point is used anywhere: the checks are byte classification
//! over the input string, so values like `0.1` are never misrepresented.
//!
//! ## Usage
//! ```rust
//! use daxie_core::validation::validate;
//!
//! assert!(validate("123.45").is_ok());
//! assert!(validate("999999999999.999").is_ok()); // truncates to .99 first
//! assert!(validate("abc").is_err());
//! ```

use crate::error::{ConvertError, ConvertResult};
use crate::MAX_YUAN_DIGITS;

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a textual amount before any conversion work.
///
/// ## Rules
/// - Must not begin with `-` (NegativeNumber)
/// - Must match "one or more ASCII digits, optionally `.` and one or more
///   ASCII digits" (InvalidFormat otherwise: letters, thousands separators,
///   multiple dots, empty sides, whitespace all fail)
/// - After truncation to two fractional digits, the value must not exceed
///   999999999999.99 (NumberTooLarge)
///
/// Truncation happens before the range check, so `"999999999999.999"` is
/// evaluated as `999999999999.99` and accepted.
///
/// ## Example
/// ```rust
/// use daxie_core::validation::validate;
/// use daxie_core::ConvertError;
///
/// assert!(validate("0").is_ok());
/// assert!(matches!(validate("-1.23"), Err(ConvertError::NegativeNumber { .. })));
/// assert!(matches!(validate("1,000"), Err(ConvertError::InvalidFormat { .. })));
/// assert!(matches!(
///     validate("1000000000000"),
///     Err(ConvertError::NumberTooLarge { .. })
/// ));
/// ```
pub fn validate(input: &str) -> ConvertResult<()> {
    // Negative check comes first so "-abc" reports the minus sign, matching
    // the error precedence users expect for money input.
    if input.starts_with('-') {
        return Err(ConvertError::NegativeNumber {
            input: input.to_string(),
        });
    }

    let (integer_part, _fraction_part) = well_formed_parts(input)?;

    // Range check on the integer part alone. Truncating the fraction to two
    // digits can never carry into the yuan value, so digit count decides:
    // the maximum 999999999999 is exactly twelve digits, and every
    // twelve-digit integer is within range.
    if significant_digits(integer_part) > MAX_YUAN_DIGITS {
        return Err(ConvertError::NumberTooLarge {
            input: input.to_string(),
        });
    }

    Ok(())
}

/// Splits the input into (integer_part, fraction_part) after checking the
/// shape rule. The fraction part is `""` when no dot is present.
pub(crate) fn well_formed_parts(input: &str) -> ConvertResult<(&str, &str)> {
    let reject = || ConvertError::InvalidFormat {
        input: input.to_string(),
    };

    let (integer_part, fraction_part) = match input.split_once('.') {
        Some((i, f)) => (i, f),
        None => (input, ""),
    };

    if integer_part.is_empty() || !is_ascii_digits(integer_part) {
        return Err(reject());
    }

    // A dot was present: its right side must be one or more digits, and a
    // second dot (still sitting in `fraction_part`) is rejected here too.
    if input.contains('.') && (fraction_part.is_empty() || !is_ascii_digits(fraction_part)) {
        return Err(reject());
    }

    Ok((integer_part, fraction_part))
}

// =============================================================================
// Component Validators
// =============================================================================

/// Validates the parts of an already-decomposed amount.
///
/// Used by `Amount::from_parts` so that hand-built amounts satisfy the same
/// invariant as parsed ones: `yuan <= 999999999999`, `jiao, fen <= 9`.
pub fn validate_parts(yuan: u64, jiao: u8, fen: u8) -> ConvertResult<()> {
    if yuan > crate::MAX_YUAN {
        return Err(ConvertError::NumberTooLarge {
            input: yuan.to_string(),
        });
    }

    if jiao > 9 || fen > 9 {
        return Err(ConvertError::InvalidFormat {
            input: format!("{yuan}.{jiao}{fen}"),
        });
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// True when `s` is non-empty and every byte is an ASCII digit.
fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Number of digits once leading zeros are stripped ("000" counts as zero).
fn significant_digits(s: &str) -> usize {
    s.bytes().skip_while(|b| *b == b'0').count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_integers() {
        assert!(validate("0").is_ok());
        assert!(validate("7").is_ok());
        assert!(validate("100").is_ok());
        assert!(validate("999999999999").is_ok());
    }

    #[test]
    fn test_accepts_decimals_of_any_length() {
        assert!(validate("1.2").is_ok());
        assert!(validate("1.23").is_ok());
        assert!(validate("1.23456789").is_ok()); // truncated later, not rejected
        assert!(validate("0.999").is_ok());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            validate("-1.23"),
            Err(ConvertError::NegativeNumber { .. })
        ));
        // The minus sign wins over other problems in the same input.
        assert!(matches!(
            validate("-abc"),
            Err(ConvertError::NegativeNumber { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "abc", "1,000", "1.", ".5", "1.2.3", "1 2", " 1.23", "1.23 ", "１２３"] {
            assert!(
                matches!(validate(bad), Err(ConvertError::InvalidFormat { .. })),
                "expected InvalidFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn test_overflow_boundary() {
        // Exactly at the maximum: fine, even with extra fraction digits,
        // because truncation happens before the range check.
        assert!(validate("999999999999.99").is_ok());
        assert!(validate("999999999999.999").is_ok());

        // One yuan over: rejected.
        assert!(matches!(
            validate("1000000000000"),
            Err(ConvertError::NumberTooLarge { .. })
        ));
        assert!(matches!(
            validate("1000000000000.00"),
            Err(ConvertError::NumberTooLarge { .. })
        ));
    }

    #[test]
    fn test_leading_zeros_do_not_overflow() {
        // Thirteen characters but only twelve significant digits.
        assert!(validate("0999999999999").is_ok());
        assert!(validate("0000000000000000001").is_ok());
    }

    #[test]
    fn test_validate_parts() {
        assert!(validate_parts(0, 0, 0).is_ok());
        assert!(validate_parts(999_999_999_999, 9, 9).is_ok());
        assert!(validate_parts(1_000_000_000_000, 0, 0).is_err());
        assert!(validate_parts(1, 10, 0).is_err());
        assert!(validate_parts(1, 0, 10).is_err());
    }

    #[test]
    fn test_error_carries_original_input() {
        let err = validate("1,000").unwrap_err();
        assert_eq!(err.input(), "1,000");
    }
}
