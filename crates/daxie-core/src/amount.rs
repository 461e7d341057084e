//! # Amount Module
//!
//! Provides the `Amount` type: the validated, fixed-point monetary value
//! flowing through the conversion pipeline.
//!
//! ## Why Integer Fields?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A financial numeral that misrenders a single fen defeats the whole    │
//! │  point of uppercase amounts (tamper-evident check writing).            │
//! │                                                                         │
//! │  OUR SOLUTION: integer yuan + one digit each of jiao and fen           │
//! │    "123.45" → Amount { yuan: 123, jiao: 4, fen: 5 }                    │
//! │    Exact by construction; no rounding anywhere, only truncation.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use daxie_core::Amount;
//!
//! let amount = Amount::parse("123.45").unwrap();
//! assert_eq!(amount.yuan(), 123);
//! assert_eq!(amount.jiao(), 4);
//! assert_eq!(amount.fen(), 5);
//!
//! // NEVER do this:
//! // let bad = Amount::from_float(123.45); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConvertResult;
use crate::validation;

// =============================================================================
// Amount Type
// =============================================================================

/// A validated monetary amount in yuan, jiao and fen.
///
/// ## Invariant
/// `yuan <= 999999999999` and `jiao, fen <= 9`. Both constructors enforce
/// this, so every `Amount` the numeral engine sees is in range.
///
/// ## Design Decisions
/// - **u64 yuan**: the domain maximum (twelve digits) fits comfortably
/// - **Separate jiao/fen digits**: the fraction renderer consumes them
///   individually, so storing cents would just be decoded again
/// - **Immutable**: no setters; produced once by the decomposer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    yuan: u64,
    jiao: u8,
    fen: u8,
}

impl Amount {
    /// Parses and decomposes a textual amount.
    ///
    /// Runs the validator first, then splits the text into integer yuan and
    /// a 0-99 cents value: leading zeros are stripped from the integer part,
    /// and the fraction is truncated (never rounded) to its first two
    /// digits. Truncation precedes normalization, so `"999999999999.999"`
    /// decomposes to `999999999999.99` instead of being rejected.
    ///
    /// ## Example
    /// ```rust
    /// use daxie_core::Amount;
    ///
    /// assert_eq!(Amount::parse("0.999").unwrap().total_cents(), 99); // truncated
    /// assert_eq!(Amount::parse("007").unwrap().yuan(), 7);
    /// assert!(Amount::parse("-1").is_err());
    /// ```
    pub fn parse(input: &str) -> ConvertResult<Self> {
        validation::validate(input)?;

        // Shape is known-good from here on; the re-split cannot fail.
        let (integer_part, fraction_part) = validation::well_formed_parts(input)?;

        // Fold the digits directly instead of str::parse: the validator has
        // capped the significant digits at twelve, so u64 cannot overflow.
        let yuan = integer_part
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        // Truncate to two fractional digits; absent digits are zero.
        let mut fraction = fraction_part.bytes();
        let jiao = fraction.next().map_or(0, |b| b - b'0');
        let fen = fraction.next().map_or(0, |b| b - b'0');

        Ok(Amount { yuan, jiao, fen })
    }

    /// Builds an amount from already-decomposed parts, re-checking the
    /// range invariant.
    ///
    /// ## Example
    /// ```rust
    /// use daxie_core::Amount;
    ///
    /// let amount = Amount::from_parts(123, 4, 5).unwrap();
    /// assert_eq!(amount.to_string(), "123.45");
    /// assert!(Amount::from_parts(1_000_000_000_000, 0, 0).is_err());
    /// ```
    pub fn from_parts(yuan: u64, jiao: u8, fen: u8) -> ConvertResult<Self> {
        validation::validate_parts(yuan, jiao, fen)?;
        Ok(Amount { yuan, jiao, fen })
    }

    /// The integer yuan value (0 to 999999999999).
    #[inline]
    pub const fn yuan(&self) -> u64 {
        self.yuan
    }

    /// The jiao digit (first fractional digit, 0-9).
    #[inline]
    pub const fn jiao(&self) -> u8 {
        self.jiao
    }

    /// The fen digit (second fractional digit, 0-9).
    #[inline]
    pub const fn fen(&self) -> u8 {
        self.fen
    }

    /// The fractional part as cents (0-99).
    #[inline]
    pub const fn total_cents(&self) -> u8 {
        self.jiao * 10 + self.fen
    }

    /// Checks if the amount is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.yuan == 0 && self.jiao == 0 && self.fen == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display prints the normalized decimal form: trailing zero fraction
/// digits are dropped, as is the dot for whole amounts.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.jiao, self.fen) {
            (0, 0) => write!(f, "{}", self.yuan),
            (j, 0) => write!(f, "{}.{}", self.yuan, j),
            (j, n) => write!(f, "{}.{}{}", self.yuan, j, n),
        }
    }
}

/// Default amount is zero yuan.
impl Default for Amount {
    fn default() -> Self {
        Amount {
            yuan: 0,
            jiao: 0,
            fen: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_only() {
        let amount = Amount::parse("123").unwrap();
        assert_eq!(amount.yuan(), 123);
        assert_eq!(amount.jiao(), 0);
        assert_eq!(amount.fen(), 0);
        assert_eq!(amount.total_cents(), 0);
    }

    #[test]
    fn test_parse_pads_short_fractions() {
        // "123.4" means 4 jiao, 0 fen.
        let amount = Amount::parse("123.4").unwrap();
        assert_eq!(amount.jiao(), 4);
        assert_eq!(amount.fen(), 0);
        assert_eq!(amount.total_cents(), 40);
    }

    #[test]
    fn test_parse_truncates_long_fractions() {
        // Truncation, not rounding: .999 → .99
        let amount = Amount::parse("0.999").unwrap();
        assert_eq!(amount.yuan(), 0);
        assert_eq!(amount.total_cents(), 99);

        let amount = Amount::parse("1.23456789").unwrap();
        assert_eq!(amount.total_cents(), 23);
    }

    #[test]
    fn test_parse_strips_leading_zeros() {
        assert_eq!(Amount::parse("00123").unwrap().yuan(), 123);
        assert_eq!(Amount::parse("000").unwrap().yuan(), 0);
        assert_eq!(Amount::parse("0999999999999").unwrap().yuan(), 999_999_999_999);
    }

    #[test]
    fn test_parse_maximum() {
        let amount = Amount::parse("999999999999.99").unwrap();
        assert_eq!(amount.yuan(), 999_999_999_999);
        assert_eq!(amount.jiao(), 9);
        assert_eq!(amount.fen(), 9);

        // Truncated back into range before the check.
        assert!(Amount::parse("999999999999.999").is_ok());
        assert!(Amount::parse("1000000000000").is_err());
    }

    #[test]
    fn test_from_parts_enforces_invariant() {
        assert!(Amount::from_parts(999_999_999_999, 9, 9).is_ok());
        assert!(Amount::from_parts(1_000_000_000_000, 0, 0).is_err());
        assert!(Amount::from_parts(0, 10, 0).is_err());
    }

    #[test]
    fn test_display_normalizes() {
        assert_eq!(Amount::parse("012.300").unwrap().to_string(), "12.3");
        assert_eq!(Amount::parse("1.23000").unwrap().to_string(), "1.23");
        assert_eq!(Amount::parse("00123").unwrap().to_string(), "123");
        assert_eq!(Amount::parse("0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_is_zero() {
        assert!(Amount::parse("0").unwrap().is_zero());
        assert!(Amount::parse("0.00").unwrap().is_zero());
        assert!(!Amount::parse("0.01").unwrap().is_zero());
    }

    #[test]
    fn test_serde_round_trip() {
        let amount = Amount::parse("123.45").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, r#"{"yuan":123,"jiao":4,"fen":5}"#);

        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
