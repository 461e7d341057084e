//! # Error Types
//!
//! The conversion error taxonomy for daxie-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Error Flow                                     │
//! │                                                                         │
//! │  Input text ──► Validator ──┬── ok ──► Decomposer ──► Numeral Engine   │
//! │                             │                                           │
//! │                             └── ConvertError                            │
//! │                                 ├── InvalidFormat   (bad characters)   │
//! │                                 ├── NegativeNumber  (leading minus)    │
//! │                                 └── NumberTooLarge  (out of range)     │
//! │                                                                         │
//! │  The validator is the ONLY producer of errors. The numeral engine and  │
//! │  cache only ever see validated values.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the verbatim offending input for diagnostics
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Convert Error
// =============================================================================

/// Errors produced while converting a textual amount to financial numerals.
///
/// These errors are detected exclusively by the validator and propagate
/// immediately; no downstream component receives unvalidated input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ConvertError {
    /// Input is not "digits, optionally a dot, then digits".
    ///
    /// ## When This Occurs
    /// - Letters or punctuation other than a single `.`
    /// - Thousands separators (`1,000`)
    /// - Multiple dots, or a dot with an empty side (`1.`, `.5`)
    /// - Non-ASCII digits or surrounding whitespace
    #[error("invalid amount format (digits with an optional single '.' expected): {input:?}")]
    InvalidFormat { input: String },

    /// Input begins with a minus sign.
    ///
    /// Financial uppercase amounts are written for non-negative values only,
    /// so a negative amount is rejected before any parsing.
    #[error("negative amounts cannot be converted: {input:?}")]
    NegativeNumber { input: String },

    /// The value, after truncation to two fractional digits, exceeds the
    /// supported maximum of 999,999,999,999.99 yuan.
    ///
    /// ## User Workflow
    /// ```text
    /// convert("1000000000000.00")
    ///      │
    ///      ▼
    /// truncate to 2 decimals: 1000000000000.00
    ///      │
    ///      ▼
    /// integer part has 13 significant digits → NumberTooLarge
    /// ```
    #[error("amount exceeds 999999999999.99 yuan: {input:?}")]
    NumberTooLarge { input: String },
}

impl ConvertError {
    /// Returns the original offending input, verbatim.
    pub fn input(&self) -> &str {
        match self {
            ConvertError::InvalidFormat { input }
            | ConvertError::NegativeNumber { input }
            | ConvertError::NumberTooLarge { input } => input,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::NegativeNumber {
            input: "-1.23".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "negative amounts cannot be converted: \"-1.23\""
        );

        let err = ConvertError::NumberTooLarge {
            input: "1000000000000.00".to_string(),
        };
        assert!(err.to_string().contains("999999999999.99"));
    }

    #[test]
    fn test_input_accessor() {
        let err = ConvertError::InvalidFormat {
            input: "abc".to_string(),
        };
        assert_eq!(err.input(), "abc");
    }
}
