//! # daxie-core: Chinese Financial-Numeral Conversion
//!
//! This crate converts decimal monetary amounts, given as strings, into
//! their traditional Chinese uppercase (financial) numeral form — the
//! tamper-evident writing used on checks and official documents.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Daxie Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host (CLI, HTTP handler, FFI)                  │   │
//! │  │            reads input ──► convert ──► prints result            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ daxie-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │  amount   │  │  numeral  │  │   cache   │  │   │
//! │  │   │  checks   │  │  Amount   │  │  engine   │  │ LRU + tab │  │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  │   │
//! │  │         └──────────────┴───────┬──────┴──────────────┘        │   │
//! │  │                                ▼                               │   │
//! │  │   validator → decomposer → numeral engine → composed string   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - The validated `Amount` type (integer yuan/jiao/fen)
//! - [`numeral`] - The rendering engine (grouping and zero-elision rules)
//! - [`cache`] - Precomputation table + bounded memoization
//! - [`error`] - The conversion error taxonomy
//! - [`validation`] - Input validation (the sole error producer)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **No Floats**: Amounts are integer yuan + jiao/fen digits, exact by construction
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use daxie_core::{convert, CachedConverter};
//!
//! // One-off conversion
//! assert_eq!(convert("123.45").unwrap(), "壹佰贰拾叁元肆角伍分");
//!
//! // Hot-path conversion: precomputed groups + memoized results
//! let converter = CachedConverter::new();
//! assert_eq!(converter.convert("123.45").unwrap(), "壹佰贰拾叁元肆角伍分");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod cache;
pub mod error;
pub mod numeral;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use daxie_core::Amount` instead of
// `use daxie_core::amount::Amount`

pub use amount::Amount;
pub use cache::CachedConverter;
pub use error::{ConvertError, ConvertResult};
pub use numeral::convert;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum representable yuan value (inclusive).
///
/// ## Business Reason
/// Three base-10000 groups (units, 万, 亿) cover twelve digits; anything
/// larger would need the next large unit (兆), which financial documents
/// in this dialect do not use. Values above this are rejected as
/// `NumberTooLarge`, never clamped.
pub const MAX_YUAN: u64 = 999_999_999_999;

/// Digit count of [`MAX_YUAN`]; the validator's overflow check compares
/// significant integer digits against this.
pub const MAX_YUAN_DIGITS: usize = 12;

// =============================================================================
// Crate-Level Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// End-to-end: the full pipeline over the boundary scenarios, through
    /// both entry points.
    #[test]
    fn test_pipeline_end_to_end() {
        let converter = CachedConverter::new();
        let cases = [
            ("0", "零元整"),
            ("1.23", "壹元贰角叁分"),
            ("100.05", "壹佰元零伍分"),
            ("1001.00", "壹仟零壹元整"),
            ("10001.10", "壹万零壹元壹角"),
            (
                "999999999999.99",
                "玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元玖角玖分",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(convert(input).unwrap(), expected, "uncached {input}");
            assert_eq!(converter.convert(input).unwrap(), expected, "cached {input}");
        }
    }

    #[test]
    fn test_constants_agree() {
        assert_eq!(MAX_YUAN.to_string().len(), MAX_YUAN_DIGITS);
    }
}
