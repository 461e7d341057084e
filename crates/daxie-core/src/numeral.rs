//! # Numeral Engine
//!
//! Renders validated amounts as traditional Chinese uppercase (financial)
//! numerals, the tamper-evident form used on checks: 壹贰叁 instead of 一二三.
//!
//! ## Rendering Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rendering Pipeline                                │
//! │                                                                         │
//! │  Amount { yuan: 10001, jiao: 1, fen: 0 }                               │
//! │       │                                                                 │
//! │       ├── render_integer(10001) ──► "壹万零壹"                          │
//! │       │     └── base-10000 groups, each via render_group               │
//! │       │                                                                 │
//! │       ├── "元"                                                          │
//! │       │                                                                 │
//! │       └── render_fraction(1, 0) ──► "壹角"                              │
//! │                                                                         │
//! │  Result: "壹万零壹元壹角"                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Zero-Elision Rules
//! The stateful part of the algorithm is where zeros go:
//! - inside a 4-digit group, a run of zeros between two non-zero digits
//!   collapses to a single 零; leading/trailing runs emit nothing
//!   (1001 → 壹仟零壹, 1000 → 壹仟)
//! - between groups, one 零 marks a gap: either a fully-zero middle group
//!   above non-zero lower groups (100000500 → 壹亿零伍佰), or a group whose
//!   own thousands digit is zero following a rendered group
//!   (10001 → 壹万零壹); adjacent gap zeros collapse to one
//!   (500000001 → 伍亿零壹)
//! - a trailing all-zero group emits nothing (100000000 → 壹亿)
//!
//! Every function here assumes its input is already validated; feeding an
//! out-of-range value is a programming error, not a recoverable failure.

use crate::amount::Amount;
use crate::error::ConvertResult;
use crate::MAX_YUAN;

// =============================================================================
// Numeral Tables
// =============================================================================

/// Uppercase digit numerals, indexed by digit value.
const DIGITS: [&str; 10] = [
    "零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖",
];

/// Positional units within a 4-digit group (units, tens, hundreds, thousands).
const UNITS: [&str; 4] = ["", "拾", "佰", "仟"];

/// Large units labelling each base-10000 group (units, 万, 亿).
const LARGE_UNITS: [&str; 3] = ["", "万", "亿"];

/// The zero numeral used for all elision markers.
const ZERO: &str = "零";

/// Yuan unit separating the integer and fractional renderings.
pub(crate) const YUAN: &str = "元";

/// Marker appended to whole amounts ("exactly", no jiao or fen).
const WHOLE: &str = "整";

// =============================================================================
// Group Rendering
// =============================================================================

/// Renders a single 4-digit group (0-9999). Zero renders to the empty
/// string; group-level zero handling is the caller's job.
///
/// Walks the four positions left to right, tracking whether the previous
/// position was zero: a zero digit emits one 零 only when the previous
/// position was non-zero and a later position is non-zero, which collapses
/// zero runs and drops leading/trailing ones.
///
/// ## Example
/// ```rust
/// use daxie_core::numeral::render_group;
///
/// assert_eq!(render_group(0), "");
/// assert_eq!(render_group(1001), "壹仟零壹");
/// assert_eq!(render_group(1010), "壹仟零壹拾");
/// assert_eq!(render_group(1100), "壹仟壹佰");
/// ```
pub fn render_group(n: u16) -> String {
    debug_assert!(n <= 9999, "group value out of range: {n}");

    if n == 0 {
        return String::new();
    }

    // Pad to four positions: thousands, hundreds, tens, units.
    let digits = [
        (n / 1000) as usize,
        (n / 100 % 10) as usize,
        (n / 10 % 10) as usize,
        (n % 10) as usize,
    ];

    let mut out = String::new();
    let mut last_was_zero = true;
    for (i, &digit) in digits.iter().enumerate() {
        if digit == 0 {
            let later_non_zero = digits[i + 1..].iter().any(|&d| d > 0);
            if !last_was_zero && later_non_zero {
                out.push_str(ZERO);
            }
            last_was_zero = true;
            continue;
        }

        out.push_str(DIGITS[digit]);
        out.push_str(UNITS[3 - i]);
        last_was_zero = false;
    }

    out
}

// =============================================================================
// Integer Rendering
// =============================================================================

/// Renders an integer yuan value (0 to 999999999999).
///
/// Splits the value into base-10000 groups and renders them highest first,
/// labelling each with its large unit. A single 零 bridges the gap whenever
/// a rendered group is followed (toward lower significance) by a skipped
/// all-zero group with non-zero groups below it, or by a group shorter than
/// four digits; the two cases collapse into one marker.
///
/// ## Example
/// ```rust
/// use daxie_core::numeral::render_integer;
///
/// assert_eq!(render_integer(0), "零");
/// assert_eq!(render_integer(10001), "壹万零壹");
/// assert_eq!(render_integer(100000000), "壹亿");
/// assert_eq!(render_integer(100050000), "壹亿零伍万");
/// ```
pub fn render_integer(n: u64) -> String {
    render_integer_with(n, |group, out| out.push_str(&render_group(group)))
}

/// The grouping traversal, parameterized over how a single group is
/// appended. [`render_integer`] computes each group; the cached converter
/// substitutes its precomputed table. Keeping the traversal in one place
/// guarantees both paths apply identical boundary-zero rules.
pub(crate) fn render_integer_with(n: u64, mut append_group: impl FnMut(u16, &mut String)) -> String {
    debug_assert!(n <= MAX_YUAN, "yuan value out of range: {n}");

    if n == 0 {
        return ZERO.to_string();
    }

    // Base-10000 groups, least significant first. Three groups cover the
    // whole domain (units, 万, 亿).
    let groups = [
        (n % 10_000) as u16,
        (n / 10_000 % 10_000) as u16,
        (n / 100_000_000) as u16,
    ];

    let mut out = String::new();
    let mut gap_pending = false;
    for i in (0..groups.len()).rev() {
        let group = groups[i];

        if group == 0 {
            // A skipped group only matters once something has been rendered
            // above it; whether it surfaces as 零 depends on the groups
            // below, resolved when (and if) one of them renders.
            if !out.is_empty() {
                gap_pending = true;
            }
            continue;
        }

        // One marker covers both gap kinds (skipped group, short group).
        if !out.is_empty() && (gap_pending || group < 1000) {
            out.push_str(ZERO);
        }

        append_group(group, &mut out);
        out.push_str(LARGE_UNITS[i]);
        gap_pending = false;
    }

    out
}

// =============================================================================
// Fraction Rendering
// =============================================================================

/// Renders the fractional part from its jiao and fen digits.
///
/// A whole amount renders to 整; a missing jiao before a non-zero fen is
/// marked with a placeholder 零 (100.05 → 壹佰元零伍分).
///
/// ## Example
/// ```rust
/// use daxie_core::numeral::render_fraction;
///
/// assert_eq!(render_fraction(0, 0), "整");
/// assert_eq!(render_fraction(2, 3), "贰角叁分");
/// assert_eq!(render_fraction(4, 0), "肆角");
/// assert_eq!(render_fraction(0, 5), "零伍分");
/// ```
pub fn render_fraction(jiao: u8, fen: u8) -> String {
    debug_assert!(jiao <= 9 && fen <= 9, "fraction digits out of range");

    if jiao == 0 && fen == 0 {
        return WHOLE.to_string();
    }

    let mut out = String::new();
    if jiao > 0 {
        out.push_str(DIGITS[jiao as usize]);
        out.push_str("角");
    } else if fen > 0 {
        out.push_str(ZERO);
    }

    if fen > 0 {
        out.push_str(DIGITS[fen as usize]);
        out.push_str("分");
    }

    out
}

// =============================================================================
// Composition
// =============================================================================

/// Composes the full rendering of a validated amount:
/// integer numerals + 元 + fraction numerals (or 整 for whole amounts).
pub fn compose(amount: &Amount) -> String {
    let mut out = render_integer(amount.yuan());
    out.push_str(YUAN);
    out.push_str(&render_fraction(amount.jiao(), amount.fen()));
    out
}

/// Converts a textual amount to its financial-numeral rendering.
///
/// This is the uncached entry point: validate, decompose, render. For
/// repeated conversions, [`crate::CachedConverter`] produces identical
/// output with precomputed group renderings and memoized results.
///
/// ## Example
/// ```rust
/// use daxie_core::convert;
///
/// assert_eq!(convert("1.23").unwrap(), "壹元贰角叁分");
/// assert_eq!(convert("0").unwrap(), "零元整");
/// assert!(convert("abc").is_err());
/// ```
pub fn convert(input: &str) -> ConvertResult<String> {
    let amount = Amount::parse(input)?;
    Ok(compose(&amount))
}

// =============================================================================
// Unit Tests
// =============================================================================
