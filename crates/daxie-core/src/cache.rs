//! # Precomputation Cache
//!
//! A drop-in accelerated front for the numeral engine: identical output,
//! lower per-call cost for repeated conversions.
//!
//! ## Two Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CachedConverter                                    │
//! │                                                                         │
//! │  Layer 1: Group Table (eager, read-only)                               │
//! │  ├── every 4-digit group 0-9999, rendered at construction             │
//! │  ├── pure lookup table, NOT a cache: the domain is small and finite   │
//! │  └── no lock needed for concurrent readers                            │
//! │                                                                         │
//! │  Layer 2: Memo Maps (lazy, bounded)                                    │
//! │  ├── yuan value   → integer rendering   (LRU, default 10000 entries)  │
//! │  ├── (jiao, fen)  → fraction rendering  (LRU, default 100 entries)    │
//! │  └── Mutex-guarded; unbounded distinct inputs cannot exhaust memory   │
//! │                                                                         │
//! │  Validation is NEVER skipped: the cached path only skips re-rendering. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! `CachedConverter` is `Send + Sync` and takes `&self` everywhere. The
//! memo maps are locked only around lookup and insert, not around the
//! rendering itself, so two threads racing on a miss may both compute the
//! same value; that is harmless (rendering is pure) and keeps the critical
//! section minimal.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::amount::Amount;
use crate::error::ConvertResult;
use crate::numeral;

// =============================================================================
// Capacity Defaults
// =============================================================================

/// Default bound for the yuan-value memo map.
pub const DEFAULT_INTEGER_CAPACITY: usize = 10_000;

/// Default bound for the (jiao, fen) memo map. Only 100 distinct keys
/// exist, so at this capacity the map converges to a full table.
pub const DEFAULT_FRACTION_CAPACITY: usize = 100;

// =============================================================================
// Cached Converter
// =============================================================================

/// The precomputation/memoization layer around the numeral engine.
///
/// Construct once, share by reference. Output is bit-identical to the
/// uncached [`crate::convert`] for every input, errors included.
///
/// ## Example
/// ```rust
/// use daxie_core::CachedConverter;
///
/// let converter = CachedConverter::new();
/// assert_eq!(converter.convert("1.23").unwrap(), "壹元贰角叁分");
/// assert_eq!(converter.convert("1.23").unwrap(), "壹元贰角叁分"); // memo hit
/// ```
pub struct CachedConverter {
    /// Rendering of every group value 0-9999. Immutable after construction.
    groups: Vec<String>,

    /// Memoized `render_integer` results, keyed by the full yuan value.
    integers: Mutex<LruCache<u64, String>>,

    /// Memoized `render_fraction` results, keyed by (jiao, fen).
    fractions: Mutex<LruCache<(u8, u8), String>>,
}

impl CachedConverter {
    /// Creates a converter with the default memo capacities.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INTEGER_CAPACITY, DEFAULT_FRACTION_CAPACITY)
    }

    /// Creates a converter with explicit memo capacities.
    ///
    /// Eagerly renders all 10,000 group values up front; the memo maps
    /// start empty and fill lazily. A zero capacity is bumped to one
    /// (an LRU of zero slots has no meaning).
    pub fn with_capacity(integer_capacity: usize, fraction_capacity: usize) -> Self {
        let groups = (0..=9999u16).map(numeral::render_group).collect();

        let integer_capacity = NonZeroUsize::new(integer_capacity).unwrap_or(NonZeroUsize::MIN);
        let fraction_capacity = NonZeroUsize::new(fraction_capacity).unwrap_or(NonZeroUsize::MIN);

        CachedConverter {
            groups,
            integers: Mutex::new(LruCache::new(integer_capacity)),
            fractions: Mutex::new(LruCache::new(fraction_capacity)),
        }
    }

    /// Converts a textual amount, reusing memoized renderings.
    ///
    /// Validation and decomposition always run; only the two rendering
    /// calls are intercepted.
    pub fn convert(&self, input: &str) -> ConvertResult<String> {
        let amount = Amount::parse(input)?;
        Ok(self.compose(&amount))
    }

    /// Composes the rendering of an already-validated amount.
    pub fn compose(&self, amount: &Amount) -> String {
        let mut out = self.render_integer(amount.yuan());
        out.push_str(numeral::YUAN);
        out.push_str(&self.render_fraction(amount.jiao(), amount.fen()));
        out
    }

    /// Memoized integer rendering. Misses walk the same grouping traversal
    /// as the plain engine, but splice in precomputed group strings.
    pub fn render_integer(&self, n: u64) -> String {
        if let Some(hit) = self.integers.lock().get(&n) {
            return hit.clone();
        }

        let rendered =
            numeral::render_integer_with(n, |group, out| out.push_str(&self.groups[group as usize]));

        self.integers.lock().put(n, rendered.clone());
        rendered
    }

    /// Memoized fraction rendering.
    pub fn render_fraction(&self, jiao: u8, fen: u8) -> String {
        if let Some(hit) = self.fractions.lock().get(&(jiao, fen)) {
            return hit.clone();
        }

        let rendered = numeral::render_fraction(jiao, fen);
        self.fractions.lock().put((jiao, fen), rendered.clone());
        rendered
    }

    /// The precomputed rendering of a single group value (0-9999).
    pub fn group(&self, n: u16) -> &str {
        &self.groups[n as usize]
    }
}

impl Default for CachedConverter {
    fn default() -> Self {
        CachedConverter::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
