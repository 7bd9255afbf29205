//! Locale-aware text ordering for table cells.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring:
//! accents and case are secondary and tertiary differences, so `"Étoile"`
//! sorts among the `e`s and `"apple"` sits just before `"Apple"`. Ties left
//! after all levels fall back to code point order, so the order is total.

use std::cmp::Ordering;

use feruca::Collator;

/// Reusable collator for comparing many cell texts, e.g. within one sort.
pub struct TextCollator {
    inner: Collator,
}

impl TextCollator {
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    /// Compare two cell texts for ascending display order.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

impl Default for TextCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two cell texts for ascending display order.
///
/// Builds a fresh collator; prefer [`TextCollator`] when comparing in a loop.
pub fn collate(a: &str, b: &str) -> Ordering {
    TextCollator::new().compare(a, b)
}
