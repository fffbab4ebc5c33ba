//! Name collation
//!
//! Country names are ordered with the Unicode Collation Algorithm (root
//! collation, via `feruca`), so "Åland Islands" sorts among the A's instead of
//! after "Zimbabwe". Names the collator considers equal fall back to codepoint
//! order to keep the ordering total.

use std::cmp::Ordering;

use feruca::Collator;

/// Reusable name comparator; build one per sort pass
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            collator: Collator::default(),
        }
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b).then_with(|| a.cmp(b))
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison of two names
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}
