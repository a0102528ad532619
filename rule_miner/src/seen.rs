//! Tracks every itemset (size >= 2) that has already contributed rules to
//! the histogram this run, so overlapping selections never double-count.

use std::collections::HashSet;

/// Length-prefixed packed log of itemsets already expanded into rules.
pub struct SeenItemsetsLog {
    packed: Vec<u32>,
    index: HashSet<Vec<u32>>,
}

impl SeenItemsetsLog {
    pub fn with_capacity(k: usize, lmax: usize) -> Self {
        let cap = k * (lmax + 1) * (1usize << lmax);
        Self {
            packed: Vec::with_capacity(cap),
            index: HashSet::new(),
        }
    }

    /// Records `sorted_itemset` (must already be sorted ascending) if it is
    /// new. Returns `true` if this call added it, `false` if it was already
    /// present.
    pub fn insert(&mut self, sorted_itemset: Vec<u32>) -> bool {
        debug_assert!(sorted_itemset.windows(2).all(|w| w[0] < w[1]));
        if self.index.contains(&sorted_itemset) {
            return false;
        }
        self.packed.push(sorted_itemset.len() as u32);
        self.packed.extend_from_slice(&sorted_itemset);
        self.index.insert(sorted_itemset);
        true
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }
}
