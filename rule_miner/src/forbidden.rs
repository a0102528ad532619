//! The set of already-selected candidate vectors, kept so that the lattice
//! enumerator never revisits a combination a previous round already chose.

use std::collections::HashSet;

/// Append-only, single-writer set of sorted position tuples.
pub struct ForbiddenSet {
    packed: Vec<usize>,
    index: HashSet<Vec<usize>>,
}

impl ForbiddenSet {
    pub fn with_capacity(rounds: usize, lmax: usize) -> Self {
        Self {
            packed: Vec::with_capacity(rounds * lmax),
            index: HashSet::with_capacity(rounds),
        }
    }

    /// `positions` must already be sorted ascending.
    pub fn contains(&self, positions: &[usize]) -> bool {
        self.index.contains(positions)
    }

    /// Records a newly-selected candidate. `positions` must be sorted
    /// ascending; inserting the same tuple twice is a bug in the caller.
    pub fn insert(&mut self, positions: Vec<usize>) {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(!self.index.contains(&positions));
        self.packed.extend_from_slice(&positions);
        self.index.insert(positions);
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
