//! For each candidate vector offered this round, scores every corner
//! antecedent with the Gumbel-trick exponential mechanism and remembers the
//! best one seen so far.

use crate::item_table::ItemEntry;
use crate::oracle::FrequencyOracle;
use crate::quality::{quality, QualityVariant};
use crate::rng::Rng;

pub struct CandidateSelector {
    c0: f64,
    eps: f64,
    variant: QualityVariant,
    best_v: f64,
    best: Option<Vec<usize>>,
}

impl CandidateSelector {
    pub fn new(c0: f64, eps: f64, variant: QualityVariant) -> Self {
        Self {
            c0,
            eps,
            variant,
            best_v: f64::INFINITY,
            best: None,
        }
    }

    /// Scores every corner of `positions` (a candidate vector of universe
    /// positions) and updates the running best.
    pub fn consider(
        &mut self,
        positions: &[usize],
        entries: &[ItemEntry],
        oracle: &dyn FrequencyOracle,
        rng: &mut Rng,
    ) {
        let values: Vec<u32> = positions.iter().map(|&p| entries[p].value).collect();
        let support_ab = oracle.itemset_count(&values);

        for (corner, &pos) in positions.iter().enumerate() {
            let support_a = entries[pos].real_count;
            let q = quality(support_a, support_ab, self.c0, self.variant);
            let v = rng.gumbel_term() - self.eps * q / 2.0;
            if v < self.best_v {
                self.best_v = v;
                let mut rotated = positions.to_vec();
                rotated.rotate_left(corner);
                self.best = Some(rotated);
            }
        }
    }

    /// The Gumbel-trick score `v` of the current best candidate (`+inf` if
    /// nothing has been considered yet).
    pub fn best_v(&self) -> f64 {
        self.best_v
    }

    /// Consumes the selector, returning the winning candidate vector (with
    /// the elected antecedent's position first) if anything was ever
    /// considered.
    pub fn into_best(self) -> Option<Vec<usize>> {
        self.best
    }
}
