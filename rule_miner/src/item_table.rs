//! Builds the noisy-count item universe and thresholds it down to the
//! candidates the lattice enumerator is allowed to see.

use crate::oracle::FrequencyOracle;
use crate::rng::Rng;

/// 90%-of-noise screening constant: `ln(10)`.
pub const SCALE_FACTOR: f64 = std::f64::consts::LN_10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemEntry {
    /// 1-based item identifier.
    pub value: u32,
    pub real_count: u64,
    pub noisy_count: f64,
}

/// Builds the sorted, thresholded item table. Returns the entries (sorted
/// descending by `noisy_count`) and `numits`, the length of the usable
/// prefix.
pub fn build(
    oracle: &dyn FrequencyOracle,
    eps1: f64,
    rng: &mut Rng,
    private: bool,
) -> (Vec<ItemEntry>, usize) {
    let n = oracle.num_items();
    let mut entries: Vec<ItemEntry> = (0..n)
        .map(|i| {
            let real_count = oracle.item_count(i);
            let noisy_count = if private {
                rng.laplace(real_count as f64, eps1, 1.0).max(0.0)
            } else {
                real_count as f64
            };
            ItemEntry {
                value: (i + 1) as u32,
                real_count,
                noisy_count,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.noisy_count.partial_cmp(&a.noisy_count).unwrap());

    let threshold = SCALE_FACTOR / eps1;
    let numits = entries
        .iter()
        .position(|e| e.noisy_count < threshold)
        .unwrap_or(entries.len());

    (entries, numits)
}
