//! Expands a chosen itemset into its non-trivial subset rules, registering
//! each rule's confidence into the histogram exactly once per run.

use bitm::n_lowest_bits;

use crate::histogram::ConfidenceHistogram;
use crate::oracle::FrequencyOracle;
use crate::seen::SeenItemsetsLog;

/// Divides `a` by `b`, returning `0.0` instead of `NaN` when `b == 0`.
fn div_or_zero(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Renders an item-value list as `{v1,v2,...}` for the `--print-rules` trace.
fn format_itemset(values: &[u32]) -> String {
    let items: Vec<String> = values.iter().map(u32::to_string).collect();
    format!("{{{}}}", items.join(","))
}

/// Expands `ab_values` (item values of the chosen itemset, any size >= 2)
/// into rules and registers their confidences. Subsets already present in
/// `seen` are skipped, so overlapping selections across rounds (or across
/// combination sizes, in the non-private path) never double-count.
///
/// When `print_rules` is set, every newly-registered rule is printed to
/// stdout as `antecedent => consequent : confidence` as it is produced.
///
/// Returns the number of confidences newly registered.
pub fn expand_rule(
    ab_values: &[u32],
    oracle: &dyn FrequencyOracle,
    seen: &mut SeenItemsetsLog,
    histogram: &mut ConfidenceHistogram,
    print_rules: bool,
) -> usize {
    let size = ab_values.len();
    let mut registered = 0;

    // masks over `ab_values`: 1..2^size, i.e. 1..=n_lowest_bits(size)
    for mask in 1u32..=(n_lowest_bits(size as u8) as u32) {
        if mask.count_ones() < 2 {
            continue;
        }
        let subset: Vec<u32> = (0..size)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| ab_values[i])
            .collect();
        let mut sorted_subset = subset.clone();
        sorted_subset.sort_unstable();
        if !seen.insert(sorted_subset) {
            continue;
        }

        let a = subset.len();
        let support_ab = oracle.itemset_count(&subset);
        // strict, non-empty, non-full antecedents: 1..2^a - 1, i.e. 1..n_lowest_bits(a)
        for am in 1u32..(n_lowest_bits(a as u8) as u32) {
            let antecedent: Vec<u32> = (0..a)
                .filter(|i| am & (1 << i) != 0)
                .map(|i| subset[i])
                .collect();
            let support_a = oracle.itemset_count(&antecedent);
            let c = div_or_zero(support_ab as f64, support_a as f64);
            histogram.register(c);
            if print_rules {
                let consequent: Vec<u32> = subset
                    .iter()
                    .copied()
                    .filter(|v| !antecedent.contains(v))
                    .collect();
                println!(
                    "{} => {} : {c:.4}",
                    format_itemset(&antecedent),
                    format_itemset(&consequent)
                );
            }
            registered += 1;
        }
    }

    registered
}
