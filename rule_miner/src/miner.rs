//! The two mining strategies: `PrivateMiner` (k rounds of exponential-
//! mechanism selection over a shrinking forbidden set) and `NonPrivateMiner`
//! (exhaustive enumeration, for baseline comparison with `--non-private`).

use crate::forbidden::ForbiddenSet;
use crate::histogram::ConfidenceHistogram;
use crate::item_table::ItemEntry;
use crate::lattice::LatticeEnumerator;
use crate::oracle::FrequencyOracle;
use crate::quality::{self, QualityVariant};
use crate::rng::Rng;
use crate::rule_expander::expand_rule;
use crate::selector::CandidateSelector;
use crate::seen::SeenItemsetsLog;

/// Runs `k` rounds of private selection. Each round elects one candidate of
/// size `lmax` via the exponential mechanism, expands it into rules, and
/// forbids it (and its rotations) from future rounds.
///
/// When `trace` is set, each round's elected itemset and score are written
/// to stderr as they are chosen.
///
/// Returns the number of rounds that actually elected a candidate (fewer
/// than `k` once the universe of unforbidden combinations is exhausted).
#[allow(clippy::too_many_arguments)]
pub fn run_private(
    entries: &[ItemEntry],
    numits: usize,
    lmax: usize,
    k: usize,
    c0: f64,
    residual_eps: f64,
    variant: QualityVariant,
    oracle: &dyn FrequencyOracle,
    rng: &mut Rng,
    seen: &mut SeenItemsetsLog,
    histogram: &mut ConfidenceHistogram,
    trace: bool,
    print_rules: bool,
) -> usize {
    let mut forbidden = ForbiddenSet::with_capacity(k, lmax);
    let mut rounds_completed = 0;
    // sequential composition across k rounds must total `residual_eps`; the
    // exponential mechanism is (eps_per_round)-DP only once the quality
    // function's own sensitivity Δq has been divided out (spec.md §4.3).
    let eps_per_round = residual_eps / k as f64 / quality::sensitivity(c0);

    for round in 0..k {
        let mut lattice = LatticeEnumerator::new(numits, lmax, &forbidden);
        let mut selector = CandidateSelector::new(c0, eps_per_round, variant);

        while let Some(positions) = lattice.current() {
            selector.consider(positions, entries, oracle, rng);
            lattice.advance(&forbidden);
        }

        let best_v = selector.best_v();
        let Some(winner) = selector.into_best() else {
            break;
        };

        let values: Vec<u32> = winner.iter().map(|&p| entries[p].value).collect();
        if trace {
            eprintln!("round {round}: chose {values:?}, v={best_v:.6}");
        }
        expand_rule(&values, oracle, seen, histogram, print_rules);

        let mut sorted_winner = winner;
        sorted_winner.sort_unstable();
        forbidden.insert(sorted_winner);
        rounds_completed += 1;
    }

    rounds_completed
}

/// Exhaustively enumerates every combination of the top `numits` items, for
/// every size from 2 to `lmax`, expanding each into rules. A single shared
/// `SeenItemsetsLog` spans the whole run: a combination that recurs as a
/// subset of a larger one (or was already visited at a smaller `clen`) is
/// expanded exactly once.
pub fn run_non_private(
    entries: &[ItemEntry],
    numits: usize,
    lmax: usize,
    oracle: &dyn FrequencyOracle,
    seen: &mut SeenItemsetsLog,
    histogram: &mut ConfidenceHistogram,
    print_rules: bool,
) {
    let forbidden = ForbiddenSet::with_capacity(0, lmax);
    for clen in 2..=lmax {
        let mut lattice = LatticeEnumerator::new(numits, clen, &forbidden);
        while let Some(positions) = lattice.current() {
            let values: Vec<u32> = positions.iter().map(|&p| entries[p].value).collect();
            expand_rule(&values, oracle, seen, histogram, print_rules);
            lattice.advance(&forbidden);
        }
    }
}
