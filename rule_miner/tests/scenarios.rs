//! Crate-level integration scenarios driving `rule_miner::run` directly
//! against small in-memory transaction fixtures (S1-S5 of the design doc).

use std::io::Write;
use std::path::PathBuf;

use rule_miner::config::Conf;
use rule_miner::quality::QualityVariant;

/// Writes `contents` to a fresh temp file and returns its path (the guard
/// keeping it alive is leaked into the returned tuple).
fn fixture(contents: &str) -> (tempfile::NamedTempFile, PathBuf) {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "{contents}").unwrap();
    let path = f.path().to_path_buf();
    (f, path)
}

/// The S1/S2 oracle: items 1..=4 with real counts 10, 8, 6, 4, nested so
/// that every transaction containing item `i+1` also contains item `i`.
fn nested_oracle() -> (tempfile::NamedTempFile, PathBuf) {
    let mut lines = String::new();
    for _ in 0..4 {
        lines.push_str("1 2 3 4\n");
    }
    for _ in 0..2 {
        lines.push_str("1 2 3\n");
    }
    for _ in 0..2 {
        lines.push_str("1 2\n");
    }
    for _ in 0..2 {
        lines.push_str("1\n");
    }
    fixture(&lines)
}

fn base_conf(tfile: PathBuf) -> Conf {
    Conf {
        tfile,
        eps: 10.0,
        eps_share: 0.5,
        c0: 0.8,
        lmax: 2,
        k: 1,
        seed: 42,
        non_private: false,
        quality: QualityVariant::Symmetric,
        print_table: false,
        trace_lattice: false,
        print_rules: false,
    }
}

#[test]
fn s1_one_private_round_over_four_items_saves_two_rules() {
    let (_guard, path) = nested_oracle();
    let conf = base_conf(path);
    let mut sink = std::io::sink();
    let summary = rule_miner::run(&conf, &mut sink).unwrap();

    assert_eq!(summary.numits, 4);
    assert_eq!(summary.rules_saved, 2);
    assert!(summary.min_confidence.unwrap() >= 0.0);
    assert!(summary.max_confidence.unwrap() <= 1.0);
}

#[test]
fn s2_non_private_baseline_exhausts_pairs_and_triples() {
    let (_guard, path) = nested_oracle();
    let mut conf = base_conf(path);
    conf.non_private = true;
    conf.lmax = 3;
    let mut sink = std::io::sink();
    let summary = rule_miner::run(&conf, &mut sink).unwrap();

    // 6 pairs * 2 rules + 4 triples * 6 rules = 36
    assert_eq!(summary.rules_saved, 36);
    assert!(summary.min_confidence.unwrap() >= 0.0);
    assert!(summary.max_confidence.unwrap() <= 1.0);
    assert!(summary.min_confidence.unwrap() <= summary.max_confidence.unwrap());
}

#[test]
fn s3_item_failing_the_noise_screen_is_never_selected() {
    // item 5 occurs exactly once against a crowd of high-count items, and
    // eps1 is tiny enough that its noisy count should fall under threshold
    // with overwhelming probability for every seed we try.
    let mut lines = String::new();
    for _ in 0..50 {
        lines.push_str("1 2 3 4\n");
    }
    lines.push_str("5\n");
    let (_guard, path) = fixture(&lines);

    for seed in 1..20u64 {
        let mut conf = base_conf(path.clone());
        conf.eps_share = 0.9;
        conf.eps = 0.2; // eps1 = 0.18, threshold = ln(10)/0.18 ~ 12.8
        conf.k = 20;
        conf.lmax = 2;
        conf.seed = seed;
        let mut sink = std::io::sink();
        let summary = rule_miner::run(&conf, &mut sink).unwrap();
        // item 5 (real_count 1) should fail the screen and never appear
        // among the `numits` survivors when the threshold this high.
        assert!(summary.numits <= 4, "seed {seed}: numits={}", summary.numits);
    }
}

#[test]
fn s4_large_epsilon_private_and_non_private_sets_agree() {
    let (_guard, path) = nested_oracle();

    let mut private_conf = base_conf(path.clone());
    private_conf.eps = 1e9;
    private_conf.eps_share = 0.01;
    private_conf.lmax = 2;
    private_conf.k = 6; // enough rounds to exhaust all 6 pairs
    let mut sink = std::io::sink();
    let private_summary = rule_miner::run(&private_conf, &mut sink).unwrap();

    let mut non_private_conf = base_conf(path);
    non_private_conf.non_private = true;
    non_private_conf.lmax = 2;
    let mut sink = std::io::sink();
    let non_private_summary = rule_miner::run(&non_private_conf, &mut sink).unwrap();

    // with eps this large the exponential mechanism is effectively
    // deterministic and, given enough rounds, the private miner visits
    // every pair the non-private miner does.
    assert_eq!(private_summary.rules_saved, non_private_summary.rules_saved);
    assert_eq!(private_summary.min_confidence, non_private_summary.min_confidence);
    assert_eq!(private_summary.max_confidence, non_private_summary.max_confidence);
}

#[test]
fn s5_identical_inputs_give_byte_identical_stdout() {
    // every line but the wall-clock one (which necessarily varies run to
    // run) must match exactly.
    let (_guard, path) = nested_oracle();
    let conf = base_conf(path);

    let mut first = Vec::new();
    let mut second = Vec::new();
    rule_miner::run(&conf, &mut first).unwrap();
    rule_miner::run(&conf, &mut second).unwrap();

    let strip_elapsed = |buf: &[u8]| -> String {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("elapsed:"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    assert_eq!(strip_elapsed(&first), strip_elapsed(&second));
}

#[test]
fn confidence_bounds_hold_across_many_seeds() {
    let (_guard, path) = nested_oracle();
    for seed in 0..30u64 {
        let mut conf = base_conf(path.clone());
        conf.k = 3;
        conf.seed = seed;
        let mut sink = std::io::sink();
        let summary = rule_miner::run(&conf, &mut sink).unwrap();
        if let (Some(lo), Some(hi)) = (summary.min_confidence, summary.max_confidence) {
            assert!(lo.is_finite() && hi.is_finite());
            assert!((0.0..=1.0).contains(&lo));
            assert!((0.0..=1.0).contains(&hi));
            assert!(lo <= hi);
        }
    }
}

#[test]
fn larger_epsilon_never_shrinks_numits_in_expectation() {
    // weak monotonicity: averaged over many seeds, a much larger eps1
    // should not produce a smaller mean numits than a tiny eps1, since
    // less noise means fewer items spuriously fall below the threshold.
    let (_guard, path) = nested_oracle();
    let seeds = 0..40u64;

    let mean_numits = |eps: f64| -> f64 {
        let total: usize = seeds
            .clone()
            .map(|seed| {
                let mut conf = base_conf(path.clone());
                conf.eps = eps;
                conf.eps_share = 0.5;
                conf.seed = seed;
                let mut sink = std::io::sink();
                rule_miner::run(&conf, &mut sink).unwrap().numits
            })
            .sum();
        total as f64 / seeds.clone().count() as f64
    };

    let small = mean_numits(0.2);
    let large = mean_numits(50.0);
    assert!(large >= small, "large-eps mean numits {large} < small-eps mean {small}");
}
