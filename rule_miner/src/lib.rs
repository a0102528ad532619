//! Mines a bounded set of high-confidence association rules from a
//! transaction log under ε-differential privacy. See [`Conf`] for the
//! command-line surface and [`run`] for the library entry point.

pub mod config;
pub mod error;
pub mod forbidden;
pub mod histogram;
pub mod item_table;
pub mod lattice;
pub mod miner;
pub mod oracle;
pub mod quality;
pub mod rng;
pub mod rule_expander;
pub mod selector;
pub mod seen;

pub use config::Conf;
pub use error::{Error, Result};

use std::io::Write;
use std::time::Duration;

use histogram::ConfidenceHistogram;
use oracle::{FrequencyOracle, TransactionFile};
use rng::Rng;
use seen::SeenItemsetsLog;

/// The outcome of one run: how many rules were registered, their confidence
/// bounds, and the histogram they were accumulated into.
pub struct Summary {
    pub rules_saved: u64,
    pub min_confidence: Option<f64>,
    pub max_confidence: Option<f64>,
    pub histogram: ConfidenceHistogram,
    pub numits: usize,
    pub elapsed: Duration,
}

/// Runs the full pipeline against an already-validated [`Conf`], writing the
/// §6 stdout transcript to `out` and returning the final [`Summary`].
///
/// Callers that only need the summary (tests, embedders) may pass
/// `std::io::sink()`.
pub fn run(conf: &Conf, out: &mut impl Write) -> Result<Summary> {
    conf.validate()?;
    let started = std::time::Instant::now();

    let oracle = TransactionFile::read(&conf.tfile)?;
    let mut rng = Rng::new(conf.seed);

    writeln!(
        out,
        "{} mode: eps={} eps1={} eps2={} c0={} lmax={} k={} seed={}",
        if conf.non_private { "non-private" } else { "private" },
        conf.eps,
        conf.eps1(),
        conf.eps2(),
        conf.c0,
        conf.lmax,
        conf.k,
        conf.seed,
    )?;

    let (entries, numits) = item_table::build(&oracle, conf.eps1(), &mut rng, !conf.non_private);

    if conf.print_table {
        writeln!(out, "idx\trank\tvalue\treal_count\tnoisy_count")?;
        for (idx, e) in entries.iter().enumerate() {
            writeln!(
                out,
                "{idx}\t{:.3}\t{}\t{}\t{:.3}",
                idx as f64 / entries.len().max(1) as f64,
                e.value,
                e.real_count,
                e.noisy_count
            )?;
        }
    }

    let mut seen = SeenItemsetsLog::with_capacity(conf.k as usize, conf.lmax as usize);
    let mut histogram = ConfidenceHistogram::new();

    if conf.non_private {
        miner::run_non_private(
            &entries,
            numits,
            conf.lmax as usize,
            &oracle,
            &mut seen,
            &mut histogram,
            conf.print_rules,
        );
    } else {
        miner::run_private(
            &entries,
            numits,
            conf.lmax as usize,
            conf.k as usize,
            conf.c0,
            conf.eps2(),
            conf.quality,
            &oracle,
            &mut rng,
            &mut seen,
            &mut histogram,
            conf.trace_lattice,
            conf.print_rules,
        );
    }

    let rules_saved = histogram.get_all();
    writeln!(
        out,
        "Rules saved: {rules_saved}, minconf: {}, maxconf: {}",
        histogram.min().unwrap_or(0.0),
        histogram.max().unwrap_or(0.0),
    )?;

    let elapsed = started.elapsed();
    writeln!(out, "elapsed: {:.6}s", elapsed.as_secs_f64())?;
    histogram.dump(out, 1.0, "\t")?;

    Ok(Summary {
        rules_saved,
        min_confidence: histogram.min(),
        max_confidence: histogram.max(),
        histogram,
        numits,
        elapsed,
    })
}
