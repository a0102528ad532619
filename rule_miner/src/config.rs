//! Command-line surface: a straight positional invocation, no subcommand,
//! built with `clap`'s derive API the way the workspace's other benchmark
//! binaries build theirs (`mphf_benchmark::Conf`, `coding_benchmark::Conf`).

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::quality::QualityVariant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Mines a bounded set of high-confidence association rules under differential privacy.
pub struct Conf {
    /// Transaction file: one transaction per line, whitespace-separated 1-based item identifiers.
    pub tfile: PathBuf,

    /// Total privacy budget.
    pub eps: f64,

    /// Share of `eps` spent building the noisy item-frequency table, in `[0, 1)`.
    pub eps_share: f64,

    /// Target confidence the exponential mechanism favors.
    pub c0: f64,

    /// Maximum rule size (antecedent + consequent), in `[2, 7]`.
    #[arg(value_parser = clap::value_parser!(u8).range(2..=7))]
    pub lmax: u8,

    /// Number of rounds (and thus the maximum number of released itemsets).
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub k: u32,

    /// RNG seed.
    #[arg(default_value_t = 42)]
    pub seed: u64,

    /// Runs the exhaustive, non-private baseline miner instead of the exponential-mechanism one.
    #[arg(long)]
    pub non_private: bool,

    /// Quality function the exponential mechanism scores candidates with.
    #[arg(long, value_enum, default_value_t = QualityVariant::Symmetric)]
    pub quality: QualityVariant,

    /// Prints the sorted, thresholded item table before mining.
    #[arg(long)]
    pub print_table: bool,

    /// Traces each round's lattice enumeration and candidate scoring to stderr.
    #[arg(long)]
    pub trace_lattice: bool,

    /// Prints every registered rule (antecedent, consequent, confidence) as it is produced.
    #[arg(long)]
    pub print_rules: bool,
}

impl Conf {
    /// Validates the cross-field constraints `clap`'s static parsers cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(self.eps > 0.0) {
            return Err(Error::Config(format!("eps must be positive, got {}", self.eps)));
        }
        if !(0.0..1.0).contains(&self.eps_share) {
            return Err(Error::Budget(format!(
                "eps_share must lie in [0, 1), got {}",
                self.eps_share
            )));
        }
        if !(self.c0 > 0.0 && self.c0 <= 1.0) {
            return Err(Error::Config(format!("c0 must lie in (0, 1], got {}", self.c0)));
        }
        Ok(())
    }

    pub fn eps1(&self) -> f64 {
        self.eps * self.eps_share
    }

    pub fn eps2(&self) -> f64 {
        self.eps - self.eps1()
    }
}
