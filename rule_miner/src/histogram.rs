//! Accumulates registered rule confidences into fixed-width bins over
//! `[0, 1]` and dumps them as a small table, in the style of the `Display`
//! impls the workspace's other benchmark crates use for their own results
//! (`mphf_benchmark::stats::BenchmarkResult`).

use std::io::{self, Write};

const DEFAULT_BINS: usize = 20;

pub struct ConfidenceHistogram {
    bins: Vec<u64>,
    min: f64,
    max: f64,
}

impl ConfidenceHistogram {
    pub fn new() -> Self {
        Self::with_bins(DEFAULT_BINS)
    }

    pub fn with_bins(bins: usize) -> Self {
        assert!(bins > 0, "a histogram needs at least one bin");
        Self {
            bins: vec![0; bins],
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Registers a confidence value. `c` must be finite and within `[0, 1]`;
    /// the mining pipeline never passes anything else (see `div_or_zero`).
    pub fn register(&mut self, c: f64) {
        debug_assert!(c.is_finite() && (0.0..=1.0).contains(&c), "confidence {c} out of range");
        let bins = self.bins.len();
        let idx = ((c * bins as f64) as usize).min(bins - 1);
        self.bins[idx] += 1;
        if c < self.min {
            self.min = c;
        }
        if c > self.max {
            self.max = c;
        }
    }

    pub fn get_all(&self) -> u64 {
        self.bins.iter().sum()
    }

    pub fn min(&self) -> Option<f64> {
        (self.get_all() > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.get_all() > 0).then_some(self.max)
    }

    /// Writes one line per non-empty bin: `{prefix}{lo:.2}-{hi:.2}: {count}`,
    /// with counts scaled by `scale` (pass `1.0` for raw counts).
    pub fn dump(&self, out: &mut impl Write, scale: f64, prefix: &str) -> io::Result<()> {
        let bins = self.bins.len();
        for (i, &count) in self.bins.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let lo = i as f64 / bins as f64;
            let hi = (i + 1) as f64 / bins as f64;
            writeln!(out, "{prefix}{lo:.2}-{hi:.2}: {:.0}", count as f64 * scale)?;
        }
        Ok(())
    }
}

impl Default for ConfidenceHistogram {
    fn default() -> Self {
        Self::new()
    }
}
