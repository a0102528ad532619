//! The exponential-mechanism quality function scored against a target
//! confidence `c0`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum QualityVariant {
    /// Penalizes distance from `c0` in either direction; `q == 0` exactly at
    /// `c0`.
    Symmetric,
    /// Penalizes confidence below `c0` only; `q == 0` for any confidence at
    /// or above `c0`.
    AsymmetricClipped,
}

/// `raw = support_ab/c0 - support_a`; positive when confidence exceeds `c0`.
///
/// Quality sensitivity is `Δq = 1 + 1/c0` in count-units for both variants:
/// clipping (by `abs` or by `min(_, 0.0)`) never increases the Lipschitz
/// constant of a 1-Lipschitz function of `support_a` and `support_ab`.
pub fn quality(support_a: u64, support_ab: u64, c0: f64, variant: QualityVariant) -> f64 {
    let raw = support_ab as f64 / c0 - support_a as f64;
    match variant {
        QualityVariant::Symmetric => -raw.abs(),
        QualityVariant::AsymmetricClipped => raw.min(0.0),
    }
}

/// Quality sensitivity `Δq = 1 + 1/c0`, in the count-units `quality` uses.
pub fn sensitivity(c0: f64) -> f64 {
    1.0 + 1.0 / c0
}
