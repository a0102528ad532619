//! Error taxonomy for the CLI and its leaf collaborators.

use std::path::PathBuf;

/// Everything that can go wrong between parsing arguments and printing the final summary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A CLI argument was out of range or otherwise nonsensical.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The transaction file could not be read.
    #[error("could not read transaction file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the transaction file did not parse as a list of item identifiers.
    #[error("transaction file {path}, line {line}: '{token}' is not a valid item identifier")]
    OracleParse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// The transaction file contained no usable transactions or items.
    #[error("transaction file {path} contains no usable transactions")]
    EmptyOracle { path: PathBuf },

    /// `EPS_SHARE` fell outside `[0, 1)`, or some other budget-allocation constraint was violated.
    #[error("privacy budget misconfigured: {0}")]
    Budget(String),
}

pub type Result<T> = std::result::Result<T, Error>;
