//! The frequency oracle: a read-only, exact answerer of item and itemset
//! counts, built once from a transaction file.
//!
//! This is a leaf collaborator, not part of the private mining core: the
//! core only ever calls [`FrequencyOracle::item_count`] and
//! [`FrequencyOracle::itemset_count`], and nothing about the storage
//! strategy below is observable through that contract.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Exact counts of single items and itemsets over a fixed transaction set.
pub trait FrequencyOracle {
    /// Number of distinct items in the universe.
    fn num_items(&self) -> usize;

    /// Number of transactions containing the item at 0-based position `i`.
    fn item_count(&self, i: usize) -> u64;

    /// Number of transactions containing every item named in `values`
    /// (1-based item identifiers).
    fn itemset_count(&self, values: &[u32]) -> u64;
}

/// A transaction log held in memory as the per-transaction sets of item
/// positions, plus a precomputed table of single-item counts.
pub struct TransactionFile {
    /// Each transaction, as its sorted, distinct 0-based item positions.
    transactions: Vec<Box<[u32]>>,
    item_counts: Vec<u64>,
}

impl TransactionFile {
    /// Reads a transaction file: one transaction per line, items as
    /// whitespace-separated 1-based identifiers; blank lines are skipped.
    /// Items are renumbered 0-based in order of first appearance, matching
    /// the oracle contract's "0-based position in universe-build order".
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let file = std::fs::File::open(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut positions: HashMap<u32, u32> = HashMap::new();
        let mut transactions: Vec<Box<[u32]>> = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut items = Vec::new();
            for token in line.split_whitespace() {
                let id: u32 = token.parse().map_err(|_| Error::OracleParse {
                    path: path.clone(),
                    line: line_no + 1,
                    token: token.to_string(),
                })?;
                let next = positions.len() as u32;
                let pos = *positions.entry(id).or_insert(next);
                items.push(pos);
            }
            items.sort_unstable();
            items.dedup();
            transactions.push(items.into_boxed_slice());
        }

        if transactions.is_empty() || positions.is_empty() {
            return Err(Error::EmptyOracle { path });
        }

        let n = positions.len();
        let mut item_counts = vec![0u64; n];
        for tx in &transactions {
            for &pos in tx.iter() {
                item_counts[pos as usize] += 1;
            }
        }

        Ok(Self {
            transactions,
            item_counts,
        })
    }
}

impl FrequencyOracle for TransactionFile {
    fn num_items(&self) -> usize {
        self.item_counts.len()
    }

    fn item_count(&self, i: usize) -> u64 {
        self.item_counts[i]
    }

    fn itemset_count(&self, values: &[u32]) -> u64 {
        if values.is_empty() {
            return self.transactions.len() as u64;
        }
        let mut needle: Vec<u32> = values.iter().map(|&v| v - 1).collect();
        needle.sort_unstable();
        self.transactions
            .iter()
            .filter(|tx| is_superset(tx, &needle))
            .count() as u64
    }
}

/// True if the sorted slice `haystack` contains every element of the sorted
/// slice `needle`.
fn is_superset(haystack: &[u32], needle: &[u32]) -> bool {
    let mut h = haystack.iter();
    'outer: for &n in needle {
        for &x in h.by_ref() {
            if x == n {
                continue 'outer;
            }
            if x > n {
                return false;
            }
        }
        return false;
    }
    true
}
