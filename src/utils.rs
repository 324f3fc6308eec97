//! Utility functions and types for `HashTable`

use crate::{HashTable, TableConfig, TableError};

/// Summary of how entries are spread across the buckets of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets
    pub buckets: usize,
    /// Buckets holding no entry
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Mean chain length over the non-empty buckets, 0 for an empty table
    pub mean_chain: f64,
}

impl ChainStats {
    /// Builds the summary from the length of every bucket.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_lengths(lengths: impl Iterator<Item = usize>) -> Self {
        let mut stats = Self { buckets: 0, empty_buckets: 0, longest_chain: 0, mean_chain: 0.0 };
        let mut entries: usize = 0;
        for length in lengths {
            stats.buckets = stats.buckets.saturating_add(1);
            if length == 0 {
                stats.empty_buckets = stats.empty_buckets.saturating_add(1);
            }
            stats.longest_chain = stats.longest_chain.max(length);
            entries = entries.saturating_add(length);
        }

        let occupied = stats.buckets.saturating_sub(stats.empty_buckets);
        if occupied > 0 {
            stats.mean_chain = entries as f64 / occupied as f64;
        }
        stats
    }
}

/// Creates a `HashTable` from an iterator of key-value pairs
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// The construction errors of [`TableConfig::validate`], plus the errors of [`HashTable::set`].
pub fn from_pairs<K, V, I>(config: TableConfig, pairs: I) -> Result<HashTable<V>, TableError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::with_config(config)?;

    for (key, value) in pairs {
        table.set(key, value)?;
    }

    Ok(table)
}
