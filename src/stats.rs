//! Bucket distribution statistics for `ChainedHashMap`

use crate::ChainedHashMap;

/// Snapshot of how entries are spread over the buckets of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of entries
    pub size: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Buckets holding no entry, allocated or not
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

impl BucketStats {
    /// Folds a sequence of chain lengths into a snapshot
    fn from_chain_lengths(lengths: impl Iterator<Item = usize>) -> Self {
        lengths.fold(Self::default(), |mut stats, len| {
            stats.capacity = stats.capacity.saturating_add(1);
            stats.size = stats.size.saturating_add(len);
            if len == 0 {
                stats.empty_buckets = stats.empty_buckets.saturating_add(1);
            } else {
                stats.occupied_buckets = stats.occupied_buckets.saturating_add(1);
            }
            stats.longest_chain = stats.longest_chain.max(len);
            stats
        })
    }

    /// Average chain length over occupied buckets, 0 for an empty map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn average_chain_len(&self) -> f64 {
        if self.occupied_buckets == 0 {
            return 0.0;
        }
        self.size as f64 / self.occupied_buckets as f64
    }
}

impl<V> ChainedHashMap<V> {
    /// Collects collision statistics over the current bucket array.
    ///
    /// ```rust
    /// use chainmap::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.set("apple", 1);
    /// map.set("j", 2); // shares bucket 10 with "apple"
    ///
    /// let stats = map.stats();
    /// assert_eq!(stats.occupied_buckets, 1);
    /// assert_eq!(stats.longest_chain, 2);
    /// ```
    #[must_use]
    pub fn stats(&self) -> BucketStats {
        BucketStats::from_chain_lengths(self.chain_lengths())
    }
}
