use std::{iter::FusedIterator, mem, slice};

use log::{debug, warn};

use crate::{MapConfig, MapError, bucket_index};

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// The chain of entries whose keys hash to the same index
type Bucket<V> = Vec<Entry<V>>;

/// A string-keyed hash table resolving collisions by separate chaining.
///
/// Each key is placed with [`bucket_index`] into one of `capacity` buckets. A bucket is only
/// allocated once a key hashes into it. When an insertion brings `len / capacity` up to the
/// configured load factor, the bucket count doubles and every entry is rehashed.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// Bucket slots, `None` until a key first hashes into them
    buckets: Vec<Option<Bucket<V>>>,
    /// Current number of entries across all buckets
    size: usize,
    /// Ratio of `size / capacity` that triggers growth
    load_factor: f64,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Allocates `capacity` empty bucket slots
fn empty_buckets<V>(capacity: usize) -> Vec<Option<Bucket<V>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty map with 16 buckets and a load factor of 0.75
    #[must_use]
    pub fn new() -> Self {
        let config = MapConfig::default();
        Self::from_valid_config(config)
    }

    /// Creates an empty map with `capacity` buckets and the default load factor.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, MapError> {
        Self::with_config(MapConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty map from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is 0 or the load factor lies outside (0, 1].
    pub fn with_config(config: MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds the map from parameters that already passed validation
    fn from_valid_config(config: MapConfig) -> Self {
        debug!(
            "creating chained map: capacity={}, load_factor={}",
            config.initial_capacity, config.load_factor
        );
        Self {
            buckets: empty_buckets(config.initial_capacity),
            size: 0,
            load_factor: config.load_factor,
        }
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// Returns the replaced value when the key was already present; in that case the length
    /// is unchanged and no growth check runs. A fresh insertion may double the capacity, at
    /// most once per call.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let replaced = self.place(key.into(), value);

        if replaced.is_none() && self.is_over_threshold() {
            self.grow();
        }

        replaced
    }

    /// Upserts into the current bucket array without checking the load.
    ///
    /// Shared by `set` and `grow`, so duplicate detection and size accounting live here only.
    fn place(&mut self, key: String, value: V) -> Option<V> {
        let bucket = self.slot_mut(&key).get_or_insert_with(Vec::new);

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Returns the slot `key` hashes to under the current capacity
    #[allow(clippy::indexing_slicing)]
    fn slot_mut(&mut self, key: &str) -> &mut Option<Bucket<V>> {
        // bucket_index is always below the bucket count, which is never 0.
        let index = bucket_index(key, self.buckets.len());
        &mut self.buckets[index]
    }

    /// Returns the bucket for `key`, if one was ever allocated
    fn bucket(&self, key: &str) -> Option<&Bucket<V>> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets.get(index)?.as_ref()
    }

    /// Mutable counterpart of [`Self::bucket`]
    fn bucket_mut(&mut self, key: &str) -> Option<&mut Bucket<V>> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets.get_mut(index)?.as_mut()
    }

    /// Whether the current load has reached the growth threshold
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn is_over_threshold(&self) -> bool {
        self.size as f64 / self.buckets.len() as f64 >= self.load_factor
    }

    /// Doubles the bucket count and rehashes every entry into the new array.
    ///
    /// Entries go back through `place`, never through `set`, so a rehash cannot start
    /// another one.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let Some(new_capacity) = old_capacity.checked_mul(2) else {
            warn!("chained map cannot grow past {old_capacity} buckets, keeping current layout");
            return;
        };

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;

        for entry in old_buckets.into_iter().flatten().flatten() {
            let replaced = self.place(entry.key, entry.value);
            debug_assert!(replaced.is_none(), "keys are unique before a rehash");
        }

        debug!(
            "chained map grew from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.size
        );
    }

    /// Returns a reference to the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is present
    #[must_use]
    #[doc(alias = "contains_key")]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning whether an entry was removed.
    ///
    /// The capacity never shrinks.
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back its value
    pub fn take(&mut self, key: &str) -> Option<V> {
        let bucket = self.bucket_mut(key)?;
        let position = bucket.iter().position(|entry| entry.key == key)?;

        // Vec::remove keeps the remaining chain in insertion order.
        let entry = bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Returns the number of entries
    #[must_use]
    #[doc(alias = "length")]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every entry while keeping the current bucket count and load factor
    pub fn clear(&mut self) {
        debug!("clearing chained map: {} entries, {} buckets", self.size, self.buckets.len());
        self.buckets = empty_buckets(self.buckets.len());
        self.size = 0;
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn current_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the keys in bucket order
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Returns the values in bucket order
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Returns the key-value pairs in bucket order
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    /// Returns an iterator over the key-value pairs.
    ///
    /// Buckets are visited by index and each chain in insertion order. The order is stable
    /// as long as the capacity does not change.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: slice::Iter::default(), remaining: self.size }
    }

    /// Yields the length of every bucket slot in index order, 0 for unallocated ones
    pub(crate) fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|slot| slot.as_ref().map_or(0, Vec::len))
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [`ChainedHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Bucket slots not yet visited
    buckets: slice::Iter<'a, Option<Bucket<V>>>,
    /// Rest of the chain currently being walked
    chain: slice::Iter<'a, Entry<V>>,
    /// Entries left to yield
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref().unwrap_or_default().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
