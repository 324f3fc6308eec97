use std::{any::Any, iter::Flatten, mem, num::NonZeroUsize, slice};

use log::{debug, trace};

use crate::{TableConfig, TableError, hashing::polynomial_index, utils::ChainStats};

/// A key-value pair stored in a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// A chain of entries sharing a bucket index, kept in insertion order
type Bucket<V> = Vec<Entry<V>>;

/// Allocates `capacity` empty buckets.
fn empty_buckets<V>(capacity: NonZeroUsize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity.get());
    buckets.resize_with(capacity.get(), Vec::new);
    buckets
}

/// A string-keyed hash table with chained buckets.
///
/// Keys are addressed by a polynomial rolling hash reduced modulo the current bucket count.
/// Colliding keys share a bucket and are kept in insertion order. Before an insertion that
/// would push `len / capacity` above the configured load factor, the bucket array doubles and
/// every entry is rehashed.
///
/// Note: This implementation is not thread-safe. Serialize mutation externally if a table is
/// shared between threads.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// The buckets storing the key-value pairs
    buckets: Vec<Bucket<V>>,
    /// Current number of entries in the hash table
    size: usize,
    /// Threshold of `size / capacity` above which the table grows
    load_factor: f64,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self {
            buckets: empty_buckets(NonZeroUsize::new(crate::DEFAULT_INITIAL_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN)),
            size: 0,
            load_factor: crate::DEFAULT_LOAD_FACTOR,
        }
    }
}

impl<V> TryFrom<TableConfig> for HashTable<V> {
    type Error = TableError;

    fn try_from(config: TableConfig) -> Result<Self, Self::Error> {
        Self::with_config(config)
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with `initial_capacity` buckets.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidConstructionArgument`] if `initial_capacity` is zero or
    /// `load_factor` is not a number in `(0, 1]`.
    pub fn new(initial_capacity: usize, load_factor: f64) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new(initial_capacity, load_factor))
    }

    /// Creates an empty table from a [`TableConfig`].
    ///
    /// # Errors
    ///
    /// See [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.initial_capacity).ok_or_else(|| {
            TableError::InvalidConstructionArgument(
                "initial capacity must be a positive number".to_string(),
            )
        })?;

        Ok(Self { buckets: empty_buckets(capacity), size: 0, load_factor: config.load_factor })
    }

    /// Current bucket count as a non-zero value.
    fn bucket_count(&self) -> NonZeroUsize {
        // Every constructor, `resize` and `clear` allocate at least one bucket.
        NonZeroUsize::new(self.buckets.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Computes the bucket index of `key` under the current capacity.
    ///
    /// The same key may land in a different bucket once the table has been resized.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] if the index falls outside of the bucket array, which
    /// indicates a hashing defect.
    pub fn hash(&self, key: &str) -> Result<usize, TableError> {
        let bucket_count = self.buckets.len();
        let index = polynomial_index(key, self.bucket_count());
        if index >= bucket_count {
            return Err(TableError::IndexOutOfRange { index, bucket_count });
        }
        Ok(index)
    }

    /// Returns the bucket `key` belongs to
    fn bucket(&self, key: &str) -> Result<&Bucket<V>, TableError> {
        let index = self.hash(key)?;
        let bucket_count = self.buckets.len();
        self.buckets.get(index).ok_or(TableError::IndexOutOfRange { index, bucket_count })
    }

    /// Returns the bucket `key` belongs to, mutably
    fn bucket_mut(&mut self, key: &str) -> Result<&mut Bucket<V>, TableError> {
        let index = self.hash(key)?;
        let bucket_count = self.buckets.len();
        self.buckets.get_mut(index).ok_or(TableError::IndexOutOfRange { index, bucket_count })
    }

    /// Whether holding `entries` entries would exceed the load factor
    #[allow(clippy::cast_precision_loss)]
    fn exceeds_load(&self, entries: usize) -> bool {
        entries as f64 / self.buckets.len() as f64 > self.load_factor
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Overwriting an existing key never resizes. A new key first grows the table if the
    /// insertion would push the load above the configured load factor.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] on a hashing defect, [`TableError::CapacityOverflow`]
    /// if the table cannot grow any further.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, TableError> {
        let key = key.into();
        if let Some(slot) = self.get_mut(&key)? {
            return Ok(Some(mem::replace(slot, value)));
        }

        // A single doubling always suffices once `capacity * load_factor >= 1`. Smaller tables
        // may need a few doublings before the first entries fit.
        while self.exceeds_load(self.size.saturating_add(1)) {
            self.resize()?;
        }

        self.bucket_mut(&key)?.push(Entry { key, value });
        self.size = self.size.saturating_add(1);
        Ok(None)
    }

    /// Doubles the bucket count and rehashes every entry under the new capacity.
    ///
    /// Entries are moved straight into the new buckets without going through [`Self::set`],
    /// so rehashing cannot trigger a nested resize. The new bucket array only replaces the old
    /// one after every entry has been addressed.
    ///
    /// # Errors
    ///
    /// [`TableError::CapacityOverflow`] if the bucket count cannot be doubled,
    /// [`TableError::IndexOutOfRange`] on a hashing defect. The table is left untouched in
    /// both cases.
    pub fn resize(&mut self) -> Result<(), TableError> {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .and_then(NonZeroUsize::new)
            .ok_or(TableError::CapacityOverflow { capacity: old_capacity })?;

        let targets = self
            .buckets
            .iter()
            .flatten()
            .map(|entry| {
                let index = polynomial_index(&entry.key, new_capacity);
                if index < new_capacity.get() {
                    Ok(index)
                } else {
                    Err(TableError::IndexOutOfRange { index, bucket_count: new_capacity.get() })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut buckets = empty_buckets(new_capacity);
        let old_buckets = mem::take(&mut self.buckets);
        for (entry, index) in old_buckets.into_iter().flatten().zip(targets) {
            if let Some(bucket) = buckets.get_mut(index) {
                bucket.push(entry);
            }
        }
        self.buckets = buckets;
        self.size = self.buckets.iter().map(Vec::len).sum();

        debug!(
            "resized hash table from {old_capacity} to {new_capacity} buckets, rehashed {} entries",
            self.size
        );
        Ok(())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] on a hashing defect.
    pub fn get(&self, key: &str) -> Result<Option<&V>, TableError> {
        Ok(self.bucket(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value))
    }

    /// Gets a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] on a hashing defect.
    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>, TableError> {
        Ok(self
            .bucket_mut(key)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value))
    }

    /// Returns true if `key` is stored in the table.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] on a hashing defect.
    pub fn has(&self, key: &str) -> Result<bool, TableError> {
        Ok(self.bucket(key)?.iter().any(|entry| entry.key == key))
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// The remaining entries of the bucket keep their relative order.
    ///
    /// # Errors
    ///
    /// [`TableError::IndexOutOfRange`] on a hashing defect.
    pub fn remove(&mut self, key: &str) -> Result<bool, TableError> {
        let bucket = self.bucket_mut(key)?;
        let Some(position) = bucket.iter().position(|entry| entry.key == key) else {
            return Ok(false);
        };
        bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        Ok(true)
    }

    /// Returns the number of entries in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured load factor threshold
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn current_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Drops every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        trace!("clearing {} entries from {} buckets", self.size, self.buckets.len());
        self.buckets = empty_buckets(self.bucket_count());
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { entries: self.buckets.iter().flatten() }
    }

    /// Snapshot of every key, in bucket order and insertion order within a bucket.
    ///
    /// Keys from different buckets appear in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Snapshot of every value, ordered like [`Self::keys`].
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Snapshot of every key-value pair, ordered like [`Self::keys`].
    #[must_use]
    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }

    /// Summarizes how entries are spread across buckets.
    #[must_use]
    pub fn chain_stats(&self) -> ChainStats {
        ChainStats::from_lengths(self.buckets.iter().map(Vec::len))
    }

    /// Like [`Self::set`], for a key whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidKeyType`] unless `key` is a `String` or a `&'static str`, plus the
    /// errors of [`Self::set`].
    pub fn try_set(&mut self, key: &dyn Any, value: V) -> Result<Option<V>, TableError> {
        let key = key_str(key)?;
        self.set(key, value)
    }

    /// Like [`Self::get`], for a key whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidKeyType`] unless `key` is a `String` or a `&'static str`.
    pub fn try_get(&self, key: &dyn Any) -> Result<Option<&V>, TableError> {
        self.get(key_str(key)?)
    }

    /// Like [`Self::has`], for a key whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidKeyType`] unless `key` is a `String` or a `&'static str`.
    pub fn try_has(&self, key: &dyn Any) -> Result<bool, TableError> {
        self.has(key_str(key)?)
    }

    /// Like [`Self::remove`], for a key whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidKeyType`] unless `key` is a `String` or a `&'static str`.
    pub fn try_remove(&mut self, key: &dyn Any) -> Result<bool, TableError> {
        self.remove(key_str(key)?)
    }
}

/// Extracts a string key from a dynamically typed value.
fn key_str(key: &dyn Any) -> Result<&str, TableError> {
    if let Some(key) = key.downcast_ref::<String>() {
        return Ok(key.as_str());
    }
    key.downcast_ref::<&'static str>().copied().ok_or(TableError::InvalidKeyType)
}

/// Iterator over the key-value pairs of the hash table
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Entries of every bucket, chained in bucket order
    entries: Flatten<slice::Iter<'a, Bucket<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (entry.key.as_str(), &entry.value))
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
