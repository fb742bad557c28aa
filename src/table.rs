use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt,
    hash::{BuildHasher, Hash, RandomState},
    ops::Index,
};

use log::{debug, trace};

use crate::{
    bucket::Bucket,
    entry::Entry,
    error::{Result, TableError},
    iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut},
    slot::{OccupiedSlot, Slot, VacantSlot},
};

/// Number of buckets used when no capacity is given
pub const DEFAULT_CAPACITY: usize = 16;

/// A hash table with a fixed number of buckets and separate chaining
///
/// Each key lives in the bucket at `hash(key) % capacity`. Collisions are kept in the
/// bucket's chain and resolved by a linear scan, and the bucket array is never resized,
/// so a table that holds far more entries than buckets gets proportionally slower.
#[derive(Clone)]
pub struct ChainedTable<K, V, S = RandomState> {
    buckets: Vec<Bucket<K, V>>,
    hash_builder: S,
}

impl<K, V> ChainedTable<K, V, RandomState> {
    /// Create an empty `ChainedTable` with [`DEFAULT_CAPACITY`] buckets
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Create an empty `ChainedTable` with `capacity` buckets
    ///
    /// Fails with [`TableError::InvalidCapacity`] when `capacity` is zero.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ChainedTable<K, V, S> {
    /// Create an empty `ChainedTable` with [`DEFAULT_CAPACITY`] buckets and provided hasher
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, hash_builder)
    }

    /// Create an empty `ChainedTable` with `capacity` buckets and provided hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            debug!("rejected table capacity {}", capacity);
            return Err(TableError::InvalidCapacity(capacity));
        }
        Ok(Self::from_parts(capacity, hash_builder))
    }

    fn from_parts(capacity: usize, hash_builder: S) -> Self {
        debug_assert!(capacity > 0);
        debug!("creating chained table with {} buckets", capacity);

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);

        Self {
            buckets,
            hash_builder,
        }
    }

    /// Returns the number of elements in the table
    ///
    /// Walks every bucket, there is no cached counter.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// Returns `true` if the table contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Returns the number of buckets, fixed at construction
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a reference to the hasher
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the bucket array
    #[inline]
    pub fn buckets(&self) -> &[Bucket<K, V>] {
        &self.buckets
    }

    /// Returns the length of the longest collision chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    /// Clears the table, removing all key-value pairs
    ///
    /// The bucket array itself is kept.
    pub fn clear(&mut self) {
        trace!("clearing {} buckets", self.buckets.len());
        for bucket in &mut self.buckets {
            bucket.entries_mut().clear();
        }
    }

    /// Returns `true` if any entry holds a value equal to `value`
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Returns every entry in the table
    pub fn entry_set(&self) -> Vec<&Entry<K, V>> {
        self.buckets.iter().flat_map(Bucket::entries).collect()
    }

    /// An iterator over all key-value pairs, in no particular order
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets)
    }

    /// An iterator over all key-value pairs with mutable references to the values
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.buckets)
    }

    /// An iterator over all keys
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// An iterator over all values
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// An iterator over mutable references to all values
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }
}

impl<K, V, S> ChainedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Maps a key to its bucket
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        let hash = self.hash_builder.hash_one(key);
        // unsigned remainder, so hashes with the top bit set still land in range
        (hash % self.buckets.len() as u64) as usize
    }

    /// Finds the entry for `key` by scanning its bucket
    #[inline]
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .entries()
            .iter()
            .find(|entry| entry.key().borrow() == key)
    }

    #[inline]
    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .entries_mut()
            .iter_mut()
            .find(|entry| entry.key().borrow() == key)
    }

    /// Returns a reference to the value associated with the given key
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(Entry::value)
    }

    /// Returns the stored key and its value
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(Entry::pair)
    }

    /// Returns a mutable reference to the value associated with the given key
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_mut(key).map(Entry::value_mut)
    }

    /// Return `true` if the table contains a value for the given key
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair into the table
    ///
    /// If the table did not have this key present, a new entry is appended to the key's
    /// bucket and `None` is returned.
    /// If the table did have this key present, the existing entry's value is replaced in
    /// place and the old value is returned. The stored key is not updated.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let entries = self.buckets[index].entries_mut();

        match entries.iter().position(|entry| *entry.key() == key) {
            Some(pos) => Some(entries[pos].set_value(value)),
            None => {
                entries.push(Entry::new(key, value));
                None
            }
        }
    }

    /// Inserts every pair from `pairs`, later pairs overwrite earlier ones
    pub fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut merged = 0usize;
        for (key, value) in pairs {
            self.insert(key, value);
            merged += 1;
        }
        trace!("merged {} pairs", merged);
    }

    /// Removes a key from the table, returning the stored key and value if it was present
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let entries = self.buckets[index].entries_mut();

        let pos = entries
            .iter()
            .position(|entry| entry.key().borrow() == key)?;
        Some(entries.swap_remove(pos).into_pair())
    }

    /// Removes a key from the table, returning the value if the key was present
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key` only if its value equals `value`
    ///
    /// Returns `false`, leaving the table untouched, when the key is absent or holds a
    /// different value.
    pub fn remove_if_eq<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        let index = self.bucket_index(key);
        let entries = self.buckets[index].entries_mut();

        let Some(pos) = entries
            .iter()
            .position(|entry| entry.key().borrow() == key)
        else {
            return false;
        };

        if entries[pos].value() != value {
            return false;
        }
        entries.swap_remove(pos);
        true
    }

    /// Gets the given key's slot for in-place manipulation
    pub fn entry(&mut self, key: K) -> Slot<'_, K, V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        match bucket.entries().iter().position(|entry| *entry.key() == key) {
            Some(pos) => Slot::Occupied(OccupiedSlot::new(bucket, pos)),
            None => Slot::Vacant(VacantSlot::new(bucket, key)),
        }
    }

    /// Returns the set of all keys
    pub fn key_set(&self) -> HashSet<&K> {
        self.keys().collect()
    }
}

impl<K, T, S> ChainedTable<K, Option<T>, S> {
    /// Returns the values of entries that hold `Some`, skipping stored `None`s
    pub fn present_values(&self) -> Vec<&T> {
        self.values().filter_map(Option::as_ref).collect()
    }
}

impl<K, V> Default for ChainedTable<K, V, RandomState> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for ChainedTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for ChainedTable<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Tables are equal when they hold the same pairs, whatever their capacities
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ChainedTable<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, Q, V, S> Index<&Q> for ChainedTable<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the table.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.insert_all(iter);
        table
    }
}

impl<K, V, S> IntoIterator for ChainedTable<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets)
    }
}
