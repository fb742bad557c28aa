//! A `ChainedTable` behind one reader-writer lock
//!
//! The table itself has no internal synchronization. `SharedTable` guards every
//! operation with a single `parking_lot::RwLock`, so concurrent readers proceed together
//! and writers get the whole table.

use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash, RandomState},
    sync::Arc,
};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::Result, table::ChainedTable};

/// A cloneable, thread-safe handle to a `ChainedTable`
pub struct SharedTable<K, V, S = RandomState> {
    inner: Arc<RwLock<ChainedTable<K, V, S>>>,
}

impl<K, V> SharedTable<K, V, RandomState> {
    /// Create an empty shared table with the default number of buckets
    pub fn new() -> Self {
        Self::from_table(ChainedTable::new())
    }

    /// Create an empty shared table with `capacity` buckets
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ChainedTable::with_capacity(capacity).map(Self::from_table)
    }
}

impl<K, V, S> SharedTable<K, V, S> {
    /// Wrap an existing table
    pub fn from_table(table: ChainedTable<K, V, S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Lock the table for reading
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, ChainedTable<K, V, S>> {
        self.inner.read()
    }

    /// Lock the table for writing
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, ChainedTable<K, V, S>> {
        self.inner.write()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear()
    }
}

impl<K, V, S> SharedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write().insert(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.write().remove(key)
    }

    pub fn remove_if_eq<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.write().remove_if_eq(key, value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// Returns a copy of the value, since a reference cannot outlive the read lock
    pub fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.read().get(key).cloned()
    }
}

impl<K, V, S> Clone for SharedTable<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_handles_share_one_table() {
        let table = SharedTable::new();
        let other = table.clone();

        table.insert("a", 1);
        assert_eq!(other.get_cloned("a"), Some(1));
        assert!(other.contains_key("a"));

        other.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_concurrent_writers() {
        let table: SharedTable<u64, u64> = SharedTable::with_capacity(8).unwrap();

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let table = table.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        table.insert(t * 1000 + i, i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.len(), 1000);
        assert_eq!(table.read().capacity(), 8);
        assert_eq!(table.get_cloned(&3_249), Some(249));
    }

    #[test]
    fn test_guarded_compound_update() {
        let table = SharedTable::new();
        table.insert(String::from("hits"), 0u32);

        {
            let mut guard = table.write();
            *guard.entry(String::from("hits")).or_insert(0) += 1;
        }

        assert_eq!(table.get_cloned("hits"), Some(1));
        assert!(table.remove_if_eq("hits", &1));
        assert_eq!(table.remove("hits"), None);
    }

    #[test]
    fn test_zero_capacity() {
        assert!(SharedTable::<u64, u64>::with_capacity(0).is_err());
    }
}
