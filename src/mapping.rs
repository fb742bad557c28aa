//! The generic key-value mapping contract
//!
//! Code written against [`Mapping`] accepts a [`ChainedTable`] or a std `HashMap`
//! interchangeably.

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::table::ChainedTable;

/// Operations every associative container offers
///
/// Absent keys are reported with `None` or `false`, never as an error.
pub trait Mapping<K, V> {
    /// Number of stored pairs
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// `true` if any stored value equals `value`
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    fn get(&self, key: &K) -> Option<&V>;

    /// Stores `value` under `key`, returning the value it replaced
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes `key` only when it currently maps to `value`
    fn remove_if_eq(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq;

    /// Inserts every pair in iteration order, so the last duplicate wins
    fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    fn clear(&mut self);

    fn key_set(&self) -> HashSet<&K>;

    fn value_list(&self) -> Vec<&V>;

    fn entry_pairs(&self) -> Vec<(&K, &V)>;
}

impl<K, V, S> Mapping<K, V> for ChainedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn len(&self) -> usize {
        ChainedTable::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        ChainedTable::is_empty(self)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        ChainedTable::contains_key(self, key)
    }

    #[inline]
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        ChainedTable::contains_value(self, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        ChainedTable::get(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        ChainedTable::insert(self, key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedTable::remove(self, key)
    }

    #[inline]
    fn remove_if_eq(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        ChainedTable::remove_if_eq(self, key, value)
    }

    #[inline]
    fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        ChainedTable::insert_all(self, pairs)
    }

    #[inline]
    fn clear(&mut self) {
        ChainedTable::clear(self)
    }

    fn key_set(&self) -> HashSet<&K> {
        ChainedTable::key_set(self)
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }

    fn entry_pairs(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn remove_if_eq(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        if HashMap::get(self, key) != Some(value) {
            return false;
        }
        HashMap::remove(self, key).is_some()
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn key_set(&self) -> HashSet<&K> {
        self.keys().collect()
    }

    fn value_list(&self) -> Vec<&V> {
        self.values().collect()
    }

    fn entry_pairs(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}
