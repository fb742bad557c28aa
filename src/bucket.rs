//! A collision chain.
//!
//! - Entries whose keys hash to the same slot
//! - Plain growable array, scanned linearly by the table
//! - No hashing or key comparison happens here; the table keeps keys unique per bucket
//! - Order inside a bucket is not stable across removals

use std::slice;

use crate::entry::Entry;

/// The chain of entries sharing one hash slot
#[derive(Clone, Debug)]
pub struct Bucket<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    /// Create new empty bucket
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The entries of this chain
    #[inline]
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// The live entry sequence, for in-place append and removal
    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Entry<K, V>> {
        &mut self.entries
    }

    /// Number of entries in the chain
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for Bucket<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a Bucket<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = slice::Iter<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Bucket<K, V> {
    type Item = &'a mut Entry<K, V>;
    type IntoIter = slice::IterMut<'a, Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl<K, V> IntoIterator for Bucket<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = std::vec::IntoIter<Entry<K, V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bucket() {
        let bucket: Bucket<u64, u64> = Bucket::new();
        assert!(bucket.is_empty());
        assert_eq!(bucket.len(), 0);
        assert!(bucket.entries().is_empty());
    }

    #[test]
    fn test_append_and_remove_in_place() {
        let mut bucket = Bucket::new();

        bucket.entries_mut().push(Entry::new(1u64, 10u64));
        bucket.entries_mut().push(Entry::new(2, 20));
        bucket.entries_mut().push(Entry::new(3, 30));
        assert_eq!(bucket.len(), 3);

        let removed = bucket.entries_mut().swap_remove(0);
        assert_eq!(removed.into_pair(), (1, 10));
        assert_eq!(bucket.len(), 2);

        let mut keys: Vec<u64> = bucket.entries().iter().map(|e| *e.key()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![2, 3]);
    }

    #[test]
    fn test_iter_mut() {
        let mut bucket = Bucket::new();
        bucket.entries_mut().push(Entry::new("a", 1));
        bucket.entries_mut().push(Entry::new("b", 2));

        for entry in &mut bucket {
            *entry.value_mut() *= 10;
        }

        let values: Vec<i32> = bucket.into_iter().map(|e| e.into_pair().1).collect();
        assert_eq!(values, vec![10, 20]);
    }
}
