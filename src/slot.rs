//! Entry-style access for `ChainedTable`
//!
//! A [`Slot`] is obtained from [`ChainedTable::entry`](crate::table::ChainedTable::entry)
//! after the key's bucket has been located, so filling or removing it never rehashes.

use crate::{bucket::Bucket, entry::Entry};

/// A view into a single key's position in a `ChainedTable`, which may either be vacant or occupied
pub enum Slot<'a, K, V> {
    Occupied(OccupiedSlot<'a, K, V>),
    Vacant(VacantSlot<'a, K, V>),
}

/// A view into an occupied slot in a `ChainedTable`
pub struct OccupiedSlot<'a, K, V> {
    bucket: &'a mut Bucket<K, V>,
    pos: usize,
}

/// A view into a vacant slot in a `ChainedTable`
pub struct VacantSlot<'a, K, V> {
    bucket: &'a mut Bucket<K, V>,
    key: K,
}

impl<'a, K, V> Slot<'a, K, V> {
    /// Returns a reference to this slot's key
    pub fn key(&self) -> &K {
        match self {
            Slot::Occupied(slot) => slot.key(),
            Slot::Vacant(slot) => slot.key(),
        }
    }

    /// Ensures a value is in the slot by inserting the default if empty,
    /// and returns a mutable reference to the value in the slot.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Slot::Occupied(slot) => slot.into_mut(),
            Slot::Vacant(slot) => slot.insert(default),
        }
    }

    /// Ensures a value is in the slot by inserting the result of the
    /// default function if empty, and returns a mutable reference to
    /// the value in the slot
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Slot::Occupied(slot) => slot.into_mut(),
            Slot::Vacant(slot) => slot.insert(default()),
        }
    }

    /// Like [`or_insert_with`](Self::or_insert_with), but the key is passed to the function
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Slot::Occupied(slot) => slot.into_mut(),
            Slot::Vacant(slot) => {
                let value = default(slot.key());
                slot.insert(value)
            }
        }
    }

    /// Provides in-place mutable access to an occupied slot before any
    /// potential inserts into the table
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let Slot::Occupied(slot) = &mut self {
            f(slot.get_mut());
        }
        self
    }
}

impl<'a, K, V: Default> Slot<'a, K, V> {
    /// Ensures a value is in the slot by inserting the default value if empty,
    /// and returns a mutable reference to the value in the slot.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V> OccupiedSlot<'a, K, V> {
    pub(crate) fn new(bucket: &'a mut Bucket<K, V>, pos: usize) -> Self {
        debug_assert!(pos < bucket.len());
        Self { bucket, pos }
    }

    #[inline]
    fn entry(&self) -> &Entry<K, V> {
        &self.bucket.entries()[self.pos]
    }

    #[inline]
    fn entry_mut(&mut self) -> &mut Entry<K, V> {
        &mut self.bucket.entries_mut()[self.pos]
    }

    /// Gets a reference to the key in the slot
    pub fn key(&self) -> &K {
        self.entry().key()
    }

    /// Gets a reference to the value in the slot
    pub fn get(&self) -> &V {
        self.entry().value()
    }

    /// Gets a mutable reference to the value in the slot
    pub fn get_mut(&mut self) -> &mut V {
        self.entry_mut().value_mut()
    }

    /// Converts the slot into a mutable reference to its value
    pub fn into_mut(self) -> &'a mut V {
        let Self { bucket, pos } = self;
        bucket.entries_mut()[pos].value_mut()
    }

    /// Sets the value of the slot, and returns the slot's old value
    pub fn insert(&mut self, value: V) -> V {
        self.entry_mut().set_value(value)
    }

    /// Takes the value out of the slot, and returns it
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Takes the key and value out of the slot
    pub fn remove_entry(self) -> (K, V) {
        self.bucket.entries_mut().swap_remove(self.pos).into_pair()
    }
}

impl<'a, K, V> VacantSlot<'a, K, V> {
    pub(crate) fn new(bucket: &'a mut Bucket<K, V>, key: K) -> Self {
        Self { bucket, key }
    }

    /// Gets a reference to the key that would be used when inserting
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key
    pub fn into_key(self) -> K {
        self.key
    }

    /// Sets the value of the slot, and returns a mutable reference to it
    pub fn insert(self, value: V) -> &'a mut V {
        let Self { bucket, key } = self;
        let entries = bucket.entries_mut();
        entries.push(Entry::new(key, value));
        let last = entries.len() - 1;
        entries[last].value_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::table::ChainedTable;

    use super::*;

    #[test]
    fn test_or_insert_counts_words() {
        let mut table = ChainedTable::with_capacity(3).unwrap();

        for word in "a b a c b a".split(' ') {
            *table.entry(word).or_insert(0) += 1;
        }

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some(&3));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&1));
    }

    #[test]
    fn test_or_insert_with_key_and_default() {
        let mut table: ChainedTable<String, usize> = ChainedTable::new();

        let len = *table.entry(String::from("four")).or_insert_with_key(|k| k.len());
        assert_eq!(len, 4);

        *table.entry(String::from("zero")).or_default() += 0;
        assert_eq!(table.get("zero"), Some(&0));
        assert_eq!(*table.entry(String::from("four")).or_insert_with(|| 99), 4);
    }

    #[test]
    fn test_and_modify() {
        let mut table = ChainedTable::new();
        table.insert(1u64, 10u64);

        table.entry(1).and_modify(|v| *v += 1).or_insert(0);
        table.entry(2).and_modify(|v| *v += 1).or_insert(0);

        assert_eq!(table.get(&1), Some(&11));
        assert_eq!(table.get(&2), Some(&0));
    }

    #[test]
    fn test_occupied_insert_and_remove() {
        let mut table = ChainedTable::new();
        table.insert("k", 1);

        match table.entry("k") {
            Slot::Occupied(mut slot) => {
                assert_eq!(*slot.key(), "k");
                assert_eq!(slot.insert(2), 1);
                assert_eq!(*slot.get(), 2);
                assert_eq!(slot.remove_entry(), ("k", 2));
            }
            Slot::Vacant(_) => panic!("expected occupied slot"),
        }

        assert!(table.is_empty());
    }

    #[test]
    fn test_vacant_into_key() {
        let mut table: ChainedTable<&str, i32> = ChainedTable::new();

        match table.entry("missing") {
            Slot::Vacant(slot) => assert_eq!(slot.into_key(), "missing"),
            Slot::Occupied(_) => panic!("expected vacant slot"),
        }

        assert!(table.is_empty());
    }

    #[test]
    fn test_slot_key() {
        let mut table = ChainedTable::new();
        table.insert(5u64, ());

        assert_eq!(*table.entry(5).key(), 5);
        assert_eq!(*table.entry(6).key(), 6);
    }
}
