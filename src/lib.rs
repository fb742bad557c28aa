//! A fixed-capacity hash table with separate chaining.
//!
//! `ChainedTable` owns a bucket array sized once at construction. Every key is routed to
//! `hash(key) % capacity` and collisions are resolved by a linear scan of that bucket's
//! entries. The table never grows or rehashes, so lookup cost degrades linearly with chain
//! length.
//!
//! ```
//! use chaintable::ChainedTable;
//!
//! let mut table = ChainedTable::with_capacity(8)?;
//! table.insert("a", 1);
//! assert_eq!(table.insert("a", 2), Some(1));
//! assert_eq!(table.get("a"), Some(&2));
//! assert!(!table.remove_if_eq("a", &1));
//! # Ok::<(), chaintable::TableError>(())
//! ```

pub mod bucket;
pub mod entry;
pub mod error;
pub mod iter;
#[cfg(test)]
mod logger;
pub mod mapping;
pub mod shared;
pub mod slot;
pub mod table;

pub use bucket::Bucket;
pub use entry::Entry;
pub use error::{Result, TableError};
pub use mapping::Mapping;
pub use shared::SharedTable;
pub use slot::{OccupiedSlot, Slot, VacantSlot};
pub use table::{ChainedTable, DEFAULT_CAPACITY};
