//! Crate `group-map` is a library for grouping the elements of a sequence
//! into insertion-ordered maps, by a key derived from each element.
//!
//! # Example: Grouping by Key
//!
//! `group_by` gives every distinct key one entry, in first-seen key order,
//! regardless of where in the sequence its elements appear.
//!
//! ```rust
//! use group_map::GroupByKey;
//!
//! let groups = vec![1, 2, 3, 4, 5, 6].into_iter().group_by_key(|x| x % 3);
//!
//! let keys: Vec<_> = groups.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 0]);
//!
//! assert_eq!(groups[&1], vec![1, 4]);
//! assert_eq!(groups[&2], vec![2, 5]);
//! assert_eq!(groups[&0], vec![3, 6]);
//! ```
//!
//! # Example: Grouping Contiguous Runs
//!
//! `group_by_contiguous_key` gives every maximal contiguous run of a key its
//! own entry, identified by the key paired with the run's start index. The
//! same key value may therefore appear in several entries.
//!
//! ```rust
//! use group_map::{GroupByKey, RunKey};
//!
//! let runs = "aaba".chars().group_by_contiguous_key(|c| *c);
//!
//! assert_eq!(runs[&RunKey { key: 'a', index: 0 }], vec!['a', 'a']);
//! assert_eq!(runs[&RunKey { key: 'b', index: 2 }], vec!['b']);
//! assert_eq!(runs[&RunKey { key: 'a', index: 3 }], vec!['a']);
//! ```

#![cfg_attr(feature = "nightly", feature(test))]

use std::hash::Hash;

use indexmap::IndexMap;

mod group_by;
mod contiguous_group_by;

pub use self::group_by::group_by;
pub use self::contiguous_group_by::{group_by_contiguous_key, RunKey};

/// A convenient trait to group the elements of any iterator into
/// insertion-ordered maps keyed by a derived key.
pub trait GroupByKey: Iterator {
    /// Groups elements by derived key, one entry per distinct key.
    ///
    /// Keys iterate in first-seen order and every group preserves the
    /// input order of its elements.
    fn group_by_key<K, F>(self, key_of: F) -> IndexMap<K, Vec<Self::Item>>
    where Self: Sized,
          K: Hash + Eq,
          F: FnMut(&Self::Item) -> K,
    {
        self::group_by::group_by(self, key_of)
    }

    /// Groups maximal contiguous runs of elements sharing a derived key,
    /// one entry per run.
    ///
    /// Entries iterate in increasing run-start-index order, so concatenating
    /// the value lists reproduces the input sequence.
    fn group_by_contiguous_key<K, F>(self, key_of: F) -> IndexMap<RunKey<K>, Vec<Self::Item>>
    where Self: Sized,
          K: Hash + Eq,
          F: FnMut(&Self::Item) -> K,
    {
        self::contiguous_group_by::group_by_contiguous_key(self, key_of)
    }
}

impl<I> GroupByKey for I where I: Iterator { }
