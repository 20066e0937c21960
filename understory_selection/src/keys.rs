// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection keys and the ordered key sequence.
//!
//! A [`SelectedKeys`] value is an ordered sequence: the order in which keys were
//! selected is kept for display, while membership questions
//! ([`SelectedKeys::contains`], [`SelectedKeys::same_members`]) ignore it.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::Deref;

use hashbrown::HashSet;
use smallvec::SmallVec;

/// Identifier of a selectable item.
///
/// Keys are compared by value and must be stable across updates. String-like
/// keys report [`is_blank`](Self::is_blank) when empty; a blank key never
/// changes a selection.
pub trait SelectionKey: Clone + Eq + Hash + Debug {
    /// Whether this key carries no identity (for example, an empty string).
    fn is_blank(&self) -> bool {
        false
    }
}

impl SelectionKey for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SelectionKey for &'static str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SelectionKey for Box<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SelectionKey for Rc<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SelectionKey for Arc<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_selection_key_for_ints {
    ($($ty:ty),* $(,)?) => {
        $(impl SelectionKey for $ty {})*
    };
}

impl_selection_key_for_ints!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Number of keys stored inline before spilling to the heap.
const INLINE_KEYS: usize = 4;

/// Ordered sequence of selected keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectedKeys<K> {
    keys: SmallVec<[K; INLINE_KEYS]>,
}

impl<K> SelectedKeys<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            keys: SmallVec::new(),
        }
    }

    /// The keys in selection order.
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: SelectionKey> SelectedKeys<K> {
    /// A selection holding exactly `key`.
    pub fn single(key: K) -> Self {
        let mut keys = SmallVec::new();
        keys.push(key);
        Self { keys }
    }

    /// Whether `key` is selected.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Whether this selection and `other` hold the same keys, ignoring order.
    ///
    /// ```
    /// use understory_selection::SelectedKeys;
    ///
    /// let keys: SelectedKeys<&str> = ["a", "b"].into_iter().collect();
    /// assert!(keys.same_members(&["b", "a"]));
    /// assert!(!keys.same_members(&["a"]));
    /// ```
    pub fn same_members(&self, other: &[K]) -> bool {
        let ours: HashSet<&K> = self.keys.iter().collect();
        let theirs: HashSet<&K> = other.iter().collect();
        ours == theirs
    }

    pub(crate) fn push(&mut self, key: K) {
        self.keys.push(key);
    }

    pub(crate) fn without(&self, key: &K) -> Self {
        Self {
            keys: self.keys.iter().filter(|k| *k != key).cloned().collect(),
        }
    }
}

impl<K> Default for SelectedKeys<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Deref for SelectedKeys<K> {
    type Target = [K];

    fn deref(&self) -> &[K] {
        &self.keys
    }
}

impl<K> FromIterator<K> for SelectedKeys<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a, K> IntoIterator for &'a SelectedKeys<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K: Clone> From<&[K]> for SelectedKeys<K> {
    fn from(keys: &[K]) -> Self {
        Self {
            keys: SmallVec::from(keys),
        }
    }
}
