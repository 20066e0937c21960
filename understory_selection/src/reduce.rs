// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toggle reducer.

use crate::keys::{SelectedKeys, SelectionKey};

/// How a toggle combines with the existing selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one key is selected; toggling another key replaces it.
    #[default]
    Single,
    /// Any number of keys may be selected; toggling adds or removes one key.
    Multiple,
}

impl SelectionMode {
    /// Map a `multiple` flag to a mode.
    pub const fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }

    /// Whether this mode allows more than one selected key.
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// Compute the selection that results from toggling `key`.
///
/// - [`SelectionMode::Single`]: if `key` is the sole selected key the result is empty,
///   otherwise it is exactly `[key]`.
/// - [`SelectionMode::Multiple`]: if `key` is selected it is removed and the remaining
///   keys keep their order, otherwise it is appended.
///
/// ```
/// use understory_selection::{toggle_keys, SelectionMode};
///
/// assert_eq!(toggle_keys(&["1"], &"1", SelectionMode::Single).as_slice(), &[] as &[&str]);
/// assert_eq!(toggle_keys(&["1"], &"2", SelectionMode::Single).as_slice(), &["2"]);
/// assert_eq!(toggle_keys(&["1"], &"2", SelectionMode::Multiple).as_slice(), &["1", "2"]);
/// assert_eq!(toggle_keys(&["1", "2"], &"1", SelectionMode::Multiple).as_slice(), &["2"]);
/// ```
pub fn toggle_keys<K: SelectionKey>(current: &[K], key: &K, mode: SelectionMode) -> SelectedKeys<K> {
    match mode {
        SelectionMode::Single => {
            if current.len() == 1 && current[0] == *key {
                SelectedKeys::new()
            } else {
                SelectedKeys::single(key.clone())
            }
        }
        SelectionMode::Multiple => {
            let current = SelectedKeys::from(current);
            if current.contains(key) {
                current.without(key)
            } else {
                let mut next = current;
                next.push(key.clone());
                next
            }
        }
    }
}
