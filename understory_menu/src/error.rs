// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for menu setup and lookup.

use hashbrown::HashSet;
use understory_selection::SelectionKey;

use crate::item::MenuItem;

/// Errors returned by fallible menu operations.
///
/// Selection itself never fails; these only cover building a menu and addressing its
/// items by key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError<K> {
    /// Two items share a key.
    #[error("duplicate menu item key {0:?}")]
    DuplicateKey(K),
    /// No item has the requested key.
    #[error("no menu item with key {0:?}")]
    UnknownItem(K),
}

/// Check that no two items share a key.
pub fn ensure_unique_keys<K: SelectionKey, E, N>(
    items: &[MenuItem<K, E, N>],
) -> Result<(), MenuError<K>> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.key()) {
            return Err(MenuError::DuplicateKey(item.key().clone()));
        }
    }
    Ok(())
}
