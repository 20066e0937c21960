// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component identity.
//!
//! Identifiers are allocated from an [`IdSource`] that the host owns and passes to
//! constructors; there is no process-wide counter.

use core::fmt;
use core::num::NonZeroU64;

/// Identity token for one menu or menu item instance.
///
/// Renderers attach it to whatever the platform uses for element identity. Its
/// [`Display`](fmt::Display) form is suitable for an `id` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(NonZeroU64);

impl ComponentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "understory-{}", self.0)
    }
}

/// Sequential allocator of [`ComponentId`]s.
#[derive(Clone, Debug)]
pub struct IdSource {
    next: NonZeroU64,
}

impl IdSource {
    /// A source whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: NonZeroU64::MIN,
        }
    }

    /// A source whose first id is `first`.
    pub const fn starting_at(first: NonZeroU64) -> Self {
        Self { next: first }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> ComponentId {
        let id = ComponentId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new()
    }
}
