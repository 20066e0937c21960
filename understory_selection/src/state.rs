// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection controller: toggles plus controlled/uncontrolled reconciliation.
//!
//! ## Reconciliation
//!
//! A [`Selection`] starts in [`SyncStatus::Idle`]. The first reconcile pass seeds the
//! state from the uncontrolled default (or, when there is none, from the controlled
//! keys) without reporting a change, and moves to [`SyncStatus::Succeeded`]. From then
//! on only the controlled keys are authoritative: when they are present the state
//! adopts them, and a [`SelectionChange`] is reported only if the set of keys differs
//! from the current one.
//!
//! ```
//! use understory_selection::{Selection, SelectionMode, SyncStatus};
//!
//! let mut selection: Selection<&str, ()> = Selection::new(SelectionMode::Single);
//! assert!(selection.mount(None, Some(&["1"])).is_none());
//! assert_eq!(selection.status(), SyncStatus::Succeeded);
//! assert_eq!(selection.selected_keys(), &["1"]);
//!
//! // The host now controls the selection.
//! let change = selection.reconcile(Some(&["2"]), Some(&["1"])).unwrap();
//! assert_eq!(change.selected_keys, &["2"]);
//! assert!(change.key.is_none());
//!
//! // Same set again: nothing to report.
//! assert!(selection.reconcile(Some(&["2"]), Some(&["1"])).is_none());
//! ```

use crate::keys::{SelectedKeys, SelectionKey};
use crate::reduce::{SelectionMode, toggle_keys};

/// Progress of the reconciliation state machine.
///
/// The only transition is `Idle → Succeeded`; it is never reversed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SyncStatus {
    /// No reconcile pass has run yet.
    #[default]
    Idle,
    /// The state has been seeded; controlled keys are now authoritative.
    Succeeded,
}

/// The selection owned by a controller.
#[derive(Clone, Debug)]
pub struct SelectionState<K, E> {
    /// Selected keys in selection order.
    pub selected_keys: SelectedKeys<K>,
    /// Key toggled by the most recent user action, if the last change was one.
    pub last_changed_key: Option<K>,
    /// Event that triggered the most recent user action.
    pub source_event: Option<E>,
}

impl<K, E> SelectionState<K, E> {
    fn synced(selected_keys: SelectedKeys<K>) -> Self {
        Self {
            selected_keys,
            last_changed_key: None,
            source_event: None,
        }
    }
}

impl<K, E> Default for SelectionState<K, E> {
    fn default() -> Self {
        Self::synced(SelectedKeys::new())
    }
}

/// A change report, borrowed from the controller right after the change was applied.
///
/// `key` and `event` are present for user toggles and absent for external syncs.
#[derive(Debug)]
pub struct SelectionChange<'a, K, E> {
    /// The toggled key.
    pub key: Option<&'a K>,
    /// The selection after the change.
    pub selected_keys: &'a [K],
    /// The event that triggered the toggle.
    pub event: Option<&'a E>,
}

impl<K, E> SelectionChange<'_, K, E> {
    /// Whether this change came from a user toggle rather than an external sync.
    pub fn is_user_action(&self) -> bool {
        self.key.is_some()
    }
}

impl<K, E> Clone for SelectionChange<'_, K, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, E> Copy for SelectionChange<'_, K, E> {}

/// Selection controller for one component instance.
///
/// `K` is the item key type and `E` an opaque event type that is stored with the
/// last toggle and handed back in the change report.
#[derive(Clone, Debug)]
pub struct Selection<K, E> {
    state: SelectionState<K, E>,
    mode: SelectionMode,
    status: SyncStatus,
}

impl<K, E> Selection<K, E> {
    /// The toggle mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Reconciliation progress.
    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// The full selection state.
    pub fn state(&self) -> &SelectionState<K, E> {
        &self.state
    }

    /// Selected keys in selection order.
    pub fn selected_keys(&self) -> &[K] {
        &self.state.selected_keys
    }
}

impl<K: SelectionKey, E> Selection<K, E> {
    /// Create an empty, not yet reconciled selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            state: SelectionState::default(),
            mode,
            status: SyncStatus::Idle,
        }
    }

    /// Whether `key` is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.state.selected_keys.contains(key)
    }

    /// Apply a user toggle of `key`, triggered by `event`.
    ///
    /// A missing or blank key leaves the selection untouched and reports nothing.
    /// Otherwise the new state is stored before the change report is returned, so
    /// the report always describes the post-toggle selection.
    pub fn toggle(&mut self, key: Option<K>, event: E) -> Option<SelectionChange<'_, K, E>> {
        let Some(key) = key.filter(|key| !key.is_blank()) else {
            tracing::trace!(target: "understory_selection", "ignoring toggle without a key");
            return None;
        };
        let next = toggle_keys(self.state.selected_keys.as_slice(), &key, self.mode);
        tracing::debug!(
            target: "understory_selection",
            ?key,
            mode = ?self.mode,
            selected = next.len(),
            "toggled key"
        );
        self.state = SelectionState {
            selected_keys: next,
            last_changed_key: Some(key),
            source_event: Some(event),
        };
        Some(self.change())
    }

    /// Run one reconcile pass against the current inputs.
    ///
    /// Hosts call this whenever the controlled keys or the uncontrolled default change.
    /// See the module docs for the rules.
    pub fn reconcile(
        &mut self,
        controlled: Option<&[K]>,
        default: Option<&[K]>,
    ) -> Option<SelectionChange<'_, K, E>> {
        match self.status {
            SyncStatus::Idle => {
                self.status = SyncStatus::Succeeded;
                let incoming = default.or(controlled)?;
                tracing::trace!(
                    target: "understory_selection",
                    selected = incoming.len(),
                    "seeded selection"
                );
                self.state = SelectionState::synced(SelectedKeys::from(incoming));
                None
            }
            SyncStatus::Succeeded => {
                let incoming = controlled?;
                let changed = !self.state.selected_keys.same_members(incoming);
                self.state = SelectionState::synced(SelectedKeys::from(incoming));
                if !changed {
                    return None;
                }
                tracing::debug!(
                    target: "understory_selection",
                    selected = incoming.len(),
                    "synced controlled selection"
                );
                Some(self.change())
            }
        }
    }

    /// Initial reconciliation.
    ///
    /// Seeds the state, then runs the first authoritative pass so that controlled keys
    /// supplied alongside a differing default win immediately (and are reported).
    pub fn mount(
        &mut self,
        controlled: Option<&[K]>,
        default: Option<&[K]>,
    ) -> Option<SelectionChange<'_, K, E>> {
        if self.status == SyncStatus::Idle {
            // Seeding never reports a change.
            let _ = self.reconcile(controlled, default);
        }
        self.reconcile(controlled, default)
    }

    fn change(&self) -> SelectionChange<'_, K, E> {
        SelectionChange {
            key: self.state.last_changed_key.as_ref(),
            selected_keys: &self.state.selected_keys,
            event: self.state.source_event.as_ref(),
        }
    }
}
