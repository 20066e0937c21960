// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: a keyed selection reducer for headless UI.
//!
//! This crate tracks which item keys of a list-like component (menus, option lists,
//! segmented controls) are selected. It owns no items and draws nothing; it only
//! answers "what is selected now?" after each user toggle or host update.
//!
//! ## Toggling
//!
//! [`toggle_keys`] is the pure reducer. In [`SelectionMode::Single`] toggling the sole
//! selected key clears the selection and toggling any other key replaces it. In
//! [`SelectionMode::Multiple`] toggling removes a selected key (the rest keep their
//! order) or appends an unselected one.
//!
//! ## Controlled and uncontrolled use
//!
//! [`Selection`] wraps the reducer with a small reconciliation state machine
//! ([`SyncStatus`]) so a component can be driven either way:
//!
//! - **Uncontrolled**: seed once from a default, then let toggles own the state.
//! - **Controlled**: the host passes keys on every update and they win whenever their
//!   set differs from the current one.
//!
//! Every mutating call returns a [`SelectionChange`] borrowed from the controller when
//! there is something to report, so the caller can forward it to its own callback
//! after the state has been updated.
//!
//! ```rust
//! use understory_selection::{Selection, SelectionMode};
//!
//! #[derive(Debug)]
//! struct Click { shift: bool }
//!
//! let mut selection: Selection<String, Click> = Selection::new(SelectionMode::Multiple);
//! selection.mount(None, None);
//!
//! let change = selection.toggle(Some("a".to_string()), Click { shift: false }).unwrap();
//! assert_eq!(change.selected_keys, &["a".to_string()]);
//!
//! let change = selection.toggle(Some("b".to_string()), Click { shift: true }).unwrap();
//! assert_eq!(change.selected_keys, &["a".to_string(), "b".to_string()]);
//! assert!(change.event.unwrap().shift);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod keys;
pub mod reduce;
pub mod state;

pub use keys::{SelectedKeys, SelectionKey};
pub use reduce::{SelectionMode, toggle_keys};
pub use state::{Selection, SelectionChange, SelectionState, SyncStatus};
