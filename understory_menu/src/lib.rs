// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Menu: a headless menu and menu item.
//!
//! ## Overview
//!
//! A [`Menu`] owns an ordered list of [`MenuItem`]s and one
//! [`Selection`](understory_selection::Selection) for them. The menu is the only
//! place selection changes; items see the current selection read-only and report
//! activations upward.
//!
//! - **Intent** flows item → menu: [`Menu::activate`] routes an activation on a
//!   [`Channel`] to the item with that key, which applies its disabled/loading gate,
//!   reports its key and then runs its own handler.
//! - **State** flows menu → item: each item derives an [`ItemStatus`] from the selected
//!   keys when it is rendered or queried.
//!
//! Single and multiple selection, and controlled vs uncontrolled use, follow the rules
//! of `understory_selection`; see the [`menu`] module for the menu-level contract.
//!
//! ## Rendering
//!
//! Nothing is drawn here. [`Menu::render`] walks the items and calls the host's
//! [`ItemRender`] and [`MenuRender`] implementations slot by slot. Every slot has a
//! default, so a host only implements what it needs.
//!
//! ## Identity
//!
//! Menus and items take a [`ComponentId`] at construction. Ids come from an
//! [`IdSource`] owned by the host, so separate trees never share a counter.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_menu::{Channel, IdSource, ItemStatus, Menu, MenuConfig, MenuItem};
//!
//! let mut ids = IdSource::new();
//! let mut menu: Menu<&str, ()> = Menu::new(
//!     ids.next_id(),
//!     MenuConfig::new().with_selected_keys(["1"]),
//!     [
//!         MenuItem::new(ids.next_id(), "1").with_label("MenuItem1"),
//!         MenuItem::new(ids.next_id(), "2").with_label("MenuItem2"),
//!     ],
//! );
//!
//! // Clicking the only selected item deselects it...
//! menu.activate(&"1", Channel::Click, ()).unwrap();
//! assert!(menu.selected_keys().is_empty());
//!
//! // ...and clicking another item replaces the selection.
//! menu.activate(&"2", Channel::Click, ()).unwrap();
//! assert_eq!(menu.item_status(&"2"), ItemStatus::Selected);
//! assert_eq!(menu.item_status(&"1"), ItemStatus::Normal);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod channel;
pub mod error;
pub mod id;
pub mod item;
pub mod menu;
pub mod render;

pub use channel::{Channel, ChannelHandlers, ChannelSet};
pub use error::MenuError;
pub use id::{ComponentId, IdSource};
pub use item::{Activation, Gate, ItemStatus, ItemView, MenuItem};
pub use menu::{Menu, MenuBuilder, MenuConfig, MenuMode, SelectEvent};
pub use render::{ItemParts, ItemRender, MenuRender, MenuView};
