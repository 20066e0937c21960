// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu items: interaction gating and status projection.
//!
//! A [`MenuItem`] never owns selection state. It reads the selected keys projected
//! down from its menu to derive an [`ItemStatus`], and turns an activation on some
//! [`Channel`] into one upward call carrying its key, unless it is disabled or loading.
//!
//! ```
//! use understory_menu::channel::Channel;
//! use understory_menu::id::IdSource;
//! use understory_menu::item::{Activation, Gate, ItemStatus, MenuItem};
//!
//! let mut ids = IdSource::new();
//! let mut item: MenuItem<&str, ()> = MenuItem::new(ids.next_id(), "save").with_label("Save");
//! assert_eq!(item.status(&["save"]), ItemStatus::Selected);
//!
//! let mut reported = None;
//! assert_eq!(item.activate(Channel::Click, &(), |key, _| reported = Some(*key)), Activation::Activated);
//! assert_eq!(reported, Some("save"));
//!
//! item.set_loading(true);
//! assert_eq!(
//!     item.activate(Channel::Click, &(), |_, _| unreachable!()),
//!     Activation::Suppressed(Gate::Loading)
//! );
//! ```

use alloc::string::String;
use core::fmt;

use understory_selection::SelectionKey;

use crate::channel::{Channel, ChannelHandlers, ChannelSet};
use crate::id::ComponentId;
use crate::menu::MenuMode;
use crate::render::{ItemParts, ItemRender};

/// Selection status of an item, as seen by renderers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    /// The item's key is not selected.
    #[default]
    Normal,
    /// The item's key is selected.
    Selected,
}

impl ItemStatus {
    /// Status of `key` given the projected selection.
    pub fn of<K: PartialEq>(key: &K, selected_keys: &[K]) -> Self {
        if selected_keys.contains(key) {
            Self::Selected
        } else {
            Self::Normal
        }
    }

    /// Whether this is [`ItemStatus::Selected`].
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

/// Why an activation was swallowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// The item is disabled.
    Disabled,
    /// The item is loading.
    Loading,
}

/// Outcome of [`MenuItem::activate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The item's handler (if any) ran and the key was reported upward.
    Activated,
    /// Nothing ran.
    Suppressed(Gate),
}

/// Read-only description of an item handed to renderers.
#[derive(Debug)]
pub struct ItemView<'a, K> {
    /// Instance id.
    pub id: ComponentId,
    /// The item key.
    pub key: &'a K,
    /// The key reported upward on activation.
    pub index: &'a K,
    /// Display label.
    pub label: Option<&'a str>,
    /// Selection status.
    pub status: ItemStatus,
    /// Whether the item is disabled.
    pub disabled: bool,
    /// Whether the item is loading.
    pub loading: bool,
    /// Layout of the owning menu.
    pub mode: MenuMode,
    /// The selection projected from the menu.
    pub selected_keys: &'a [K],
    /// Channels with a caller handler; renderers attach native listeners for these.
    pub channels: ChannelSet,
}

/// A menu entry.
///
/// `K` is the key type, `E` the platform event type and `N` the node type used for
/// icons (and produced by renderers).
pub struct MenuItem<K, E, N = ()> {
    id: ComponentId,
    key: K,
    index: Option<K>,
    label: Option<String>,
    icon: Option<N>,
    expand_icon: Option<N>,
    disabled: bool,
    loading: bool,
    handlers: ChannelHandlers<E>,
}

impl<K: SelectionKey, E, N> MenuItem<K, E, N> {
    /// Create an enabled item with no label, icons or handlers.
    pub fn new(id: ComponentId, key: K) -> Self {
        Self {
            id,
            key,
            index: None,
            label: None,
            icon: None,
            expand_icon: None,
            disabled: false,
            loading: false,
            handlers: ChannelHandlers::new(),
        }
    }

    /// Report `index` instead of the item key on activation.
    pub fn with_index(mut self, index: K) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the leading icon.
    pub fn with_icon(mut self, icon: N) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the expansion icon, overriding the menu's.
    pub fn with_expand_icon(mut self, icon: N) -> Self {
        self.expand_icon = Some(icon);
        self
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the loading flag.
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Install the item's own handler for `channel`.
    pub fn with_handler(mut self, channel: Channel, handler: impl FnMut(&E) + 'static) -> Self {
        self.handlers.set(channel, handler);
        self
    }

    /// Update the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Update the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// The handler table.
    pub fn handlers_mut(&mut self) -> &mut ChannelHandlers<E> {
        &mut self.handlers
    }

    /// Instance id.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The item key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The key reported upward; the item key unless [`with_index`](Self::with_index) was used.
    pub fn index(&self) -> &K {
        self.index.as_ref().unwrap_or(&self.key)
    }

    /// Display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Leading icon.
    pub fn icon(&self) -> Option<&N> {
        self.icon.as_ref()
    }

    /// Expansion icon.
    pub fn expand_icon(&self) -> Option<&N> {
        self.expand_icon.as_ref()
    }

    /// Whether the item is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the item is loading.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The gate that currently blocks activation, if any.
    pub fn gate(&self) -> Option<Gate> {
        if self.disabled {
            Some(Gate::Disabled)
        } else if self.loading {
            Some(Gate::Loading)
        } else {
            None
        }
    }

    /// Channels with a caller handler.
    pub fn bound_channels(&self) -> ChannelSet {
        self.handlers.bound()
    }

    /// Status of this item under `selected_keys`.
    pub fn status(&self, selected_keys: &[K]) -> ItemStatus {
        ItemStatus::of(self.index(), selected_keys)
    }

    /// Build the renderer-facing view.
    pub fn view<'a>(&'a self, selected_keys: &'a [K], mode: MenuMode) -> ItemView<'a, K> {
        ItemView {
            id: self.id,
            key: &self.key,
            index: self.index(),
            label: self.label(),
            status: self.status(selected_keys),
            disabled: self.disabled,
            loading: self.loading,
            mode,
            selected_keys,
            channels: self.bound_channels(),
        }
    }

    /// Handle one activation arriving on `channel`.
    ///
    /// A disabled or loading item swallows the event. Otherwise `select` receives the
    /// reported key first, then the item's own handler for `channel` runs.
    pub fn activate(
        &mut self,
        channel: Channel,
        event: &E,
        select: impl FnOnce(&K, &E),
    ) -> Activation {
        if let Some(gate) = self.gate() {
            tracing::trace!(
                target: "understory_menu::item",
                key = ?self.key,
                ?channel,
                ?gate,
                "activation suppressed"
            );
            return Activation::Suppressed(gate);
        }
        select(self.index(), event);
        self.handlers.call(channel, event);
        Activation::Activated
    }

    /// Render this item through `renderer`.
    ///
    /// `inherited_expand_icon` is used when the item has no expansion icon of its own.
    pub fn render<R>(
        &self,
        renderer: &mut R,
        selected_keys: &[K],
        mode: MenuMode,
        inherited_expand_icon: Option<&N>,
    ) -> Option<N>
    where
        R: ItemRender<K, Node = N>,
        N: Clone,
    {
        let view = self.view(selected_keys, mode);
        let icon = self.icon.clone().map(|icon| renderer.icon(&view, icon));
        let expand_icon = self
            .expand_icon
            .as_ref()
            .or(inherited_expand_icon)
            .cloned()
            .map(|icon| renderer.expand_icon(&view, icon));
        let main = renderer.main(&view, ItemParts { icon, expand_icon });
        renderer.container(&view, main)
    }
}

impl<K: fmt::Debug, E, N: fmt::Debug> fmt::Debug for MenuItem<K, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("index", &self.index)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("expand_icon", &self.expand_icon)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .field("handlers", &self.handlers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdSource;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    fn item(key: &'static str) -> MenuItem<&'static str, u32> {
        MenuItem::new(IdSource::new().next_id(), key)
    }

    #[test]
    fn status_projection() {
        let item = item("1");
        assert_eq!(item.status(&["1", "2"]), ItemStatus::Selected);
        assert_eq!(item.status(&["2"]), ItemStatus::Normal);
        assert_eq!(item.status(&[]), ItemStatus::Normal);
    }

    #[test]
    fn select_runs_before_own_handler() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let handler_order = order.clone();
        let mut item = item("1").with_handler(Channel::Click, move |e| {
            handler_order.borrow_mut().push(("handler", *e));
        });

        let outcome = item.activate(Channel::Click, &5, |key, e| {
            order.borrow_mut().push((*key, *e));
        });

        assert_eq!(outcome, Activation::Activated);
        assert_eq!(*order.borrow(), [("1", 5), ("handler", 5)]);
    }

    #[test]
    fn unbound_channel_still_selects() {
        let mut item = item("1").with_handler(Channel::Press, |_| panic!("wrong channel"));
        let selected = Cell::new(false);
        item.activate(Channel::TouchEnd, &0, |_, _| selected.set(true));
        assert!(selected.get());
    }

    #[test]
    fn disabled_and_loading_swallow_everything() {
        let calls = Rc::new(Cell::new(0));
        let handler_calls = calls.clone();
        let mut item = item("1")
            .with_disabled(true)
            .with_handler(Channel::Click, move |_| handler_calls.set(handler_calls.get() + 1));

        for channel in Channel::ALL {
            let outcome = item.activate(channel, &0, |_, _| calls.set(calls.get() + 1));
            assert_eq!(outcome, Activation::Suppressed(Gate::Disabled));
        }

        item.set_disabled(false);
        item.set_loading(true);
        let outcome = item.activate(Channel::Click, &0, |_, _| calls.set(calls.get() + 1));
        assert_eq!(outcome, Activation::Suppressed(Gate::Loading));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn index_overrides_reported_key() {
        let mut item = item("row-1").with_index("1");
        let mut reported = None;
        item.activate(Channel::Click, &0, |key, _| reported = Some(*key));
        assert_eq!(reported, Some("1"));
        assert_eq!(item.status(&["1"]), ItemStatus::Selected);
        assert_eq!(item.status(&["row-1"]), ItemStatus::Normal);
    }

    #[test]
    fn view_reports_bound_channels() {
        let item = item("1")
            .with_label("One")
            .with_handler(Channel::Click, |_| {})
            .with_handler(Channel::Press, |_| {});
        let view = item.view(&["1"], MenuMode::Horizontal);
        assert_eq!(view.channels, ChannelSet::CLICK | ChannelSet::PRESS);
        assert_eq!(view.label, Some("One"));
        assert!(view.status.is_selected());
        assert_eq!(view.mode, MenuMode::Horizontal);
    }
}
