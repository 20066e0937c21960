// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller.
//!
//! A [`Menu`] owns its items and the only [`Selection`] for them. Items report
//! activations upward through [`Menu::activate`]; the host reports input changes
//! through [`Menu::set_selected_keys`] and [`Menu::set_default_selected_keys`]. Each
//! path updates the selection first and then calls the `on_select` callback with the
//! resulting [`SelectEvent`].
//!
//! ## Controlled vs uncontrolled
//!
//! - Leave [`MenuConfig::selected_keys`] unset to let the menu own its selection after
//!   seeding it from [`MenuConfig::default_selected_keys`].
//! - Set it (and keep calling [`Menu::set_selected_keys`]) to drive the selection from
//!   outside. Passing the value the menu already holds does nothing. A new controlled
//!   value is reported through `on_select` only when its set of keys differs from the
//!   current selection.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_menu::{Channel, IdSource, Menu, MenuConfig, MenuItem};
//!
//! let mut ids = IdSource::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = log.clone();
//!
//! let items = ["1", "2", "3"]
//!     .map(|key| MenuItem::<_, (), ()>::new(ids.next_id(), key).with_disabled(key == "3"));
//! let mut menu = Menu::builder(ids.next_id())
//!     .with_config(MenuConfig::new().with_multiple(true))
//!     .with_items(items)
//!     .with_on_select(move |change| sink.borrow_mut().push(change.selected_keys.to_vec()))
//!     .build();
//!
//! menu.activate(&"1", Channel::Click, ()).unwrap();
//! menu.activate(&"2", Channel::Click, ()).unwrap();
//! menu.activate(&"3", Channel::Click, ()).unwrap(); // disabled
//! assert_eq!(menu.selected_keys(), &["1", "2"]);
//! assert_eq!(*log.borrow(), [vec!["1"], vec!["1", "2"]]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_selection::{
    Selection, SelectionChange, SelectionKey, SelectionMode, SelectionState, SyncStatus,
};

use crate::channel::Channel;
use crate::error::{MenuError, ensure_unique_keys};
use crate::id::ComponentId;
use crate::item::{Activation, ItemStatus, MenuItem};
use crate::render::{MenuRender, MenuView};

/// Layout hint passed through to renderers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuMode {
    /// Items stacked vertically.
    #[default]
    Vertical,
    /// Items laid out in a row.
    Horizontal,
    /// Vertical, with nested content shown inline.
    Inline,
}

/// Payload of the `on_select` callback.
///
/// `key` and `event` are set for user toggles and empty for controlled syncs.
pub type SelectEvent<'a, K, E> = SelectionChange<'a, K, E>;

type SelectHandler<K, E> = Box<dyn FnMut(&SelectEvent<'_, K, E>)>;

/// Menu configuration.
#[derive(Clone, Debug)]
pub struct MenuConfig<K> {
    /// Allow several items to be selected at once.
    pub multiple: bool,
    /// Layout hint.
    pub mode: MenuMode,
    /// Controlled selection.
    pub selected_keys: Option<Vec<K>>,
    /// Initial selection when uncontrolled.
    pub default_selected_keys: Option<Vec<K>>,
}

impl<K> MenuConfig<K> {
    /// Single selection, vertical, uncontrolled with nothing selected.
    pub fn new() -> Self {
        Self {
            multiple: false,
            mode: MenuMode::Vertical,
            selected_keys: None,
            default_selected_keys: None,
        }
    }

    /// Set [`multiple`](Self::multiple).
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set [`mode`](Self::mode).
    pub fn with_mode(mut self, mode: MenuMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the controlled selection.
    pub fn with_selected_keys(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.selected_keys = Some(keys.into_iter().collect());
        self
    }

    /// Set the initial selection.
    pub fn with_default_selected_keys(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.default_selected_keys = Some(keys.into_iter().collect());
        self
    }
}

impl<K> Default for MenuConfig<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Menu`].
pub struct MenuBuilder<K, E, N = ()> {
    id: ComponentId,
    config: MenuConfig<K>,
    items: Vec<MenuItem<K, E, N>>,
    expand_icon: Option<N>,
    on_select: Option<SelectHandler<K, E>>,
}

impl<K: SelectionKey, E, N> MenuBuilder<K, E, N> {
    /// Replace the configuration.
    pub fn with_config(mut self, config: MenuConfig<K>) -> Self {
        self.config = config;
        self
    }

    /// Append items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = MenuItem<K, E, N>>) -> Self {
        self.items.extend(items);
        self
    }

    /// Append one item.
    pub fn with_item(mut self, item: MenuItem<K, E, N>) -> Self {
        self.items.push(item);
        self
    }

    /// Expansion icon for items that do not set their own.
    pub fn with_expand_icon(mut self, icon: N) -> Self {
        self.expand_icon = Some(icon);
        self
    }

    /// Selection callback.
    pub fn with_on_select(mut self, on_select: impl FnMut(&SelectEvent<'_, K, E>) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Mount the menu. Duplicate item keys are left to the caller.
    pub fn build(self) -> Menu<K, E, N> {
        let mut menu = Menu {
            id: self.id,
            mode: self.config.mode,
            expand_icon: self.expand_icon,
            items: self.items,
            selected_keys: self.config.selected_keys,
            default_selected_keys: self.config.default_selected_keys,
            selection: Selection::new(SelectionMode::from_multiple(self.config.multiple)),
            on_select: self.on_select,
        };
        menu.mount();
        menu
    }

    /// Mount the menu, rejecting duplicate item keys.
    pub fn try_build(self) -> Result<Menu<K, E, N>, MenuError<K>> {
        ensure_unique_keys(&self.items)?;
        Ok(self.build())
    }
}

impl<K: fmt::Debug, E, N: fmt::Debug> fmt::Debug for MenuBuilder<K, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBuilder")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("items", &self.items)
            .field("expand_icon", &self.expand_icon)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Headless menu: items plus the selection controller.
pub struct Menu<K, E, N = ()> {
    id: ComponentId,
    mode: MenuMode,
    expand_icon: Option<N>,
    items: Vec<MenuItem<K, E, N>>,
    selected_keys: Option<Vec<K>>,
    default_selected_keys: Option<Vec<K>>,
    selection: Selection<K, E>,
    on_select: Option<SelectHandler<K, E>>,
}

impl<K: SelectionKey, E, N> Menu<K, E, N> {
    /// Start building a menu with instance id `id`.
    pub fn builder(id: ComponentId) -> MenuBuilder<K, E, N> {
        MenuBuilder {
            id,
            config: MenuConfig::new(),
            items: Vec::new(),
            expand_icon: None,
            on_select: None,
        }
    }

    /// Mount a menu without a callback.
    pub fn new(
        id: ComponentId,
        config: MenuConfig<K>,
        items: impl IntoIterator<Item = MenuItem<K, E, N>>,
    ) -> Self {
        Self::builder(id).with_config(config).with_items(items).build()
    }

    fn mount(&mut self) {
        tracing::trace!(
            target: "understory_menu",
            id = self.id.get(),
            items = self.items.len(),
            "mounting menu"
        );
        let change = self
            .selection
            .mount(self.selected_keys.as_deref(), self.default_selected_keys.as_deref());
        notify(&mut self.on_select, change);
    }

    /// Instance id.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Layout hint.
    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Whether several items may be selected.
    pub fn is_multiple(&self) -> bool {
        self.selection.mode().is_multiple()
    }

    /// Reconciliation progress.
    pub fn sync_status(&self) -> SyncStatus {
        self.selection.status()
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem<K, E, N>] {
        &self.items
    }

    /// The item with `key`.
    pub fn item(&self, key: &K) -> Option<&MenuItem<K, E, N>> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// The item with `key`, mutably (for example to toggle its loading flag).
    pub fn item_mut(&mut self, key: &K) -> Option<&mut MenuItem<K, E, N>> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Replace the items. The selection is left as is.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = MenuItem<K, E, N>>) {
        self.items = items.into_iter().collect();
    }

    /// Selected keys in selection order.
    pub fn selected_keys(&self) -> &[K] {
        self.selection.selected_keys()
    }

    /// The full selection state.
    pub fn state(&self) -> &SelectionState<K, E> {
        self.selection.state()
    }

    /// Status of the item with `key`, judged by the key it reports.
    ///
    /// An unknown key is [`ItemStatus::Normal`].
    pub fn item_status(&self, key: &K) -> ItemStatus {
        self.item(key)
            .map_or(ItemStatus::Normal, |item| item.status(self.selected_keys()))
    }

    /// Replace the selection callback.
    pub fn set_on_select(&mut self, on_select: impl FnMut(&SelectEvent<'_, K, E>) + 'static) {
        self.on_select = Some(Box::new(on_select));
    }

    /// Remove the selection callback.
    pub fn clear_on_select(&mut self) {
        self.on_select = None;
    }

    /// Toggle `key` directly, bypassing item gating.
    ///
    /// This is the callback items invoke; hosts that wire items themselves can call it.
    /// A missing or blank key does nothing.
    pub fn toggle(&mut self, key: Option<K>, event: E) {
        let change = self.selection.toggle(key, event);
        notify(&mut self.on_select, change);
    }

    /// Deliver an activation on `channel` to the item with `key`.
    ///
    /// The item applies its disabled/loading gate. If it is not suppressed, its
    /// reported key is toggled, `on_select` is called, and then the item's own handler
    /// for `channel` runs.
    pub fn activate(
        &mut self,
        key: &K,
        channel: Channel,
        event: E,
    ) -> Result<Activation, MenuError<K>>
    where
        E: Clone,
    {
        let Self {
            items,
            selection,
            on_select,
            ..
        } = self;
        let item = items
            .iter_mut()
            .find(|item| item.key() == key)
            .ok_or_else(|| MenuError::UnknownItem(key.clone()))?;
        Ok(item.activate(channel, &event, |index, event| {
            let change = selection.toggle(Some(index.clone()), event.clone());
            notify(on_select, change);
        }))
    }

    /// Update the controlled selection and reconcile.
    ///
    /// An unchanged value is ignored, so user toggles made since the last change stand.
    pub fn set_selected_keys(&mut self, keys: Option<Vec<K>>) {
        if self.selected_keys == keys {
            return;
        }
        self.selected_keys = keys;
        self.reconcile();
    }

    /// Update the initial selection and reconcile.
    ///
    /// After mount the default no longer changes the selection; this only re-applies
    /// the controlled keys, as any input change does.
    pub fn set_default_selected_keys(&mut self, keys: Option<Vec<K>>) {
        if self.default_selected_keys == keys {
            return;
        }
        self.default_selected_keys = keys;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let change = self.selection.reconcile(
            self.selected_keys.as_deref(),
            self.default_selected_keys.as_deref(),
        );
        notify(&mut self.on_select, change);
    }

    /// Build the renderer-facing view.
    pub fn view(&self) -> MenuView<'_, K> {
        MenuView {
            id: self.id,
            mode: self.mode,
            multiple: self.is_multiple(),
            selected_keys: self.selected_keys(),
        }
    }

    /// Render every item and then the menu around them.
    ///
    /// Items that render to nothing are skipped.
    pub fn render<R>(&self, renderer: &mut R) -> Option<N>
    where
        R: MenuRender<K, Node = N>,
        N: Clone,
    {
        let selected = self.selected_keys();
        let nodes = self
            .items
            .iter()
            .filter_map(|item| {
                item.render(renderer, selected, self.mode, self.expand_icon.as_ref())
            })
            .collect();
        let view = self.view();
        let main = renderer.menu_main(&view, nodes);
        renderer.menu_container(&view, main)
    }
}

fn notify<K, E>(on_select: &mut Option<SelectHandler<K, E>>, change: Option<SelectEvent<'_, K, E>>) {
    if let (Some(on_select), Some(change)) = (on_select.as_mut(), change) {
        on_select(&change);
    }
}

impl<K: fmt::Debug, E, N: fmt::Debug> fmt::Debug for Menu<K, E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("expand_icon", &self.expand_icon)
            .field("items", &self.items)
            .field("selected_keys", &self.selected_keys)
            .field("default_selected_keys", &self.default_selected_keys)
            .field("selection", &self.selection.state().selected_keys)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdSource;
    use crate::item::{Gate, ItemView};
    use crate::render::{ItemParts, ItemRender};
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<(Option<&'static str>, Vec<&'static str>)>>>;

    fn items(ids: &mut IdSource) -> Vec<MenuItem<&'static str, u32, String>> {
        vec![
            MenuItem::new(ids.next_id(), "1").with_label("MenuItem1").with_icon(String::from("i")),
            MenuItem::new(ids.next_id(), "2").with_label("MenuItem2").with_icon(String::from("i")),
            MenuItem::new(ids.next_id(), "3")
                .with_label("MenuItem3")
                .with_icon(String::from("i"))
                .with_disabled(true),
        ]
    }

    fn menu(config: MenuConfig<&'static str>) -> (Menu<&'static str, u32, String>, Log) {
        let mut ids = IdSource::new();
        let log: Log = Rc::default();
        let sink = log.clone();
        let menu = Menu::builder(ids.next_id())
            .with_config(config)
            .with_items(items(&mut ids))
            .with_on_select(move |change| {
                sink.borrow_mut()
                    .push((change.key.copied(), change.selected_keys.to_vec()));
            })
            .build();
        (menu, log)
    }

    fn assert_projection(menu: &Menu<&'static str, u32, String>) {
        for item in menu.items() {
            let expected = menu.selected_keys().contains(item.key());
            assert_eq!(item.status(menu.selected_keys()).is_selected(), expected);
            assert_eq!(menu.item_status(item.key()).is_selected(), expected);
        }
    }

    #[test]
    fn single_selection_replaces_and_deselects() {
        let (mut menu, log) = menu(MenuConfig::new().with_selected_keys(["1"]));
        assert_eq!(menu.selected_keys(), &["1"]);

        menu.activate(&"1", Channel::Click, 0).unwrap();
        assert!(menu.selected_keys().is_empty());
        assert_projection(&menu);

        menu.activate(&"1", Channel::Click, 0).unwrap();
        menu.activate(&"2", Channel::Click, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["2"]);
        assert_projection(&menu);

        assert_eq!(
            *log.borrow(),
            [
                (Some("1"), vec![]),
                (Some("1"), vec!["1"]),
                (Some("2"), vec!["2"])
            ]
        );
    }

    #[test]
    fn multiple_selection_accumulates_in_order() {
        let (mut menu, log) = menu(
            MenuConfig::new()
                .with_multiple(true)
                .with_default_selected_keys([]),
        );

        menu.activate(&"1", Channel::Click, 0).unwrap();
        menu.activate(&"2", Channel::TouchEnd, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["1", "2"]);
        assert_projection(&menu);

        menu.activate(&"2", Channel::Press, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["1"]);
        assert_eq!(log.borrow().last().unwrap().1, ["1"]);
        assert_projection(&menu);
    }

    #[test]
    fn disabled_item_never_toggles_or_notifies() {
        let (mut menu, log) = menu(MenuConfig::new().with_multiple(true));
        for channel in Channel::ALL {
            let outcome = menu.activate(&"3", channel, 0).unwrap();
            assert_eq!(outcome, Activation::Suppressed(Gate::Disabled));
        }
        assert!(menu.selected_keys().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn loading_item_is_gated_until_cleared() {
        let (mut menu, log) = menu(MenuConfig::new());
        menu.item_mut(&"2").unwrap().set_loading(true);
        assert_eq!(
            menu.activate(&"2", Channel::Click, 0),
            Ok(Activation::Suppressed(Gate::Loading))
        );
        assert!(log.borrow().is_empty());

        menu.item_mut(&"2").unwrap().set_loading(false);
        assert_eq!(menu.activate(&"2", Channel::Click, 0), Ok(Activation::Activated));
        assert_eq!(menu.selected_keys(), &["2"]);
    }

    #[test]
    fn controlled_override_fires_once_per_change() {
        let (mut menu, log) = menu(MenuConfig::new().with_default_selected_keys(["1"]));
        assert_eq!(menu.selected_keys(), &["1"]);
        assert!(log.borrow().is_empty());

        menu.set_selected_keys(Some(vec!["2"]));
        assert_eq!(menu.selected_keys(), &["2"]);
        assert_eq!(*log.borrow(), [(None, vec!["2"])]);
        assert_projection(&menu);

        menu.set_selected_keys(Some(vec!["2"]));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn unchanged_controlled_value_keeps_user_toggle() {
        let (mut menu, log) = menu(MenuConfig::new().with_selected_keys(["1"]));
        menu.activate(&"2", Channel::Click, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["2"]);

        menu.set_selected_keys(Some(vec!["1"]));
        assert_eq!(menu.selected_keys(), &["2"]);
        assert_eq!(*log.borrow(), [(Some("2"), vec!["2"])]);

        menu.set_default_selected_keys(None);
        assert_eq!(log.borrow().len(), 1);

        menu.set_selected_keys(Some(vec!["3"]));
        assert_eq!(menu.selected_keys(), &["3"]);
        assert_eq!(log.borrow().last(), Some(&(None, vec!["3"])));
    }

    #[test]
    fn menu_select_runs_before_item_handler() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let item_order = order.clone();
        let menu_order = order.clone();
        let mut ids = IdSource::new();
        let mut menu = Menu::<&str, u32, ()>::builder(ids.next_id())
            .with_item(MenuItem::new(ids.next_id(), "1").with_handler(
                Channel::Click,
                move |e| item_order.borrow_mut().push(("item", *e)),
            ))
            .with_on_select(move |change| {
                menu_order
                    .borrow_mut()
                    .push(("menu", change.event.copied().unwrap_or_default()));
            })
            .build();

        menu.activate(&"1", Channel::Click, 7).unwrap();
        assert_eq!(*order.borrow(), [("menu", 7), ("item", 7)]);
        assert_eq!(menu.state().source_event, Some(7));
    }

    #[test]
    fn item_status_follows_reported_index() {
        let mut ids = IdSource::new();
        let mut menu = Menu::<&str, u32, ()>::builder(ids.next_id())
            .with_item(MenuItem::new(ids.next_id(), "row-1").with_index("1"))
            .build();

        menu.activate(&"row-1", Channel::Click, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["1"]);
        assert_eq!(menu.item_status(&"row-1"), ItemStatus::Selected);
        assert_eq!(menu.item(&"row-1").unwrap().status(menu.selected_keys()), ItemStatus::Selected);
        assert_eq!(menu.item_status(&"missing"), ItemStatus::Normal);
    }

    #[test]
    fn default_change_after_mount_is_ignored() {
        let (mut menu, log) = menu(MenuConfig::new().with_default_selected_keys(["1"]));
        menu.set_default_selected_keys(Some(vec!["2"]));
        assert_eq!(menu.selected_keys(), &["1"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn controlled_and_default_at_mount_reports_controlled() {
        let (menu, log) = menu(
            MenuConfig::new()
                .with_selected_keys(["2"])
                .with_default_selected_keys(["1"]),
        );
        assert_eq!(menu.selected_keys(), &["2"]);
        assert_eq!(*log.borrow(), [(None, vec!["2"])]);
        assert_eq!(menu.sync_status(), SyncStatus::Succeeded);
    }

    #[test]
    fn round_trip_restores_sequence() {
        let (mut menu, _) = menu(
            MenuConfig::new()
                .with_multiple(true)
                .with_default_selected_keys(["2"]),
        );
        menu.activate(&"1", Channel::Click, 0).unwrap();
        menu.activate(&"1", Channel::Click, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["2"]);
    }

    #[test]
    fn event_is_forwarded_with_the_toggle() {
        let (mut menu, _) = menu(MenuConfig::new());
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        menu.set_on_select(move |change| *sink.borrow_mut() = change.event.copied());

        menu.activate(&"1", Channel::Click, 42).unwrap();
        assert_eq!(*seen.borrow(), Some(42));
        assert_eq!(menu.state().source_event, Some(42));
        assert_eq!(menu.state().last_changed_key, Some("1"));
    }

    #[test]
    fn blank_key_toggle_is_a_no_op() {
        let (mut menu, log) = menu(MenuConfig::new().with_selected_keys(["1"]));
        menu.toggle(Some(""), 0);
        menu.toggle(None, 0);
        assert_eq!(menu.selected_keys(), &["1"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unknown_item_is_an_error() {
        let (mut menu, log) = menu(MenuConfig::new());
        assert_eq!(
            menu.activate(&"9", Channel::Click, 0),
            Err(MenuError::UnknownItem("9"))
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn try_build_rejects_duplicates() {
        let mut ids = IdSource::new();
        let result = Menu::<&str, (), ()>::builder(ids.next_id())
            .with_item(MenuItem::new(ids.next_id(), "a"))
            .with_item(MenuItem::new(ids.next_id(), "a"))
            .try_build();
        assert_eq!(result.unwrap_err(), MenuError::DuplicateKey("a"));
    }

    #[test]
    fn cleared_callback_is_not_called() {
        let (mut menu, log) = menu(MenuConfig::new());
        menu.clear_on_select();
        menu.activate(&"1", Channel::Click, 0).unwrap();
        assert_eq!(menu.selected_keys(), &["1"]);
        assert!(log.borrow().is_empty());
    }

    /// Renders each slot as a bracketed string.
    struct Markup;

    impl ItemRender<&'static str> for Markup {
        type Node = String;

        fn icon(&mut self, view: &ItemView<'_, &'static str>, icon: String) -> String {
            format!("<i data-key={}>{icon}</i>", view.key)
        }

        fn main(
            &mut self,
            view: &ItemView<'_, &'static str>,
            parts: ItemParts<String>,
        ) -> Option<String> {
            Some(format!(
                "{}{}{}",
                parts.icon.unwrap_or_default(),
                view.label.unwrap_or_default(),
                parts.expand_icon.unwrap_or_default()
            ))
        }

        fn container(
            &mut self,
            view: &ItemView<'_, &'static str>,
            main: Option<String>,
        ) -> Option<String> {
            let status = if view.status.is_selected() { "selected" } else { "normal" };
            main.map(|main| format!("<li data-id={} data-status={status}>{main}</li>", view.id))
        }
    }

    impl MenuRender<&'static str> for Markup {
        fn menu_main(&mut self, _view: &MenuView<'_, &'static str>, items: Vec<String>) -> Option<String> {
            Some(items.concat())
        }

        fn menu_container(
            &mut self,
            view: &MenuView<'_, &'static str>,
            main: Option<String>,
        ) -> Option<String> {
            Some(format!("<ul data-id={}>{}</ul>", view.id, main.unwrap_or_default()))
        }
    }

    #[test]
    fn render_composes_items_inside_menu() {
        let mut ids = IdSource::new();
        let mut menu: Menu<&'static str, u32, String> = Menu::builder(ids.next_id())
            .with_config(MenuConfig::new().with_selected_keys(["2"]))
            .with_item(MenuItem::new(ids.next_id(), "1").with_label("One").with_icon(String::from("*")))
            .with_item(
                MenuItem::new(ids.next_id(), "2")
                    .with_label("Two")
                    .with_expand_icon(String::from(">>")),
            )
            .with_expand_icon(String::from(">"))
            .build();

        assert_eq!(
            menu.render(&mut Markup).unwrap(),
            "<ul data-id=understory-1>\
             <li data-id=understory-2 data-status=normal><i data-key=1>*</i>One></li>\
             <li data-id=understory-3 data-status=selected>Two>></li>\
             </ul>"
        );

        menu.activate(&"1", Channel::Click, 0).unwrap();
        let html = menu.render(&mut Markup).unwrap();
        assert!(html.contains("<li data-id=understory-2 data-status=selected>"));
        assert!(html.contains("<li data-id=understory-3 data-status=normal>"));
    }

    /// Implements nothing beyond the node type.
    struct Bare;

    impl ItemRender<&'static str> for Bare {
        type Node = String;
    }

    impl MenuRender<&'static str> for Bare {}

    #[test]
    fn missing_render_slots_render_nothing() {
        let (menu, _) = menu(MenuConfig::new());
        assert_eq!(menu.render(&mut Bare), None);
    }
}
