// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render capabilities.
//!
//! Rendering is delegated to the host through two traits whose methods all have
//! defaults. A slot the host does not implement passes its children through unchanged,
//! or renders nothing extra when there is nothing to pass through.
//!
//! ```
//! use understory_menu::item::ItemView;
//! use understory_menu::render::{ItemParts, ItemRender};
//!
//! /// Renders items as plain strings.
//! struct Text;
//!
//! impl ItemRender<&'static str> for Text {
//!     type Node = String;
//!
//!     fn main(&mut self, view: &ItemView<'_, &'static str>, _parts: ItemParts<String>) -> Option<String> {
//!         let mark = if view.status.is_selected() { "*" } else { " " };
//!         Some(format!("{mark}{}", view.label.unwrap_or(*view.key)))
//!     }
//! }
//! ```

use alloc::vec::Vec;

use crate::id::ComponentId;
use crate::item::ItemView;
use crate::menu::MenuMode;

/// Rendered sub-parts handed to [`ItemRender::main`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemParts<N> {
    /// The rendered leading icon.
    pub icon: Option<N>,
    /// The rendered expansion icon.
    pub expand_icon: Option<N>,
}

/// Per-slot rendering of a menu item.
pub trait ItemRender<K> {
    /// Output node type.
    type Node;

    /// Wrap the item's icon. Defaults to the icon itself.
    fn icon(&mut self, _view: &ItemView<'_, K>, icon: Self::Node) -> Self::Node {
        icon
    }

    /// Wrap the expansion icon. Defaults to the icon itself.
    fn expand_icon(&mut self, _view: &ItemView<'_, K>, icon: Self::Node) -> Self::Node {
        icon
    }

    /// Render the item body. Defaults to nothing.
    fn main(&mut self, _view: &ItemView<'_, K>, _parts: ItemParts<Self::Node>) -> Option<Self::Node> {
        None
    }

    /// Wrap the body. Defaults to the body itself.
    fn container(&mut self, _view: &ItemView<'_, K>, main: Option<Self::Node>) -> Option<Self::Node> {
        main
    }
}

/// Read-only description of a menu handed to renderers.
#[derive(Debug)]
pub struct MenuView<'a, K> {
    /// Instance id, for the host to attach as element identity.
    pub id: ComponentId,
    /// Layout hint.
    pub mode: MenuMode,
    /// Whether several items may be selected.
    pub multiple: bool,
    /// Current selection.
    pub selected_keys: &'a [K],
}

/// Rendering of the menu around its items.
pub trait MenuRender<K>: ItemRender<K> {
    /// Lay out the rendered items. Defaults to nothing.
    fn menu_main(&mut self, _view: &MenuView<'_, K>, _items: Vec<Self::Node>) -> Option<Self::Node> {
        None
    }

    /// Wrap the laid out items. Defaults to the layout itself.
    fn menu_container(
        &mut self,
        _view: &MenuView<'_, K>,
        main: Option<Self::Node>,
    ) -> Option<Self::Node> {
        main
    }
}
