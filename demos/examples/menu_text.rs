// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text-mode menu driven by scripted activations.
//!
//! This example shows how to combine:
//! - `understory_menu` for the menu controller, item gating and render slots,
//! - `understory_selection` change reports delivered through `on_select`,
//! - a controlled update from the host after mount.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_text`
//! - `RUST_LOG=understory_selection=debug cargo run -p understory_demos --example menu_text`

use understory_menu::{
    Channel, IdSource, ItemParts, ItemRender, ItemView, Menu, MenuConfig, MenuItem, MenuMode,
    MenuRender, MenuView,
};

/// Platform event: which modifier was held.
#[derive(Clone, Copy, Debug)]
struct Pointer {
    shift: bool,
}

/// Renders the menu as indented lines.
struct Lines;

impl ItemRender<&'static str> for Lines {
    type Node = String;

    fn icon(&mut self, _view: &ItemView<'_, &'static str>, icon: String) -> String {
        format!("{icon} ")
    }

    fn main(&mut self, view: &ItemView<'_, &'static str>, parts: ItemParts<String>) -> Option<String> {
        let mark = if view.status.is_selected() { "[x]" } else { "[ ]" };
        let suffix = match (view.disabled, view.loading) {
            (true, _) => " (disabled)",
            (_, true) => " (loading)",
            _ => "",
        };
        Some(format!(
            "{mark} {}{}{suffix}{}",
            parts.icon.unwrap_or_default(),
            view.label.unwrap_or(*view.key),
            parts.expand_icon.unwrap_or_default(),
        ))
    }

    fn container(&mut self, view: &ItemView<'_, &'static str>, main: Option<String>) -> Option<String> {
        main.map(|main| format!("  {main}    #{}", view.id))
    }
}

impl MenuRender<&'static str> for Lines {
    fn menu_main(&mut self, _view: &MenuView<'_, &'static str>, items: Vec<String>) -> Option<String> {
        Some(items.join("\n"))
    }

    fn menu_container(
        &mut self,
        view: &MenuView<'_, &'static str>,
        main: Option<String>,
    ) -> Option<String> {
        let kind = if view.multiple { "multiple" } else { "single" };
        Some(format!("menu {} ({kind}, {:?})\n{}", view.id, view.mode, main.unwrap_or_default()))
    }
}

fn show(menu: &Menu<&'static str, Pointer, String>) {
    if let Some(text) = menu.render(&mut Lines) {
        println!("{text}\n");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut ids = IdSource::new();
    let mut menu: Menu<&'static str, Pointer, String> = Menu::builder(ids.next_id())
        .with_config(
            MenuConfig::new()
                .with_multiple(true)
                .with_mode(MenuMode::Inline)
                .with_default_selected_keys(["open"]),
        )
        .with_items([
            MenuItem::new(ids.next_id(), "new")
                .with_label("New")
                .with_icon(String::from("+")),
            MenuItem::new(ids.next_id(), "open")
                .with_label("Open")
                .with_handler(Channel::Click, |e: &Pointer| {
                    println!("open clicked (shift: {})", e.shift);
                }),
            MenuItem::new(ids.next_id(), "recent").with_label("Recent"),
            MenuItem::new(ids.next_id(), "quit")
                .with_label("Quit")
                .with_disabled(true),
        ])
        .with_expand_icon(String::from(" >"))
        .with_on_select(|change| {
            let origin = match (change.key, change.event) {
                (Some(key), Some(event)) => format!("{key} (shift: {})", event.shift),
                _ => String::from("host"),
            };
            println!("on_select from {origin}: {:?}", change.selected_keys);
        })
        .build();

    show(&menu);

    let script = [
        ("new", Channel::Click, false),
        ("open", Channel::Click, true),
        ("quit", Channel::Press, false),
        ("recent", Channel::TouchEnd, false),
    ];
    for (key, channel, shift) in script {
        match menu.activate(&key, channel, Pointer { shift }) {
            Ok(outcome) => println!("{key} via {channel:?}: {outcome:?}"),
            Err(err) => println!("{err}"),
        }
    }
    show(&menu);

    if let Some(item) = menu.item_mut(&"recent") {
        item.set_loading(true);
    }
    match menu.activate(&"recent", Channel::Click, Pointer { shift: false }) {
        Ok(outcome) => println!("recent while loading: {outcome:?}"),
        Err(err) => println!("{err}"),
    }

    // The host takes over the selection.
    menu.set_selected_keys(Some(vec!["quit"]));
    menu.set_selected_keys(Some(vec!["quit"]));
    show(&menu);

    if let Err(err) = menu.activate(&"missing", Channel::Click, Pointer { shift: false }) {
        println!("{err}");
    }
}
