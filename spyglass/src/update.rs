use iced::keyboard::{self, Key, key::Named};
use iced::{Task, window};
use spyglass_ui_sources::{
    ClickEvent, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP, KeyDownEvent,
    PointerEvent, ProjectRoot, RowMessage, TreeIntent, directory_paths,
    find_node,
};

use super::{App, Message};
use crate::context_menu::OpenMenu;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Row {
            path,
            event: RowMessage::Pressed,
        } => {
            app.menu = None;
            let event = ClickEvent {
                alt_key: app.modifiers.alt(),
            };
            app.with_row_item(&path, |item| item.on_click(event));
            apply_intents(app)
        },
        Message::Row {
            path,
            event: RowMessage::RightPressed,
        } => {
            let mut event = PointerEvent::at(app.cursor);
            app.with_row_item(&path, |item| item.on_context_menu(&mut event));
            log::trace!(
                "context menu event for {path}: prevented={} stopped={}",
                event.default_prevented,
                event.propagation_stopped
            );
            apply_intents(app)
        },
        Message::MenuEntryPressed(index) => click_menu_entry(app, index),
        Message::MenuDismissed => {
            app.menu = None;
            Task::none()
        },
        Message::CursorMoved(position) => {
            app.cursor = position;
            Task::none()
        },
        Message::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            app.modifiers = modifiers;
            Task::none()
        },
        Message::Keyboard(keyboard::Event::KeyPressed {
            key, modifiers, ..
        }) => {
            app.modifiers = modifiers;
            key_pressed(app, &key)
        },
        Message::Keyboard(_) => Task::none(),
        Message::Window(window::Event::Resized(size)) => {
            app.area_size = size;
            Task::none()
        },
        Message::Window(_) => Task::none(),
    }
}

fn key_pressed(app: &mut App, key: &Key) -> Task<Message> {
    if app.menu.is_some() {
        return match key {
            Key::Named(Named::Escape) => {
                app.menu = None;
                Task::none()
            },
            Key::Character(text) => {
                let index = app
                    .menu
                    .as_ref()
                    .and_then(|menu| menu.entry_for_accesskey(text));
                match index {
                    Some(index) => click_menu_entry(app, index),
                    None => Task::none(),
                }
            },
            _ => Task::none(),
        };
    }

    let Some(event) = KeyDownEvent::from_key(key) else {
        return Task::none();
    };
    match event.key_code {
        KEY_UP => move_focus(app, false),
        KEY_DOWN => move_focus(app, true),
        KEY_LEFT => set_focused_expanded(app, false),
        KEY_RIGHT => set_focused_expanded(app, true),
        _ => {
            if let Some(path) = app.focused.clone() {
                app.with_row_item(&path, |item| item.on_key_down(event));
            }
        },
    }
    apply_intents(app)
}

fn click_menu_entry(app: &mut App, index: usize) -> Task<Message> {
    let Some(menu) = app.menu.take() else {
        return Task::none();
    };
    match menu.entries.get(index) {
        Some(entry) => {
            log::debug!("menu entry {} clicked", entry.id);
            entry.click();
        },
        None => log::warn!("menu entry {index} is out of range"),
    }
    apply_intents(app)
}

/// Ask the host to focus the next or previous rendered row.
fn move_focus(app: &App, forward: bool) {
    let rows = app.rendered_rows();
    if rows.is_empty() {
        return;
    }

    let current = app
        .focused
        .as_deref()
        .and_then(|focused| rows.iter().position(|(path, _)| path == focused));
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => rows.len() - 1,
        (Some(index), true) => (index + 1).min(rows.len() - 1),
        (Some(index), false) => index.saturating_sub(1),
    };

    if let Some(node) = find_node(&app.tree.nodes, &rows[next].0) {
        app.host.focus_item(node);
    }
}

/// Ask the host to expand or collapse the focused directory.
fn set_focused_expanded(app: &App, expanded: bool) {
    let node = app
        .focused
        .as_deref()
        .and_then(|path| find_node(&app.tree.nodes, path))
        .filter(|node| node.is_directory());
    if let Some(node) = node {
        app.host.set_expanded(node, expanded, false);
    }
}

/// Apply every intent recorded by the host since the last drain.
fn apply_intents(app: &mut App) -> Task<Message> {
    let mut tasks = Vec::new();

    for intent in app.queue.drain() {
        match intent {
            TreeIntent::SelectItem { path } => {
                log::info!("selected {path}");
                app.selected = Some(path);
            },
            TreeIntent::FocusItem { path } => {
                app.focused = Some(path);
            },
            TreeIntent::SetExpanded {
                path,
                expanded,
                recursive,
            } => set_expanded(app, &path, expanded, recursive),
            TreeIntent::SetProjectDirectoryRoot { path } => {
                log::info!("project root set to {path}");
                app.expanded.insert(path.clone());
                app.project_root = ProjectRoot::new(path);
            },
            TreeIntent::ClearProjectDirectoryRoot => {
                log::info!("project root cleared");
                app.project_root = ProjectRoot::none();
            },
            TreeIntent::CopyToClipboard { text } => {
                log::info!("copied {text} to clipboard");
                tasks.push(iced::clipboard::write(text));
            },
            TreeIntent::ShowMenu { position, entries } => {
                if entries.is_empty() {
                    app.menu = None;
                } else {
                    app.menu = Some(OpenMenu { position, entries });
                }
            },
        }
    }

    Task::batch(tasks)
}

fn set_expanded(app: &mut App, path: &str, expanded: bool, recursive: bool) {
    let paths = match find_node(&app.tree.nodes, path) {
        Some(node) if recursive => directory_paths(node),
        _ => vec![path.to_string()],
    };

    for path in paths {
        if expanded {
            app.expanded.insert(path);
        } else {
            app.expanded.remove(&path);
        }
    }
}
