use std::rc::Rc;

use iced::keyboard::{self, key::Named};

use crate::host::{ContextMenuEvent, SourceTreeHost};
use crate::menu::build_menu;
use crate::model::{ProjectRoot, RenderState, SourceNode};
use crate::row::{RowDescription, render};
use crate::settings::TreeItemSettings;

pub const KEY_ENTER: u32 = 13;
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Primary-button click on a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Expand-all modifier held during the click.
    pub alt_key: bool,
}

/// Key press delivered to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDownEvent {
    pub key_code: u32,
}

impl KeyDownEvent {
    pub fn new(key_code: u32) -> Self {
        Self { key_code }
    }

    /// Translate an iced key into a key code; `None` for unmapped keys.
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        let code = match key {
            keyboard::Key::Named(Named::Enter) => KEY_ENTER,
            keyboard::Key::Named(Named::ArrowLeft) => KEY_LEFT,
            keyboard::Key::Named(Named::ArrowUp) => KEY_UP,
            keyboard::Key::Named(Named::ArrowRight) => KEY_RIGHT,
            keyboard::Key::Named(Named::ArrowDown) => KEY_DOWN,
            _ => return None,
        };
        Some(Self::new(code))
    }

    pub fn is_enter(&self) -> bool {
        self.key_code == KEY_ENTER
    }
}

/// Inputs pushed down by the owning tree container.
#[derive(Debug, Clone, Copy)]
pub struct TreeItemProps<'a> {
    pub item: &'a SourceNode,
    pub state: RenderState,
    pub project_root: &'a ProjectRoot,
    pub debuggee_url: Option<&'a str>,
}

/// A single row of the sources tree.
///
/// Holds no state of its own between events: every handler runs to
/// completion and reports to the host at most once per collaborator.
pub struct SourcesTreeItem<'a> {
    props: TreeItemProps<'a>,
    host: &'a Rc<dyn SourceTreeHost>,
    settings: &'a TreeItemSettings,
}

impl<'a> SourcesTreeItem<'a> {
    pub fn new(
        props: TreeItemProps<'a>,
        host: &'a Rc<dyn SourceTreeHost>,
        settings: &'a TreeItemSettings,
    ) -> Self {
        Self {
            props,
            host,
            settings,
        }
    }

    pub fn props(&self) -> &TreeItemProps<'a> {
        &self.props
    }

    /// Suppress the host menu, then ask the host to present ours.
    pub fn on_context_menu(&self, event: &mut dyn ContextMenuEvent) {
        event.prevent_default();
        event.stop_propagation();

        let entries = build_menu(
            self.props.item,
            self.props.project_root,
            self.host,
            &self.settings.menu,
        );
        log::debug!(
            "context menu for {} with {} entries",
            self.props.item.path(),
            entries.len()
        );
        self.host.show_menu(&*event, entries);
    }

    /// Focus the row, then select a source or toggle a directory.
    pub fn on_click(&self, event: ClickEvent) {
        let item = self.props.item;
        self.host.focus_item(item);

        match item {
            SourceNode::Source { .. } => {
                log::debug!("select {}", item.path());
                self.host.select_item(item);
            },
            SourceNode::Directory { .. } => {
                let expanded = !self.props.state.expanded;
                log::debug!(
                    "set expanded {} -> {expanded} (recursive: {})",
                    item.path(),
                    event.alt_key
                );
                self.host.set_expanded(item, expanded, event.alt_key);
            },
        }
    }

    /// Select the row when Enter is pressed while it has focus.
    pub fn on_key_down(&self, event: KeyDownEvent) {
        if event.is_enter() && self.props.state.focused {
            log::debug!("select {} from keyboard", self.props.item.path());
            self.host.select_item(self.props.item);
        }
    }

    /// Describe this row; `None` when it is suppressed.
    pub fn render(&self) -> Option<RowDescription> {
        render(
            self.props.item,
            &self.props.state,
            self.props.project_root,
            self.props.debuggee_url,
            self.settings,
        )
    }
}
