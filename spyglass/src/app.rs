#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use iced::keyboard::{self, Modifiers};
use iced::{Element, Point, Size, Subscription, Task, Theme, window};
use spyglass_ui_sources::{
    IntentQueue, ProjectRoot, RowDescription, RowMessage, SourceNode,
    SourceTreeHost, SourcesTreeItem, TreeItemProps, TreeItemSettings,
    VisibleRow, find_node, visible_rows,
};

use crate::context_menu::OpenMenu;
use crate::fixture::{self, SourceTree};

pub(crate) const WINDOW_WIDTH: f32 = 480.0;
pub(crate) const WINDOW_HEIGHT: f32 = 640.0;

const SETTINGS_ENV: &str = "SPYGLASS_SETTINGS";

/// Events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    Row { path: String, event: RowMessage },
    MenuEntryPressed(usize),
    MenuDismissed,
    CursorMoved(Point),
    Keyboard(keyboard::Event),
    Window(window::Event),
}

/// Root application state.
///
/// Owns everything a tree item only reads: the tree, expansion, focus,
/// selection and the project root. Row handlers report through `host`, and
/// `update` drains `queue` to apply what they asked for.
pub(crate) struct App {
    tree: SourceTree,
    expanded: HashSet<String>,
    focused: Option<String>,
    selected: Option<String>,
    project_root: ProjectRoot,
    settings: TreeItemSettings,
    queue: Rc<IntentQueue>,
    host: Rc<dyn SourceTreeHost>,
    menu: Option<OpenMenu>,
    cursor: Point,
    modifiers: Modifiers,
    area_size: Size,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<Message>) {
        let fixture_path = std::env::args_os().nth(1).map(PathBuf::from);
        let tree = fixture::load_initial_tree(fixture_path.as_deref());
        let settings = load_settings(
            std::env::var_os(SETTINGS_ENV).map(PathBuf::from).as_deref(),
        );

        (Self::with_tree(tree, settings), Task::none())
    }

    pub(crate) fn with_tree(
        tree: SourceTree,
        settings: TreeItemSettings,
    ) -> Self {
        let queue = Rc::new(IntentQueue::new());
        let host: Rc<dyn SourceTreeHost> = queue.clone();

        Self {
            tree,
            expanded: HashSet::new(),
            focused: None,
            selected: None,
            project_root: ProjectRoot::none(),
            settings,
            queue,
            host,
            menu: None,
            cursor: Point::ORIGIN,
            modifiers: Modifiers::default(),
            area_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        if self.project_root.is_set() {
            format!("Spyglass: {}", self.project_root.normalized())
        } else {
            String::from("Spyglass")
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        let key_subs = keyboard::listen().map(Message::Keyboard);
        let win_subs =
            window::events().map(|(_id, event)| Message::Window(event));
        Subscription::batch([key_subs, win_subs])
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Top-level nodes to list: the project root directory alone when it is
    /// set and present in the tree, otherwise the whole tree.
    fn listed_nodes(&self) -> &[SourceNode] {
        if self.project_root.is_set() {
            if let Some(node) =
                find_root_directory(&self.tree.nodes, &self.project_root)
            {
                return std::slice::from_ref(node);
            }
        }
        &self.tree.nodes
    }

    fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        visible_rows(
            self.listed_nodes(),
            &self.expanded,
            self.focused.as_deref(),
        )
    }

    fn item<'a>(&'a self, row: &VisibleRow<'a>) -> SourcesTreeItem<'a> {
        SourcesTreeItem::new(
            TreeItemProps {
                item: row.node,
                state: row.state,
                project_root: &self.project_root,
                debuggee_url: self.tree.debuggee_url.as_deref(),
            },
            &self.host,
            &self.settings,
        )
    }

    /// Rows that render, keyed by node path, in display order.
    fn rendered_rows(&self) -> Vec<(String, RowDescription)> {
        self.visible_rows()
            .iter()
            .filter_map(|row| {
                let description = self.item(row).render()?;
                Some((row.node.path().to_string(), description))
            })
            .collect()
    }

    /// Run `action` against the visible item at `path`.
    fn with_row_item(
        &self,
        path: &str,
        action: impl FnOnce(&SourcesTreeItem<'_>),
    ) -> bool {
        let rows = self.visible_rows();
        match rows.iter().find(|row| row.node.path() == path) {
            Some(row) => {
                action(&self.item(row));
                true
            },
            None => {
                log::warn!("no visible row for {path}");
                false
            },
        }
    }

    /// Status line for the selected node.
    fn selection_status(&self) -> String {
        let Some(path) = self.selected.as_deref() else {
            return String::from("Nothing selected");
        };
        match find_node(&self.tree.nodes, path)
            .and_then(SourceNode::descriptor)
        {
            Some(source) => source.url.clone(),
            None => path.to_string(),
        }
    }
}

/// Depth-first search for the directory matching `project_root`.
fn find_root_directory<'a>(
    nodes: &'a [SourceNode],
    project_root: &ProjectRoot,
) -> Option<&'a SourceNode> {
    nodes.iter().find_map(|node| match node {
        SourceNode::Directory { contents, .. } => {
            if project_root.matches(node.path()) {
                Some(node)
            } else {
                find_root_directory(contents, project_root)
            }
        },
        SourceNode::Source { .. } => None,
    })
}

/// Settings from `path` when given, otherwise defaults.
fn load_settings(path: Option<&Path>) -> TreeItemSettings {
    let Some(path) = path else {
        return TreeItemSettings::default();
    };
    match TreeItemSettings::load(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "failed to load tree settings from {}, using defaults: {err}",
                path.display()
            );
            TreeItemSettings::default()
        },
    }
}
