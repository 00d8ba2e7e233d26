//! Source tree items for a debugger sources panel, with an [`iced`] row view.
//!
//! The crate is split into three layers:
//! - model helpers ([`SourceNode`], [`ProjectRoot`], [`visible_rows`]) that
//!   are UI-agnostic;
//! - the row component ([`SourcesTreeItem`]) that turns clicks, key presses
//!   and context-menu requests into calls on a [`SourceTreeHost`];
//! - view helpers ([`row_view`]) that draw a [`RowDescription`] in `iced`.
//!
//! The recommended flow for an interactive tree:
//! 1. keep the tree, expanded paths, focus and project root in app state;
//! 2. call [`visible_rows`] in `view` and build a [`SourcesTreeItem`] per row;
//! 3. forward row input to the item handlers with an [`IntentQueue`] as host;
//! 4. drain the queue in `update` and apply each [`TreeIntent`].
//!
//! # Quick Example
//!
//! ```no_run
//! use std::collections::HashSet;
//! use std::rc::Rc;
//!
//! use spyglass_ui_sources::{
//!     ClickEvent, IntentQueue, ProjectRoot, SourceDescriptor, SourceNode,
//!     SourceTreeHost, SourcesTreeItem, TreeIntent, TreeItemProps,
//!     TreeItemSettings, visible_rows,
//! };
//!
//! let source = Rc::new(SourceDescriptor::new("1", "http://mdn.com/one.js"));
//! let tree = vec![
//!     SourceNode::directory(
//!         "mdn.com",
//!         "mdn.com",
//!         vec![SourceNode::source("one.js", "mdn.com/one.js", source)?],
//!     )?,
//! ];
//!
//! let queue = Rc::new(IntentQueue::new());
//! let host: Rc<dyn SourceTreeHost> = queue.clone();
//! let settings = TreeItemSettings::default();
//! let root = ProjectRoot::none();
//!
//! for row in visible_rows(&tree, &HashSet::new(), None) {
//!     let item = SourcesTreeItem::new(
//!         TreeItemProps {
//!             item: row.node,
//!             state: row.state,
//!             project_root: &root,
//!             debuggee_url: Some("http://mdn.com"),
//!         },
//!         &host,
//!         &settings,
//!     );
//!     item.on_click(ClickEvent::default());
//! }
//!
//! for intent in queue.drain() {
//!     if let TreeIntent::SetExpanded { path, expanded, .. } = intent {
//!         println!("{path} -> {expanded}");
//!     }
//! }
//! # Ok::<(), spyglass_ui_sources::SourcesTreeError>(())
//! ```

mod error;
mod host;
mod icons;
mod item;
mod listing;
mod menu;
mod model;
mod origin;
mod row;
mod settings;
#[cfg(test)]
mod testing;
mod view;

pub use error::{Result, SourcesTreeError};
pub use host::{
    ContextMenuEvent, IntentQueue, PointerEvent, SourceTreeHost, TreeIntent,
};
pub use item::{
    ClickEvent, KEY_DOWN, KEY_ENTER, KEY_LEFT, KEY_RIGHT, KEY_UP,
    KeyDownEvent, SourcesTreeItem, TreeItemProps,
};
pub use listing::{VisibleRow, directory_paths, find_node, visible_rows};
pub use menu::{
    COPY_SOURCE_ID, MenuAction, MenuEntry, REMOVE_DIRECTORY_ROOT_ID,
    SET_DIRECTORY_ROOT_ID, build_menu,
};
pub use model::{
    LoadedState, ProjectRoot, RenderState, SourceDescriptor, SourceNode,
};
pub use origin::{OriginKind, classify, is_domain_grouping};
pub use row::{Arrow, RowDescription, RowIcon, SourceIcon, render, source_icon};
pub use settings::{MenuString, MenuStrings, TreeItemSettings};
pub use view::{RowMessage, row_view};
