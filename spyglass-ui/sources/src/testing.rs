//! Fixtures shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use iced::Point;

use crate::host::{ContextMenuEvent, SourceTreeHost};
use crate::menu::MenuEntry;
use crate::model::{SourceDescriptor, SourceNode};

/// Ordered log of calls shared between fakes.
pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

/// Host recording every call as a short string.
#[derive(Default)]
pub(crate) struct RecordingHost {
    calls: Journal,
    menus: RefCell<Vec<Vec<MenuEntry>>>,
}

impl RecordingHost {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Journal that other fakes can append to, interleaved with host calls.
    pub(crate) fn journal(&self) -> Journal {
        Rc::clone(&self.calls)
    }

    /// Entry lists passed to `show_menu`, in call order.
    pub(crate) fn menus(&self) -> Vec<Vec<MenuEntry>> {
        self.menus.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl SourceTreeHost for RecordingHost {
    fn select_item(&self, node: &SourceNode) {
        self.record(format!("select {}", node.path()));
    }

    fn focus_item(&self, node: &SourceNode) {
        self.record(format!("focus {}", node.path()));
    }

    fn set_expanded(&self, node: &SourceNode, expanded: bool, recursive: bool) {
        self.record(format!("expand {} {expanded} {recursive}", node.path()));
    }

    fn set_project_directory_root(&self, node: &SourceNode) {
        self.record(format!("set-root {}", node.path()));
    }

    fn clear_project_directory_root(&self) {
        self.record(String::from("clear-root"));
    }

    fn copy_to_clipboard(&self, text: &str) {
        self.record(format!("copy {text}"));
    }

    fn show_menu(&self, _event: &dyn ContextMenuEvent, entries: Vec<MenuEntry>) {
        self.record(String::from("show-menu"));
        self.menus.borrow_mut().push(entries);
    }
}

/// Context-menu event counting suppression calls.
#[derive(Default)]
pub(crate) struct CountingEvent {
    pub(crate) prevent_default_calls: usize,
    pub(crate) stop_propagation_calls: usize,
    journal: Option<Journal>,
}

impl CountingEvent {
    pub(crate) fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    fn record(&self, call: &str) {
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(call.to_string());
        }
    }
}

impl ContextMenuEvent for CountingEvent {
    fn prevent_default(&mut self) {
        self.prevent_default_calls += 1;
        self.record("prevent-default");
    }

    fn stop_propagation(&mut self) {
        self.stop_propagation_calls += 1;
        self.record("stop-propagation");
    }

    fn position(&self) -> Point {
        Point::ORIGIN
    }
}

pub(crate) fn mock_descriptor() -> Rc<SourceDescriptor> {
    Rc::new(SourceDescriptor::new(
        "server1.conn13.child1/39",
        "http://mdn.com/one.js",
    ))
}

/// The `one.js` source row used as the default item.
pub(crate) fn mock_source() -> SourceNode {
    SourceNode::source("one.js", "mdn.com/one.js", mock_descriptor())
        .expect("valid source")
}

pub(crate) fn mock_directory(
    path: &str,
    name: &str,
    contents: Vec<SourceNode>,
) -> SourceNode {
    SourceNode::directory(name, path, contents).expect("valid directory")
}
