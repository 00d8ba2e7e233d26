use std::cell::RefCell;

use iced::Point;

use crate::menu::MenuEntry;
use crate::model::SourceNode;

/// Collaborators a tree item reports to.
///
/// Every call is fire-and-forget; implementors that need to mutate
/// their own state use interior mutability.
pub trait SourceTreeHost {
    fn select_item(&self, node: &SourceNode);
    fn focus_item(&self, node: &SourceNode);
    /// Request `node` to become `expanded`. `recursive` carries the
    /// expand-all modifier.
    fn set_expanded(&self, node: &SourceNode, expanded: bool, recursive: bool);
    fn set_project_directory_root(&self, node: &SourceNode);
    fn clear_project_directory_root(&self);
    fn copy_to_clipboard(&self, text: &str);
    /// Present a context menu built for the row that received `event`.
    fn show_menu(&self, event: &dyn ContextMenuEvent, entries: Vec<MenuEntry>);
}

/// Host-side context-menu event as seen by a tree item.
pub trait ContextMenuEvent {
    /// Suppress the host's native menu.
    fn prevent_default(&mut self);
    /// Keep the event from reaching parent rows.
    fn stop_propagation(&mut self);
    /// Cursor position the menu should be anchored to.
    fn position(&self) -> Point;
}

/// Plain pointer event used by the iced row view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl PointerEvent {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl ContextMenuEvent for PointerEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn position(&self) -> Point {
        self.position
    }
}

/// A host call recorded by [`IntentQueue`].
#[derive(Debug, Clone)]
pub enum TreeIntent {
    SelectItem {
        path: String,
    },
    FocusItem {
        path: String,
    },
    SetExpanded {
        path: String,
        expanded: bool,
        recursive: bool,
    },
    SetProjectDirectoryRoot {
        path: String,
    },
    ClearProjectDirectoryRoot,
    CopyToClipboard {
        text: String,
    },
    ShowMenu {
        position: Point,
        entries: Vec<MenuEntry>,
    },
}

/// Host that records every call as a [`TreeIntent`], in order, for an
/// update loop to drain and route.
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: RefCell<Vec<TreeIntent>>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded intents, leaving the queue empty.
    pub fn drain(&self) -> Vec<TreeIntent> {
        self.intents.take()
    }

    pub fn len(&self) -> usize {
        self.intents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.borrow().is_empty()
    }

    fn push(&self, intent: TreeIntent) {
        self.intents.borrow_mut().push(intent);
    }
}

impl SourceTreeHost for IntentQueue {
    fn select_item(&self, node: &SourceNode) {
        self.push(TreeIntent::SelectItem {
            path: node.path().to_string(),
        });
    }

    fn focus_item(&self, node: &SourceNode) {
        self.push(TreeIntent::FocusItem {
            path: node.path().to_string(),
        });
    }

    fn set_expanded(&self, node: &SourceNode, expanded: bool, recursive: bool) {
        self.push(TreeIntent::SetExpanded {
            path: node.path().to_string(),
            expanded,
            recursive,
        });
    }

    fn set_project_directory_root(&self, node: &SourceNode) {
        self.push(TreeIntent::SetProjectDirectoryRoot {
            path: node.path().to_string(),
        });
    }

    fn clear_project_directory_root(&self) {
        self.push(TreeIntent::ClearProjectDirectoryRoot);
    }

    fn copy_to_clipboard(&self, text: &str) {
        self.push(TreeIntent::CopyToClipboard {
            text: text.to_string(),
        });
    }

    fn show_menu(&self, event: &dyn ContextMenuEvent, entries: Vec<MenuEntry>) {
        self.push(TreeIntent::ShowMenu {
            position: event.position(),
            entries,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> SourceNode {
        SourceNode::directory("folder", "folder/", Vec::new())
            .expect("valid directory")
    }

    #[test]
    fn given_host_calls_when_drained_then_intents_keep_call_order() {
        let queue = IntentQueue::new();
        let node = directory();

        queue.focus_item(&node);
        queue.set_expanded(&node, true, false);
        queue.clear_project_directory_root();

        let intents = queue.drain();
        assert_eq!(intents.len(), 3);
        assert!(
            matches!(&intents[0], TreeIntent::FocusItem { path } if path == "folder/")
        );
        assert!(matches!(
            &intents[1],
            TreeIntent::SetExpanded {
                expanded: true,
                recursive: false,
                ..
            }
        ));
        assert!(matches!(intents[2], TreeIntent::ClearProjectDirectoryRoot));
        assert!(queue.is_empty());
    }

    #[test]
    fn given_menu_request_when_recorded_then_event_position_is_kept() {
        let queue = IntentQueue::new();
        let event = PointerEvent::at(Point::new(12.0, 40.0));

        queue.show_menu(&event, Vec::new());

        match queue.drain().pop() {
            Some(TreeIntent::ShowMenu { position, entries }) => {
                assert_eq!(position, Point::new(12.0, 40.0));
                assert!(entries.is_empty());
            },
            other => panic!("unexpected intent: {other:?}"),
        }
    }

    #[test]
    fn given_pointer_event_when_suppressed_then_flags_are_set() {
        let mut event = PointerEvent::default();

        event.prevent_default();
        event.stop_propagation();

        assert!(event.default_prevented);
        assert!(event.propagation_stopped);
    }
}
