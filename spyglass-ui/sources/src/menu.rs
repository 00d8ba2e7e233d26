use std::fmt;
use std::rc::Rc;

use crate::host::SourceTreeHost;
use crate::model::{ProjectRoot, SourceNode};
use crate::settings::{MenuString, MenuStrings};

pub const SET_DIRECTORY_ROOT_ID: &str = "node-set-directory-root";
pub const REMOVE_DIRECTORY_ROOT_ID: &str = "node-remove-directory-root";
pub const COPY_SOURCE_ID: &str = "node-menu-copy-source";

/// What a menu entry does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SetDirectoryRoot { path: String },
    RemoveDirectoryRoot,
    CopySourceUri { url: String },
}

/// One selectable context-menu action.
#[derive(Clone)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: String,
    pub accesskey: Option<char>,
    pub disabled: bool,
    pub action: MenuAction,
    click: Rc<dyn Fn()>,
}

impl MenuEntry {
    /// Run the entry's action against the host it was built for.
    pub fn click(&self) {
        (self.click)();
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("accesskey", &self.accesskey)
            .field("disabled", &self.disabled)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MenuEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.accesskey == other.accesskey
            && self.disabled == other.disabled
            && self.action == other.action
    }
}

/// Build the context menu for `node`.
///
/// Exactly one entry is produced. Nothing is invoked on `host` until an
/// entry is clicked.
pub fn build_menu(
    node: &SourceNode,
    project_root: &ProjectRoot,
    host: &Rc<dyn SourceTreeHost>,
    strings: &MenuStrings,
) -> Vec<MenuEntry> {
    let entry = match node {
        SourceNode::Directory { path, .. } if project_root.matches(path) => {
            let host = Rc::clone(host);
            entry(
                REMOVE_DIRECTORY_ROOT_ID,
                &strings.remove_directory_root,
                MenuAction::RemoveDirectoryRoot,
                Rc::new(move || host.clear_project_directory_root()),
            )
        },
        SourceNode::Directory { path, .. } => {
            let host = Rc::clone(host);
            let target = node.clone();
            entry(
                SET_DIRECTORY_ROOT_ID,
                &strings.set_directory_root,
                MenuAction::SetDirectoryRoot { path: path.clone() },
                Rc::new(move || host.set_project_directory_root(&target)),
            )
        },
        SourceNode::Source { contents, .. } => {
            let host = Rc::clone(host);
            let url = contents.url.clone();
            entry(
                COPY_SOURCE_ID,
                &strings.copy_source_uri,
                MenuAction::CopySourceUri { url: url.clone() },
                Rc::new(move || host.copy_to_clipboard(&url)),
            )
        },
    };

    vec![entry]
}

fn entry(
    id: &'static str,
    text: &MenuString,
    action: MenuAction,
    click: Rc<dyn Fn()>,
) -> MenuEntry {
    MenuEntry {
        id,
        label: text.label.clone(),
        accesskey: text.accesskey,
        disabled: false,
        action,
        click,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingHost, mock_directory, mock_source};

    fn host() -> (Rc<RecordingHost>, Rc<dyn SourceTreeHost>) {
        let recording = Rc::new(RecordingHost::default());
        let host: Rc<dyn SourceTreeHost> = recording.clone();
        (recording, host)
    }

    fn directory(path: &str, name: &str) -> SourceNode {
        mock_directory(path, name, Vec::new())
    }

    fn source() -> SourceNode {
        mock_source()
    }

    #[test]
    fn given_directory_without_root_when_menu_built_then_set_root_entry() {
        let (recording, host) = host();

        let menu = build_menu(
            &directory("folder/", "folder"),
            &ProjectRoot::none(),
            &host,
            &MenuStrings::default(),
        );

        assert_eq!(menu.len(), 1);
        let entry = &menu[0];
        assert_eq!(entry.id, SET_DIRECTORY_ROOT_ID);
        assert_eq!(entry.label, "Set directory root");
        assert_eq!(entry.accesskey, Some('r'));
        assert!(!entry.disabled);
        assert!(recording.calls().is_empty());

        entry.click();
        assert_eq!(recording.calls(), vec!["set-root folder/"]);
    }

    #[test]
    fn given_other_directory_while_root_is_set_then_set_root_entry() {
        let (_recording, host) = host();

        let menu = build_menu(
            &directory("folder/", "folder"),
            &ProjectRoot::new("root/"),
            &host,
            &MenuStrings::default(),
        );

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].id, SET_DIRECTORY_ROOT_ID);
        assert_eq!(
            menu[0].action,
            MenuAction::SetDirectoryRoot {
                path: String::from("folder/")
            }
        );
    }

    #[test]
    fn given_root_directory_when_menu_built_then_remove_root_entry() {
        let (recording, host) = host();

        let menu = build_menu(
            &directory("root/", "root"),
            &ProjectRoot::new("root/"),
            &host,
            &MenuStrings::default(),
        );

        assert_eq!(menu.len(), 1);
        let entry = &menu[0];
        assert_eq!(entry.id, REMOVE_DIRECTORY_ROOT_ID);
        assert_eq!(entry.label, "Remove directory root");
        assert_eq!(entry.accesskey, None);
        assert!(!entry.disabled);

        entry.click();
        assert_eq!(recording.calls(), vec!["clear-root"]);
    }

    #[test]
    fn given_source_when_menu_built_then_copy_entry_uses_url_verbatim() {
        for root in [ProjectRoot::none(), ProjectRoot::new("root/")] {
            let (recording, host) = host();

            let menu =
                build_menu(&source(), &root, &host, &MenuStrings::default());

            assert_eq!(menu.len(), 1);
            let entry = &menu[0];
            assert_eq!(entry.id, COPY_SOURCE_ID);
            assert_eq!(entry.label, "Copy source URI");
            assert_eq!(entry.accesskey, Some('u'));
            assert!(!entry.disabled);
            assert!(recording.calls().is_empty());

            entry.click();
            assert_eq!(recording.calls(), vec!["copy http://mdn.com/one.js"]);
        }
    }

    #[test]
    fn given_custom_strings_when_menu_built_then_labels_follow_settings() {
        let (_recording, host) = host();
        let mut strings = MenuStrings::default();
        strings.copy_source_uri = MenuString {
            label: String::from("Copy URL"),
            accesskey: Some('c'),
        };

        let menu = build_menu(&source(), &ProjectRoot::none(), &host, &strings);

        assert_eq!(menu[0].label, "Copy URL");
        assert_eq!(menu[0].accesskey, Some('c'));
        assert_eq!(menu[0].id, COPY_SOURCE_ID);
    }
}
