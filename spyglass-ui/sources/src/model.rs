use std::rc::Rc;

use crate::error::{Result, SourcesTreeError};

/// Load state of a source as reported by the source registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadedState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// A loaded (or not yet loaded) source known to the debugger.
///
/// Owned by the source registry. Tree nodes only hold a shared handle and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub id: String,
    pub url: String,
    pub is_pretty_printed: bool,
    pub is_wasm: bool,
    pub source_map_url: Option<String>,
    pub is_black_boxed: bool,
    pub loaded_state: LoadedState,
}

impl SourceDescriptor {
    /// Create an unloaded, plain source.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            is_pretty_printed: false,
            is_wasm: false,
            source_map_url: None,
            is_black_boxed: false,
            loaded_state: LoadedState::Unloaded,
        }
    }

    pub fn with_pretty_printed(mut self, value: bool) -> Self {
        self.is_pretty_printed = value;
        self
    }

    pub fn with_wasm(mut self, value: bool) -> Self {
        self.is_wasm = value;
        self
    }

    pub fn with_source_map_url(mut self, url: Option<String>) -> Self {
        self.source_map_url = url;
        self
    }

    pub fn with_black_boxed(mut self, value: bool) -> Self {
        self.is_black_boxed = value;
        self
    }

    pub fn with_loaded_state(mut self, state: LoadedState) -> Self {
        self.loaded_state = state;
        self
    }
}

/// One entry in the sources tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    Directory {
        name: String,
        path: String,
        contents: Vec<SourceNode>,
    },
    Source {
        name: String,
        path: String,
        contents: Rc<SourceDescriptor>,
    },
}

impl SourceNode {
    /// Create a directory node.
    ///
    /// Fails when `name` or `path` is empty.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        contents: Vec<SourceNode>,
    ) -> Result<Self> {
        let (name, path) = checked_labels(name.into(), path.into())?;
        Ok(Self::Directory {
            name,
            path,
            contents,
        })
    }

    /// Create a source node referencing a registry descriptor.
    ///
    /// Fails when `name` or `path` is empty.
    pub fn source(
        name: impl Into<String>,
        path: impl Into<String>,
        contents: Rc<SourceDescriptor>,
    ) -> Result<Self> {
        let (name, path) = checked_labels(name.into(), path.into())?;
        Ok(Self::Source {
            name,
            path,
            contents,
        })
    }

    /// Display label.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::Source { name, .. } => name,
        }
    }

    /// Tree-unique path.
    pub fn path(&self) -> &str {
        match self {
            Self::Directory { path, .. } | Self::Source { path, .. } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Children of a directory; empty for sources.
    pub fn children(&self) -> &[SourceNode] {
        match self {
            Self::Directory { contents, .. } => contents,
            Self::Source { .. } => &[],
        }
    }

    /// Descriptor of a source; `None` for directories.
    pub fn descriptor(&self) -> Option<&Rc<SourceDescriptor>> {
        match self {
            Self::Directory { .. } => None,
            Self::Source { contents, .. } => Some(contents),
        }
    }
}

fn checked_labels(name: String, path: String) -> Result<(String, String)> {
    if name.is_empty() {
        return Err(SourcesTreeError::InvalidNode {
            field: "name",
            reason: "must not be empty",
        });
    }
    if path.is_empty() {
        return Err(SourcesTreeError::InvalidNode {
            field: "path",
            reason: "must not be empty",
        });
    }
    Ok((name, path))
}

/// Path prefix currently treated as the browsing root.
///
/// An empty value means no root is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRoot(String);

impl ProjectRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Root with no value set.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Root with trailing `/` separators removed.
    pub fn normalized(&self) -> &str {
        trim_separators(&self.0)
    }

    /// Whether `path` names this root, ignoring trailing separators.
    pub fn matches(&self, path: &str) -> bool {
        self.is_set() && self.normalized() == trim_separators(path)
    }
}

impl From<&str> for ProjectRoot {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn trim_separators(value: &str) -> &str {
    value.trim_end_matches('/')
}

/// Per-row state handed down by the owning tree container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Zero-based tree depth.
    pub depth: usize,
    pub focused: bool,
    pub expanded: bool,
}

impl RenderState {
    pub fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> Rc<SourceDescriptor> {
        Rc::new(SourceDescriptor::new(
            "server1.conn13.child1/39",
            "http://mdn.com/one.js",
        ))
    }

    #[test]
    fn given_empty_name_when_constructing_directory_then_error_is_returned() {
        let err = SourceNode::directory("", "folder/", Vec::new())
            .expect_err("empty name must be rejected");

        assert!(matches!(
            err,
            SourcesTreeError::InvalidNode { field: "name", .. }
        ));
    }

    #[test]
    fn given_empty_path_when_constructing_source_then_error_is_returned() {
        let err = SourceNode::source("one.js", "", descriptor())
            .expect_err("empty path must be rejected");

        assert!(matches!(
            err,
            SourcesTreeError::InvalidNode { field: "path", .. }
        ));
    }

    #[test]
    fn given_source_node_when_queried_then_children_are_empty() {
        let node =
            SourceNode::source("one.js", "mdn.com/one.js", descriptor())
                .expect("valid node");

        assert!(!node.is_directory());
        assert!(node.children().is_empty());
        assert_eq!(
            node.descriptor().map(|source| source.url.as_str()),
            Some("http://mdn.com/one.js")
        );
    }

    #[test]
    fn given_cloned_source_node_then_descriptor_is_shared() {
        let shared = descriptor();
        let node = SourceNode::source("one.js", "mdn.com/one.js", shared.clone())
            .expect("valid node");
        let copy = node.clone();

        let original = node.descriptor().expect("source descriptor");
        let cloned = copy.descriptor().expect("source descriptor");
        assert!(Rc::ptr_eq(original, cloned));
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn given_trailing_separator_when_matching_root_then_it_is_ignored() {
        let root = ProjectRoot::new("root/");

        assert!(root.matches("root"));
        assert!(root.matches("root/"));
        assert!(root.matches("root//"));
        assert!(!root.matches("root/src"));
        assert!(!root.matches("folder/"));
        assert_eq!(root.normalized(), "root");
    }

    #[test]
    fn given_empty_root_when_matching_then_nothing_matches() {
        let root = ProjectRoot::none();

        assert!(!root.is_set());
        assert!(!root.matches(""));
        assert!(!root.matches("root"));
    }
}
