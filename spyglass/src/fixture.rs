use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use spyglass_ui_sources::{SourceDescriptor, SourceNode, SourcesTreeError};
use thiserror::Error;

const SAMPLE_TREE: &str = include_str!("../assets/sample_tree.json");

#[derive(Debug, Error)]
pub(crate) enum FixtureError {
    #[error("fixture I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fixture node rejected: {0}")]
    Node(#[from] SourcesTreeError),
}

/// Source tree shown by the browser, with the page being debugged.
#[derive(Debug, Clone, Default)]
pub(crate) struct SourceTree {
    pub(crate) debuggee_url: Option<String>,
    pub(crate) nodes: Vec<SourceNode>,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    debuggee_url: Option<String>,
    #[serde(default)]
    nodes: Vec<FixtureNode>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum FixtureNode {
    Directory {
        name: String,
        path: String,
        #[serde(default)]
        contents: Vec<FixtureNode>,
    },
    Source {
        name: String,
        path: String,
        source: FixtureSource,
    },
}

#[derive(Debug, Deserialize)]
struct FixtureSource {
    id: String,
    url: String,
    #[serde(default)]
    pretty_printed: bool,
    #[serde(default)]
    wasm: bool,
    #[serde(default)]
    black_boxed: bool,
    #[serde(default)]
    source_map_url: Option<String>,
}

impl FixtureNode {
    fn into_node(self) -> Result<SourceNode, SourcesTreeError> {
        match self {
            FixtureNode::Directory {
                name,
                path,
                contents,
            } => {
                let contents = contents
                    .into_iter()
                    .map(FixtureNode::into_node)
                    .collect::<Result<Vec<_>, _>>()?;
                SourceNode::directory(name, path, contents)
            },
            FixtureNode::Source { name, path, source } => {
                let descriptor = SourceDescriptor::new(source.id, source.url)
                    .with_pretty_printed(source.pretty_printed)
                    .with_wasm(source.wasm)
                    .with_black_boxed(source.black_boxed)
                    .with_source_map_url(source.source_map_url);
                SourceNode::source(name, path, Rc::new(descriptor))
            },
        }
    }
}

/// Parse a tree fixture from JSON.
pub(crate) fn parse_tree(input: &str) -> Result<SourceTree, FixtureError> {
    let file: FixtureFile = serde_json::from_str(input)?;
    let nodes = file
        .nodes
        .into_iter()
        .map(FixtureNode::into_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SourceTree {
        debuggee_url: file.debuggee_url.filter(|url| !url.is_empty()),
        nodes,
    })
}

/// Load a tree fixture from disk.
pub(crate) fn load_tree(path: &Path) -> Result<SourceTree, FixtureError> {
    let content = std::fs::read_to_string(path)?;
    parse_tree(&content)
}

/// Tree from `path` when given, otherwise the embedded sample. Falls back to
/// the sample when the fixture cannot be loaded.
pub(crate) fn load_initial_tree(path: Option<&Path>) -> SourceTree {
    let loaded = match path {
        Some(path) => load_tree(path).inspect_err(|err| {
            log::warn!(
                "failed to load tree fixture {}, using sample: {err}",
                path.display()
            );
        }),
        None => parse_tree(SAMPLE_TREE),
    };

    match loaded {
        Ok(tree) => tree,
        Err(_) => parse_tree(SAMPLE_TREE).unwrap_or_else(|err| {
            log::warn!("embedded sample tree is invalid: {err}");
            SourceTree::default()
        }),
    }
}
