use crate::model::{ProjectRoot, RenderState, SourceDescriptor, SourceNode};
use crate::origin::{OriginKind, classify, is_domain_grouping};
use crate::settings::TreeItemSettings;

/// Expand affordance drawn in front of directories with children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Collapsed,
    Expanded,
}

/// Icon for a source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceIcon {
    PrettyPrinted,
    BlackBoxed,
    Wasm,
    JavaScript,
    TypeScript,
    CoffeeScript,
    Vue,
    Default,
}

/// Icon for a tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    Webpack,
    Angular,
    Extension,
    Root,
    /// Origin grouping; `debuggee` marks the page being debugged.
    Domain {
        debuggee: bool,
    },
    Folder {
        open: bool,
    },
    Source(SourceIcon),
}

/// Everything needed to draw one tree row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescription {
    pub depth: usize,
    pub indent: f32,
    pub arrow: Option<Arrow>,
    pub icon: RowIcon,
    pub label: String,
    pub focused: bool,
}

/// Describe the row for `node`, or `None` when the row is suppressed.
///
/// Pure: equal inputs always give equal output.
pub fn render(
    node: &SourceNode,
    state: &RenderState,
    project_root: &ProjectRoot,
    debuggee_url: Option<&str>,
    settings: &TreeItemSettings,
) -> Option<RowDescription> {
    if project_root.is_set()
        && is_domain_grouping(node, state.depth)
        && !project_root.matches(node.path())
    {
        log::trace!("suppressing domain row {}", node.path());
        return None;
    }

    let origin = classify(node, project_root, state.depth);
    let icon = row_icon(node, origin, state, debuggee_url);
    let arrow = match node {
        SourceNode::Directory { contents, .. } if !contents.is_empty() => {
            Some(if state.expanded {
                Arrow::Expanded
            } else {
                Arrow::Collapsed
            })
        },
        _ => None,
    };

    Some(RowDescription {
        depth: state.depth,
        indent: state.depth as f32 * settings.indent_unit,
        arrow,
        icon,
        label: node.name().to_string(),
        focused: state.focused,
    })
}

fn row_icon(
    node: &SourceNode,
    origin: OriginKind,
    state: &RenderState,
    debuggee_url: Option<&str>,
) -> RowIcon {
    match node {
        SourceNode::Source { contents, .. } => {
            RowIcon::Source(source_icon(contents))
        },
        SourceNode::Directory { name, .. } => match origin {
            OriginKind::Webpack if state.depth == 0 => RowIcon::Webpack,
            OriginKind::Angular if state.depth == 0 => RowIcon::Angular,
            OriginKind::Extension if state.depth == 0 => RowIcon::Extension,
            OriginKind::Root => RowIcon::Root,
            OriginKind::Domain => RowIcon::Domain {
                debuggee: debuggee_url
                    .filter(|url| !url.is_empty())
                    .is_some_and(|url| url.contains(name.as_str())),
            },
            _ => RowIcon::Folder {
                open: state.expanded,
            },
        },
    }
}

/// Pick the icon for a source from its flags, then its file extension.
pub fn source_icon(source: &SourceDescriptor) -> SourceIcon {
    if source.is_pretty_printed {
        return SourceIcon::PrettyPrinted;
    }
    if source.is_black_boxed {
        return SourceIcon::BlackBoxed;
    }
    if source.is_wasm {
        return SourceIcon::Wasm;
    }

    match url_extension(&source.url).as_deref() {
        Some("js" | "jsm" | "mjs" | "cjs" | "jsx") => SourceIcon::JavaScript,
        Some("ts" | "tsx") => SourceIcon::TypeScript,
        Some("coffee") => SourceIcon::CoffeeScript,
        Some("vue") => SourceIcon::Vue,
        _ => SourceIcon::Default,
    }
}

fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (stem, extension) = file.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}
