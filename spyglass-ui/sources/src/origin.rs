use crate::model::{ProjectRoot, SourceNode};

const WEBPACK_PREFIX: &str = "webpack://";
const ANGULAR_PREFIX: &str = "ng://";
const EXTENSION_PREFIX: &str = "moz-extension://";

/// Semantic origin of a tree node, used to pick its icon and menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    Webpack,
    Angular,
    Extension,
    /// The node is the current project root.
    Root,
    /// Top-level origin grouping, only while no project root is set.
    Domain,
    Plain,
}

/// Classify `node` rendered at `depth` under `project_root`.
///
/// First match wins; anything unrecognized is [`OriginKind::Plain`].
pub fn classify(
    node: &SourceNode,
    project_root: &ProjectRoot,
    depth: usize,
) -> OriginKind {
    let path = node.path();

    if path.starts_with(WEBPACK_PREFIX) {
        OriginKind::Webpack
    } else if path.starts_with(ANGULAR_PREFIX) {
        OriginKind::Angular
    } else if path.starts_with(EXTENSION_PREFIX) {
        OriginKind::Extension
    } else if project_root.matches(path) {
        OriginKind::Root
    } else if is_domain_grouping(node, depth) && !project_root.is_set() {
        OriginKind::Domain
    } else {
        OriginKind::Plain
    }
}

/// Whether `node` would classify as [`OriginKind::Domain`] with no project
/// root set. Bundler and extension groupings never do.
pub fn is_domain_grouping(node: &SourceNode, depth: usize) -> bool {
    depth == 0 && node.is_directory() && !has_bundler_prefix(node.path())
}

fn has_bundler_prefix(path: &str) -> bool {
    [WEBPACK_PREFIX, ANGULAR_PREFIX, EXTENSION_PREFIX]
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::model::SourceDescriptor;

    fn directory(path: &str, name: &str) -> SourceNode {
        SourceNode::directory(name, path, Vec::new()).expect("valid directory")
    }

    fn source(path: &str, name: &str) -> SourceNode {
        let descriptor = SourceDescriptor::new("source-1", path);
        SourceNode::source(name, path, Rc::new(descriptor))
            .expect("valid source")
    }

    #[test]
    fn given_bundler_prefixes_when_classified_then_origin_is_recognized() {
        let none = ProjectRoot::none();

        assert_eq!(
            classify(&directory("webpack://", "webpack://"), &none, 0),
            OriginKind::Webpack
        );
        assert_eq!(
            classify(&directory("ng://", "ng://"), &none, 0),
            OriginKind::Angular
        );
        assert_eq!(
            classify(
                &directory(
                    "moz-extension://e37c3c08-beac-a04b-8032-c4f699a1a856",
                    "moz-extension://e37c3c08-beac-a04b-8032-c4f699a1a856",
                ),
                &none,
                0,
            ),
            OriginKind::Extension
        );
    }

    #[test]
    fn given_prefix_and_root_match_when_classified_then_prefix_wins() {
        let root = ProjectRoot::new("webpack://");

        assert_eq!(
            classify(&directory("webpack://", "webpack://"), &root, 0),
            OriginKind::Webpack
        );
    }

    #[test]
    fn given_node_equal_to_project_root_when_classified_then_root() {
        let root = ProjectRoot::new("root/");

        assert_eq!(
            classify(&directory("root/", "root"), &root, 0),
            OriginKind::Root
        );
        assert_eq!(
            classify(&directory("root", "root"), &root, 3),
            OriginKind::Root
        );
    }

    #[test]
    fn given_top_level_directory_without_root_when_classified_then_domain() {
        let node = directory("mdn.com", "mdn.com");

        assert_eq!(
            classify(&node, &ProjectRoot::none(), 0),
            OriginKind::Domain
        );
        assert_eq!(
            classify(&node, &ProjectRoot::new("root/"), 0),
            OriginKind::Plain
        );
        assert_eq!(classify(&node, &ProjectRoot::none(), 1), OriginKind::Plain);
    }

    #[test]
    fn given_top_level_source_when_classified_then_plain() {
        assert_eq!(
            classify(&source("root", "root"), &ProjectRoot::none(), 0),
            OriginKind::Plain
        );
    }

    #[test]
    fn given_bundler_grouping_when_checked_then_not_a_domain_grouping() {
        assert!(is_domain_grouping(&directory("mdn.com", "mdn.com"), 0));
        assert!(!is_domain_grouping(&directory("webpack://", "webpack://"), 0));
        assert!(!is_domain_grouping(&directory("ng://", "ng://"), 0));
        assert!(!is_domain_grouping(
            &directory("moz-extension://abc", "moz-extension://abc"),
            0
        ));
        assert!(!is_domain_grouping(&directory("mdn.com", "mdn.com"), 1));
        assert!(!is_domain_grouping(&source("root", "root"), 0));
    }

    #[test]
    fn given_unrecognized_scheme_when_classified_then_falls_back_to_plain() {
        let node = source("chrome://browser/content/x.js", "x.js");

        assert_eq!(classify(&node, &ProjectRoot::none(), 2), OriginKind::Plain);
    }
}
