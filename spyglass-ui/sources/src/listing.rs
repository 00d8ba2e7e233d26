use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{RenderState, SourceNode};

/// A row the owning container should draw, with the state it passes down.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub node: &'a SourceNode,
    pub state: RenderState,
}

/// Walk `nodes` depth-first and return the rows currently visible.
///
/// Children are listed only for directories whose path is in `expanded`.
/// Siblings are ordered directories first, then by natural name order.
pub fn visible_rows<'a>(
    nodes: &'a [SourceNode],
    expanded: &HashSet<String>,
    focused: Option<&str>,
) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    push_level(nodes, 0, expanded, focused, &mut rows);
    rows
}

fn push_level<'a>(
    nodes: &'a [SourceNode],
    depth: usize,
    expanded: &HashSet<String>,
    focused: Option<&str>,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    for node in sorted(nodes) {
        let is_expanded = node.is_directory() && expanded.contains(node.path());
        rows.push(VisibleRow {
            node,
            state: RenderState {
                depth,
                focused: focused == Some(node.path()),
                expanded: is_expanded,
            },
        });

        if is_expanded {
            push_level(node.children(), depth + 1, expanded, focused, rows);
        }
    }
}

/// Find the node with `path` anywhere under `nodes`.
pub fn find_node<'a>(
    nodes: &'a [SourceNode],
    path: &str,
) -> Option<&'a SourceNode> {
    nodes.iter().find_map(|node| {
        if node.path() == path {
            Some(node)
        } else {
            find_node(node.children(), path)
        }
    })
}

/// Paths of `node` and every directory below it.
pub fn directory_paths(node: &SourceNode) -> Vec<String> {
    let mut paths = Vec::new();
    collect_directories(node, &mut paths);
    paths
}

fn collect_directories(node: &SourceNode, paths: &mut Vec<String>) {
    if let SourceNode::Directory { path, contents, .. } = node {
        paths.push(path.clone());
        for child in contents {
            collect_directories(child, paths);
        }
    }
}

fn sorted(nodes: &[SourceNode]) -> Vec<&SourceNode> {
    let mut ordered: Vec<&SourceNode> = nodes.iter().collect();
    ordered.sort_by(|left, right| {
        right
            .is_directory()
            .cmp(&left.is_directory())
            .then_with(|| natural_cmp(left.name(), right.name()))
    });
    ordered
}

/// Case-insensitive ordering where digit runs compare by value.
fn natural_cmp(left: &str, right: &str) -> Ordering {
    let mut left_chars = left.chars().peekable();
    let mut right_chars = right.chars().peekable();

    loop {
        match (left_chars.peek().copied(), right_chars.peek().copied()) {
            (None, None) => return left.cmp(right),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left_chars);
                let r_run = take_digits(&mut right_chars);
                let order = compare_digit_runs(&l_run, &r_run);
                if order != Ordering::Equal {
                    return order;
                }
            },
            (Some(l), Some(r)) => {
                let order = l.to_lowercase().cmp(r.to_lowercase());
                if order != Ordering::Equal {
                    return order;
                }
                left_chars.next();
                right_chars.next();
            },
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

fn compare_digit_runs(left: &str, right: &str) -> Ordering {
    let left_value = left.trim_start_matches('0');
    let right_value = right.trim_start_matches('0');
    left_value
        .len()
        .cmp(&right_value.len())
        .then_with(|| left_value.cmp(right_value))
}
