// SPDX-License-Identifier: MPL-2.0
//! Path resolution for breadcrumbs.
//!
//! Given a navigation forest and the current path, [`build_segments`] produces
//! one [`PathSegment`] per level from the root down to the matching node. An
//! unknown path yields an empty trail; callers render nothing in that case.

use serde::{Deserialize, Serialize};

/// One entry of the navigation tree (a page or a section grouping pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    /// Unique among its siblings.
    pub id: String,
    pub label: String,
    /// Grouping nodes may have no navigable path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Icon name, only rendered for the first segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Creates a leaf node without path, icon or children.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            icon: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if this node's path is exactly `target`.
    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        self.path.as_deref() == Some(target)
    }
}

/// One level of a resolved breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment<'a> {
    pub node: &'a NavigationNode,
    /// True only for the last segment of the trail.
    pub is_active: bool,
    /// Other entries of the same level, offered in the segment's dropdown.
    pub siblings: Vec<&'a NavigationNode>,
    pub children: &'a [NavigationNode],
}

/// Returns the root-to-node chain leading to the first node whose path is
/// exactly `target_path`, searching depth-first in pre-order.
///
/// Returns an empty vector when no node matches.
#[must_use]
pub fn find_ancestor_chain<'a>(
    forest: &'a [NavigationNode],
    target_path: &str,
) -> Vec<&'a NavigationNode> {
    let mut chain = Vec::new();
    for root in forest {
        if descend(root, target_path, &mut chain) {
            return chain;
        }
    }
    Vec::new()
}

/// Pushes `node` and searches below it. Leaves `chain` as it found it on failure.
fn descend<'a>(
    node: &'a NavigationNode,
    target_path: &str,
    chain: &mut Vec<&'a NavigationNode>,
) -> bool {
    chain.push(node);
    if node.matches(target_path) {
        return true;
    }
    for child in &node.children {
        if descend(child, target_path, chain) {
            return true;
        }
    }
    chain.pop();
    false
}

/// Resolves the breadcrumb trail for `target_path`.
///
/// Siblings are filtered by `path` equality, not by `id`: two path-less
/// entries of the same level hide each other.
#[must_use]
pub fn build_segments<'a>(forest: &'a [NavigationNode], target_path: &str) -> Vec<PathSegment<'a>> {
    let chain = find_ancestor_chain(forest, target_path);
    let last = chain.len().saturating_sub(1);

    chain
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let level: &'a [NavigationNode] = if i == 0 {
                forest
            } else {
                let parent: &'a NavigationNode = chain[i - 1];
                &parent.children
            };

            PathSegment {
                node,
                is_active: i == last,
                siblings: level.iter().filter(|n| n.path != node.path).collect(),
                children: &node.children,
            }
        })
        .collect()
}
