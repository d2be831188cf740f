//! Renderer seam: consumers receive the tree by reference and never own it.

use termtree::Tree;

use crate::domain::{NavigationGroup, NavigationTree};

/// Something that turns a navigation tree into displayable output.
pub trait MenuRenderer {
    fn render(&self, tree: &NavigationTree) -> String;
}

/// Plain-text tree rendering for terminals.
///
/// ```text
/// sidebar
/// └── Dashboards [bx-home] (New)
///     ├── Analytics → dashboards-analytics
///     ...
/// ```
#[derive(Debug, Clone)]
pub struct TermTreeRenderer {
    root_label: String,
}

impl Default for TermTreeRenderer {
    fn default() -> Self {
        Self::new("sidebar")
    }
}

impl TermTreeRenderer {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            root_label: root_label.into(),
        }
    }

    fn group_label(group: &NavigationGroup) -> String {
        let mut label = group.title().to_string();
        if let Some(icon) = group.icon() {
            label.push_str(&format!(" [{}]", icon.name()));
        }
        if let Some(badge) = group.badge() {
            label.push_str(&format!(" ({})", badge.content()));
        }
        if let Some(route) = group.route() {
            label.push_str(&format!(" → {}", route));
        }
        label
    }
}

impl MenuRenderer for TermTreeRenderer {
    fn render(&self, tree: &NavigationTree) -> String {
        let leaves = tree.iter().map(|group| {
            Tree::new(Self::group_label(group)).with_leaves(
                group
                    .children()
                    .iter()
                    .map(|link| format!("{} → {}", link.title(), link.to())),
            )
        });
        Tree::new(self.root_label.clone()).with_leaves(leaves).to_string()
    }
}
