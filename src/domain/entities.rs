//! Domain entities: the validated navigation model
//!
//! Values of these types only come out of [`crate::domain::validate`], so a
//! renderer holding a `&NavigationTree` can rely on every invariant without
//! re-checking: groups are either leaves or parents with at least one link,
//! badges always carry a class, and sibling titles are unique.

use crate::domain::error::Location;

/// Icon identifier, passed through unchanged to the icon renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    pub(crate) name: String,
}

impl Icon {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Short label shown next to a group, with the style class applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Badge {
    pub(crate) content: String,
    pub(crate) class: String,
}

impl Badge {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Single clickable entry resolving to an application route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationLink {
    pub(crate) title: String,
    pub(crate) to: String,
}

impl NavigationLink {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Symbolic route identifier (not a URL).
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// Group that navigates directly to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafGroup {
    pub(crate) title: String,
    pub(crate) icon: Option<Icon>,
    pub(crate) to: String,
    pub(crate) badge: Option<Badge>,
}

impl LeafGroup {
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// Collapsible group holding one or more links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentGroup {
    pub(crate) title: String,
    pub(crate) icon: Option<Icon>,
    pub(crate) children: Vec<NavigationLink>,
    pub(crate) badge: Option<Badge>,
}

impl ParentGroup {
    /// Never empty.
    pub fn children(&self) -> &[NavigationLink] {
        &self.children
    }
}

/// Top-level sidebar section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationGroup {
    Leaf(LeafGroup),
    Parent(ParentGroup),
}

impl NavigationGroup {
    pub fn title(&self) -> &str {
        match self {
            NavigationGroup::Leaf(g) => &g.title,
            NavigationGroup::Parent(g) => &g.title,
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        match self {
            NavigationGroup::Leaf(g) => g.icon.as_ref(),
            NavigationGroup::Parent(g) => g.icon.as_ref(),
        }
    }

    pub fn badge(&self) -> Option<&Badge> {
        match self {
            NavigationGroup::Leaf(g) => g.badge.as_ref(),
            NavigationGroup::Parent(g) => g.badge.as_ref(),
        }
    }

    /// Child links; empty for leaf groups.
    pub fn children(&self) -> &[NavigationLink] {
        match self {
            NavigationGroup::Leaf(_) => &[],
            NavigationGroup::Parent(g) => &g.children,
        }
    }

    /// Own route of a leaf group.
    pub fn route(&self) -> Option<&str> {
        match self {
            NavigationGroup::Leaf(g) => Some(&g.to),
            NavigationGroup::Parent(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, NavigationGroup::Leaf(_))
    }
}

/// Ordered, validated sidebar content. Order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    pub(crate) groups: Vec<NavigationGroup>,
}

impl NavigationTree {
    pub fn groups(&self) -> &[NavigationGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavigationGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always `false` for a validated tree.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavigationGroup> {
        self.groups.get(index)
    }

    pub fn find(&self, title: &str) -> Option<&NavigationGroup> {
        self.groups.iter().find(|g| g.title() == title)
    }

    /// Every route target in rendering order, with its location.
    pub fn routes(&self) -> Vec<(Location, &str)> {
        let mut routes = Vec::new();
        for (gi, group) in self.groups.iter().enumerate() {
            match group {
                NavigationGroup::Leaf(leaf) => routes.push((Location::Group(gi), leaf.to.as_str())),
                NavigationGroup::Parent(parent) => {
                    for (ci, link) in parent.children.iter().enumerate() {
                        routes.push((Location::Child { group: gi, child: ci }, link.to.as_str()));
                    }
                }
            }
        }
        routes
    }
}

impl<'a> IntoIterator for &'a NavigationTree {
    type Item = &'a NavigationGroup;
    type IntoIter = std::slice::Iter<'a, NavigationGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
