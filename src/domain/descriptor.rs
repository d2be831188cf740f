//! Raw navigation descriptor: the loose, literal shape of the sidebar data
//!
//! Field names follow the dashboard literal (`badgeContent`, `badgeClass`).
//! Every field is optional here; [`crate::domain::validate`] decides which
//! combinations are acceptable and turns the raw value into a
//! [`NavigationTree`].

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Badge, NavigationGroup, NavigationLink, NavigationTree};

/// `{ icon: "bx-home" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawIcon {
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavigationLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

// Plain values come before `icon` and `children` so TOML output keeps
// scalar keys ahead of sub-tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawNavigationGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<RawIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNavigationLink>>,
}

/// Ordered list of raw groups.
///
/// Serialises as `{ groups = [...] }`; JSON descriptors use a bare array,
/// see [`RawNavigationTree::from_groups`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavigationTree {
    pub groups: Vec<RawNavigationGroup>,
}

impl RawNavigationTree {
    pub fn from_groups(groups: Vec<RawNavigationGroup>) -> Self {
        Self { groups }
    }
}

impl RawNavigationLink {
    pub fn new(title: &str, to: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            to: Some(to.to_string()),
        }
    }
}

impl From<&NavigationLink> for RawNavigationLink {
    fn from(link: &NavigationLink) -> Self {
        Self::new(link.title(), link.to())
    }
}

impl From<&NavigationGroup> for RawNavigationGroup {
    fn from(group: &NavigationGroup) -> Self {
        let (badge_content, badge_class) = match group.badge() {
            Some(Badge { content, class }) => (Some(content.clone()), Some(class.clone())),
            None => (None, None),
        };
        let children = match group {
            NavigationGroup::Leaf(_) => None,
            NavigationGroup::Parent(parent) => {
                Some(parent.children().iter().map(RawNavigationLink::from).collect())
            }
        };
        Self {
            title: Some(group.title().to_string()),
            to: group.route().map(str::to_string),
            badge_content,
            badge_class,
            icon: group.icon().map(|icon| RawIcon {
                icon: icon.name().to_string(),
            }),
            children,
        }
    }
}

impl From<&NavigationTree> for RawNavigationTree {
    fn from(tree: &NavigationTree) -> Self {
        Self::from_groups(tree.iter().map(RawNavigationGroup::from).collect())
    }
}
