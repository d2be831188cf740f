//! Structural validation of raw navigation descriptors.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. the tree has at least one group,
//! 2. per group, in group order: title, children/route exclusivity,
//!    child titles and routes, badge co-presence,
//! 3. sibling title uniqueness, children of each group first, then the
//!    top-level groups.

use std::collections::HashMap;

use crate::domain::descriptor::{RawNavigationGroup, RawNavigationLink, RawNavigationTree};
use crate::domain::entities::{
    Badge, Icon, LeafGroup, NavigationGroup, NavigationLink, NavigationTree, ParentGroup,
};
use crate::domain::error::{Location, NavError, ShapeRule};

/// Validate a raw descriptor and build the typed tree from it.
pub fn validate(raw: &RawNavigationTree) -> Result<NavigationTree, NavError> {
    if raw.groups.is_empty() {
        return Err(shape(Location::Tree, ShapeRule::EmptyTree));
    }

    let groups = raw
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| validate_group(index, group))
        .collect::<Result<Vec<_>, _>>()?;

    for (gi, group) in groups.iter().enumerate() {
        check_unique(
            group
                .children()
                .iter()
                .enumerate()
                .map(|(ci, link)| (Location::Child { group: gi, child: ci }, link.title())),
        )?;
    }
    check_unique(
        groups
            .iter()
            .enumerate()
            .map(|(gi, group)| (Location::Group(gi), group.title())),
    )?;

    Ok(NavigationTree { groups })
}

fn validate_group(index: usize, raw: &RawNavigationGroup) -> Result<NavigationGroup, NavError> {
    let location = Location::Group(index);
    let title = required(raw.title.as_deref(), location, ShapeRule::MissingTitle)?;

    let target = match (raw.children.as_deref(), raw.to.as_deref()) {
        (Some([]), _) => return Err(shape(location, ShapeRule::EmptyChildren)),
        (Some(_), Some(_)) => return Err(shape(location, ShapeRule::ChildrenAndRoute)),
        (None, None) => return Err(shape(location, ShapeRule::NoChildrenOrRoute)),
        (Some(children), None) => Target::Children(
            children
                .iter()
                .enumerate()
                .map(|(ci, link)| validate_link(index, ci, link))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        (None, Some(to)) => Target::Route(required(Some(to), location, ShapeRule::MissingRoute)?),
    };

    let badge = match (raw.badge_content.as_deref(), raw.badge_class.as_deref()) {
        (Some(content), Some(class)) => Some(Badge {
            content: required(Some(content), location, ShapeRule::EmptyBadgeContent)?,
            class: class.to_string(),
        }),
        (Some(_), None) => return Err(shape(location, ShapeRule::BadgeWithoutClass)),
        (None, Some(_)) => return Err(shape(location, ShapeRule::ClassWithoutBadge)),
        (None, None) => None,
    };

    let icon = raw.icon.as_ref().map(|icon| Icon {
        name: icon.icon.clone(),
    });

    Ok(match target {
        Target::Route(to) => NavigationGroup::Leaf(LeafGroup {
            title,
            icon,
            to,
            badge,
        }),
        Target::Children(children) => NavigationGroup::Parent(ParentGroup {
            title,
            icon,
            children,
            badge,
        }),
    })
}

fn validate_link(group: usize, child: usize, raw: &RawNavigationLink) -> Result<NavigationLink, NavError> {
    let location = Location::Child { group, child };
    Ok(NavigationLink {
        title: required(raw.title.as_deref(), location, ShapeRule::MissingTitle)?,
        to: required(raw.to.as_deref(), location, ShapeRule::MissingRoute)?,
    })
}

enum Target {
    Route(String),
    Children(Vec<NavigationLink>),
}

/// Whitespace-only counts as empty.
fn required(value: Option<&str>, location: Location, rule: ShapeRule) -> Result<String, NavError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(shape(location, rule)),
    }
}

fn check_unique<'a>(siblings: impl Iterator<Item = (Location, &'a str)>) -> Result<(), NavError> {
    let mut seen: HashMap<&str, Location> = HashMap::new();
    for (location, title) in siblings {
        if let Some(first) = seen.insert(title, location) {
            return Err(NavError::DuplicateTitle {
                title: title.to_string(),
                first,
                second: location,
            });
        }
    }
    Ok(())
}

fn shape(location: Location, rule: ShapeRule) -> NavError {
    NavError::Shape { location, rule }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::RawIcon;

    fn link(title: &str, to: &str) -> RawNavigationLink {
        RawNavigationLink::new(title, to)
    }

    fn parent(title: &str, children: Vec<RawNavigationLink>) -> RawNavigationGroup {
        RawNavigationGroup {
            title: Some(title.to_string()),
            children: Some(children),
            ..Default::default()
        }
    }

    fn leaf(title: &str, to: &str) -> RawNavigationGroup {
        RawNavigationGroup {
            title: Some(title.to_string()),
            to: Some(to.to_string()),
            ..Default::default()
        }
    }

    fn tree(groups: Vec<RawNavigationGroup>) -> RawNavigationTree {
        RawNavigationTree::from_groups(groups)
    }

    #[test]
    fn given_empty_tree_when_validating_then_fails_at_tree() {
        let err = validate(&tree(vec![])).unwrap_err();
        assert_eq!(err, shape(Location::Tree, ShapeRule::EmptyTree));
    }

    #[test]
    fn given_blank_group_title_when_validating_then_missing_title() {
        let err = validate(&tree(vec![leaf("  ", "home")])).unwrap_err();
        assert_eq!(err, shape(Location::Group(0), ShapeRule::MissingTitle));
    }

    #[test]
    fn given_leaf_and_parent_when_validating_then_builds_both_variants() {
        let t = validate(&tree(vec![
            leaf("Home", "home"),
            parent("Apps", vec![link("Mail", "apps-email")]),
        ]))
        .unwrap();

        assert!(t.groups()[0].is_leaf());
        assert_eq!(t.groups()[0].route(), Some("home"));
        assert_eq!(t.groups()[1].children().len(), 1);
        assert_eq!(t.groups()[1].route(), None);
    }

    #[test]
    fn given_children_and_route_when_validating_then_fails_on_that_group() {
        let mut both = parent("Apps", vec![link("Mail", "apps-email")]);
        both.to = Some("apps".to_string());
        let err = validate(&tree(vec![leaf("Home", "home"), both])).unwrap_err();
        assert_eq!(err, shape(Location::Group(1), ShapeRule::ChildrenAndRoute));
    }

    #[test]
    fn given_empty_children_when_validating_then_fails() {
        let err = validate(&tree(vec![parent("Apps", vec![])])).unwrap_err();
        assert_eq!(err, shape(Location::Group(0), ShapeRule::EmptyChildren));
    }

    #[test]
    fn given_child_without_route_when_validating_then_points_at_child() {
        let children = vec![
            link("Mail", "apps-email"),
            RawNavigationLink {
                title: Some("Chat".to_string()),
                to: None,
            },
        ];
        let err = validate(&tree(vec![parent("Apps", children)])).unwrap_err();
        assert_eq!(
            err,
            shape(Location::Child { group: 0, child: 1 }, ShapeRule::MissingRoute)
        );
    }

    #[test]
    fn given_badge_class_without_content_when_validating_then_fails() {
        let mut group = leaf("Home", "home");
        group.badge_class = Some("bg-error".to_string());
        let err = validate(&tree(vec![group])).unwrap_err();
        assert_eq!(err, shape(Location::Group(0), ShapeRule::ClassWithoutBadge));
    }

    #[test]
    fn given_blank_badge_content_with_class_when_validating_then_empty_badge_content() {
        let mut group = parent("Apps", vec![link("Email", "apps-email")]);
        group.badge_content = Some(" ".to_string());
        group.badge_class = Some("bg-primary".to_string());
        let err = validate(&tree(vec![leaf("Home", "home"), group])).unwrap_err();
        assert_eq!(err, shape(Location::Group(1), ShapeRule::EmptyBadgeContent));
    }

    #[test]
    fn given_duplicate_child_titles_when_validating_then_names_both_positions() {
        let err = validate(&tree(vec![parent(
            "Apps",
            vec![link("Mail", "a"), link("Chat", "b"), link("Mail", "c")],
        )]))
        .unwrap_err();
        assert_eq!(
            err,
            NavError::DuplicateTitle {
                title: "Mail".to_string(),
                first: Location::Child { group: 0, child: 0 },
                second: Location::Child { group: 0, child: 2 },
            }
        );
    }

    #[test]
    fn given_same_child_title_in_different_groups_when_validating_then_passes() {
        let result = validate(&tree(vec![
            parent("Apps", vec![link("Overview", "apps")]),
            parent("Pages", vec![link("Overview", "pages")]),
        ]));
        assert!(result.is_ok());
    }

    #[test]
    fn given_shape_error_after_duplicate_when_validating_then_shape_error_wins() {
        let err = validate(&tree(vec![
            leaf("Home", "home"),
            leaf("Home", "home-2"),
            RawNavigationGroup {
                title: Some("Broken".to_string()),
                ..Default::default()
            },
        ]))
        .unwrap_err();
        assert_eq!(err, shape(Location::Group(2), ShapeRule::NoChildrenOrRoute));
    }

    #[test]
    fn given_icon_when_validating_then_passes_name_through() {
        let mut group = leaf("Home", "home");
        group.icon = Some(RawIcon {
            icon: "bx-home".to_string(),
        });
        let t = validate(&tree(vec![group])).unwrap();
        assert_eq!(t.groups()[0].icon().map(Icon::name), Some("bx-home"));
    }
}
