//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

use crate::domain::routes::RouteReport;

/// Position of an entry inside a navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The tree as a whole
    Tree,
    /// A top-level group
    Group(usize),
    /// A link inside a group
    Child { group: usize, child: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Tree => write!(f, "tree"),
            Location::Group(group) => write!(f, "group {}", group),
            Location::Child { group, child } => write!(f, "group {}, child {}", group, child),
        }
    }
}

/// Required or mutually exclusive field rule violated by a descriptor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRule {
    /// The tree has no groups
    EmptyTree,
    /// Title missing or blank
    MissingTitle,
    /// Group declares both `children` and `to`
    ChildrenAndRoute,
    /// Group declares neither `children` nor `to`
    NoChildrenOrRoute,
    /// Group declares an empty `children` list
    EmptyChildren,
    /// Route missing or blank
    MissingRoute,
    /// `badgeContent` without `badgeClass`
    BadgeWithoutClass,
    /// `badgeClass` without `badgeContent`
    ClassWithoutBadge,
    /// `badgeContent` is blank
    EmptyBadgeContent,
}

impl fmt::Display for ShapeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ShapeRule::EmptyTree => "navigation tree has no groups",
            ShapeRule::MissingTitle => "title is missing or empty",
            ShapeRule::ChildrenAndRoute => "group has both children and a route",
            ShapeRule::NoChildrenOrRoute => "group has neither children nor a route",
            ShapeRule::EmptyChildren => "group has an empty children list",
            ShapeRule::MissingRoute => "route is missing or empty",
            ShapeRule::BadgeWithoutClass => "badgeContent is set without badgeClass",
            ShapeRule::ClassWithoutBadge => "badgeClass is set without badgeContent",
            ShapeRule::EmptyBadgeContent => "badgeContent is empty",
        };
        f.write_str(msg)
    }
}

/// Structural defects of a navigation descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("shape error at {location}: {rule}")]
    Shape { location: Location, rule: ShapeRule },

    #[error("duplicate title '{title}' at {first} and {second}")]
    DuplicateTitle {
        title: String,
        first: Location,
        second: Location,
    },
}

impl NavError {
    /// Location of the offending entry (the second one for duplicates).
    pub fn location(&self) -> Location {
        match self {
            NavError::Shape { location, .. } => *location,
            NavError::DuplicateTitle { second, .. } => *second,
        }
    }
}

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid navigation descriptor: {0}")]
    Navigation(#[from] NavError),

    #[error("unknown routes: {0}")]
    UnknownRoutes(RouteReport),
}
