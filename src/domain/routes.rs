//! Route referential integrity: every `to` must name a known route.
//!
//! The registry is supplied by the integration (the routing collaborator's
//! route table); validation never consults it.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::domain::entities::NavigationTree;
use crate::domain::error::{DomainError, Location};

/// Set of route identifiers known to the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    routes: BTreeSet<String>,
}

impl RouteRegistry {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a plain route list: one identifier per line, `#` starts a comment.
    pub fn parse_list(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }
}

/// A route target that the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute {
    pub location: Location,
    pub route: String,
}

/// Outcome of a route check, unknown routes in tree order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteReport {
    pub checked: usize,
    pub unknown: Vec<UnknownRoute>,
}

impl RouteReport {
    pub fn is_ok(&self) -> bool {
        self.unknown.is_empty()
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(DomainError::UnknownRoutes(self))
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.unknown
                .iter()
                .map(|u| format!("'{}' ({})", u.route, u.location))
                .join(", ")
        )
    }
}

/// Check every group and link route against the registry.
pub fn check_routes(tree: &NavigationTree, registry: &RouteRegistry) -> RouteReport {
    let routes = tree.routes();
    let unknown = routes
        .iter()
        .filter(|(_, route)| !registry.contains(route))
        .map(|(location, route)| UnknownRoute {
            location: *location,
            route: route.to_string(),
        })
        .collect();
    RouteReport {
        checked: routes.len(),
        unknown,
    }
}
