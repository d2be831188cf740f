//! Built-in sidebar content of the dashboard application.

use std::sync::{Arc, OnceLock};

use crate::domain::descriptor::{RawIcon, RawNavigationGroup, RawNavigationLink, RawNavigationTree};
use crate::domain::entities::NavigationTree;
use crate::domain::error::NavError;
use crate::domain::validation::validate;

static DASHBOARD: OnceLock<Arc<NavigationTree>> = OnceLock::new();

/// The raw dashboard literal, before validation.
pub fn dashboard_descriptor() -> RawNavigationTree {
    RawNavigationTree::from_groups(vec![RawNavigationGroup {
        title: Some("Dashboards".to_string()),
        icon: Some(RawIcon {
            icon: "bx-home".to_string(),
        }),
        children: Some(vec![
            RawNavigationLink::new("Analytics", "dashboards-analytics"),
            RawNavigationLink::new("CRM", "dashboards-crm"),
            RawNavigationLink::new("eCommerce", "dashboards-ecommerce"),
        ]),
        badge_content: Some("New".to_string()),
        badge_class: Some("bg-error".to_string()),
        ..Default::default()
    }])
}

fn cached() -> Result<&'static Arc<NavigationTree>, NavError> {
    if let Some(tree) = DASHBOARD.get() {
        return Ok(tree);
    }
    let tree = validate(&dashboard_descriptor())?;
    Ok(DASHBOARD.get_or_init(|| Arc::new(tree)))
}

/// Validated dashboard tree, built on first call and shared afterwards.
pub fn dashboard() -> Result<&'static NavigationTree, NavError> {
    cached().map(|tree| tree.as_ref())
}

/// Owned handle to the same cached tree as [`dashboard`].
pub fn shared_dashboard() -> Result<Arc<NavigationTree>, NavError> {
    cached().map(Arc::clone)
}
