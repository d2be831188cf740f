//! Domain layer: navigation model, validation and route integrity
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod dashboard;
pub mod descriptor;
pub mod entities;
pub mod error;
pub mod routes;
pub mod validation;

pub use dashboard::{dashboard, dashboard_descriptor, shared_dashboard};
pub use descriptor::{RawIcon, RawNavigationGroup, RawNavigationLink, RawNavigationTree};
pub use entities::*;
pub use error::{DomainError, Location, NavError, ShapeRule};
pub use routes::{check_routes, RouteRegistry, RouteReport, UnknownRoute};
pub use validation::validate;
