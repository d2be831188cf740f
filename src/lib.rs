//! Sidebar navigation descriptors for the dashboard application.
//!
//! - [`domain`] - typed navigation model, validation, route integrity
//! - [`application`] - descriptor formats, rendering, services
//! - [`infrastructure`] - filesystem boundary and service wiring
//! - [`config`] - layered settings
//! - [`cli`] - the `sidenav` command line

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{dashboard, validate, NavError, NavigationGroup, NavigationLink, NavigationTree};
