//! Navigation descriptor service
//!
//! Loads descriptors and route registries through the filesystem boundary,
//! validates them and converts between formats.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::format::{parse_descriptor, parse_registry, render_descriptor, DescriptorFormat};
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{
    check_routes, shared_dashboard, validate, NavigationTree, RawNavigationTree, RouteRegistry, RouteReport,
};
use crate::infrastructure::traits::FileSystem;

/// Service for loading and checking navigation descriptors.
pub struct NavigationService {
    fs: Arc<dyn FileSystem>,
}

impl NavigationService {
    /// Create a new navigation service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse a descriptor file without validating it.
    #[instrument(level = "debug", skip(self))]
    pub fn load_raw(&self, path: &Path) -> ApplicationResult<RawNavigationTree> {
        let format = DescriptorFormat::from_path(path)?;
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read descriptor", path)?;
        let raw = parse_descriptor(&content, format, path)?;
        debug!("load_raw: {} groups from {}", raw.groups.len(), path.display());
        Ok(raw)
    }

    /// Read, parse and validate a descriptor file.
    pub fn load(&self, path: &Path) -> ApplicationResult<NavigationTree> {
        let raw = self.load_raw(path)?;
        let tree = validate(&raw)?;
        info!("validated {} groups from {}", tree.len(), path.display());
        Ok(tree)
    }

    /// Load `path` if given, otherwise the built-in dashboard tree.
    pub fn load_or_builtin(&self, path: Option<&Path>) -> ApplicationResult<Arc<NavigationTree>> {
        match path {
            Some(p) => Ok(Arc::new(self.load(p)?)),
            None => {
                debug!("load_or_builtin: using built-in dashboard tree");
                Ok(shared_dashboard()?)
            }
        }
    }

    /// Read a route registry file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_registry(&self, path: &Path) -> ApplicationResult<RouteRegistry> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read route registry", path)?;
        let registry = parse_registry(&content, path)?;
        debug!("load_registry: {} routes", registry.len());
        Ok(registry)
    }

    /// Check all route targets of `tree` against the registry at `registry_path`.
    pub fn check_routes(&self, tree: &NavigationTree, registry_path: &Path) -> ApplicationResult<RouteReport> {
        let registry = self.load_registry(registry_path)?;
        let report = check_routes(tree, &registry);
        debug!(
            "check_routes: {} checked, {} unknown",
            report.checked,
            report.unknown.len()
        );
        Ok(report)
    }

    /// Canonical descriptor text for a validated tree.
    pub fn export(&self, tree: &NavigationTree, format: DescriptorFormat) -> ApplicationResult<String> {
        render_descriptor(&RawNavigationTree::from(tree), format)
    }

    /// Write the canonical descriptor to `path`, format taken from its extension.
    pub fn write(&self, tree: &NavigationTree, path: &Path) -> ApplicationResult<()> {
        let format = DescriptorFormat::from_path(path)?;
        let content = self.export(tree, format)?;
        self.fs
            .write(path, &content)
            .with_path_context("write descriptor", path)
    }
}
