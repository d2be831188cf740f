//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sidenav/sidenav.toml`
//! 3. Local config: `<dir>/.sidenav.toml` (working directory by default)
//! 4. Explicit config file passed with `--config`
//! 5. Environment variables: `SIDENAV_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, DescriptorFormat};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Unified configuration for sidenav.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Descriptor used when no file is given (default: built-in dashboard tree)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<PathBuf>,
    /// Route registry used by `routes` when no `--registry` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<PathBuf>,
    /// Default export format
    pub format: DescriptorFormat,
    /// Unknown routes fail the check (otherwise they are reported as warnings)
    pub strict_routes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            descriptor: None,
            routes: None,
            format: DescriptorFormat::Json,
            strict_routes: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub descriptor: Option<PathBuf>,
    pub routes: Option<PathBuf>,
    pub format: Option<DescriptorFormat>,
    pub strict_routes: Option<bool>,
}

/// Get the XDG config directory for sidenav.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sidenav").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sidenav.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".sidenav.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(fs: &dyn FileSystem, path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = fs.read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.descriptor = self
            .descriptor
            .take()
            .map(|p| PathBuf::from(expand_env_vars(&p.to_string_lossy())));
        self.routes = self
            .routes
            .take()
            .map(|p| PathBuf::from(expand_env_vars(&p.to_string_lossy())));
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            descriptor: overlay.descriptor.clone().or_else(|| self.descriptor.clone()),
            routes: overlay.routes.clone().or_else(|| self.routes.clone()),
            format: overlay.format.unwrap_or(self.format),
            strict_routes: overlay.strict_routes.unwrap_or(self.strict_routes),
        }
    }

    fn merge_file(self, fs: &dyn FileSystem, path: &Path) -> Result<Self, ApplicationError> {
        debug!("merging config file {}", path.display());
        let raw = load_raw_settings(fs, path)?;
        Ok(self.merge_with(&raw))
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory searched for `.sidenav.toml`
    /// * `explicit` - Config file given on the command line; must exist
    pub fn load(local_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with(&RealFileSystem, local_dir, explicit)
    }

    /// Same as [`Settings::load`], reading config files through `fs`.
    pub fn load_with(
        fs: &dyn FileSystem,
        local_dir: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if fs.is_file(&global_path) {
                current = current.merge_file(fs, &global_path)?;
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if fs.is_file(&local_path) {
                current = current.merge_file(fs, &local_path)?;
            }
        }

        if let Some(path) = explicit {
            current = current.merge_file(fs, path)?;
        }

        current = Self::apply_env_overrides(current, env_source())?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply SIDENAV_* environment variables as explicit overrides.
    ///
    /// Unset variables leave the setting alone; a set but unparsable value
    /// is a config error.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder().add_source(env).build().map_err(config_err)?;

        if let Some(val) = optional(config.get_string("descriptor"))? {
            settings.descriptor = Some(PathBuf::from(val));
        }
        if let Some(val) = optional(config.get_string("routes"))? {
            settings.routes = Some(PathBuf::from(val));
        }
        if let Some(val) = optional(config.get_string("format"))? {
            settings.format = parse_format(&val)?;
        }
        if let Some(val) = optional(config.get_bool("strict_routes"))? {
            settings.strict_routes = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# sidenav configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/sidenav/sidenav.toml
#   Local:  ./.sidenav.toml
#   Flag:   sidenav --config <file>
#   Env:    SIDENAV_* environment variables (e.g. SIDENAV_FORMAT=toml)

# Descriptor used when no file argument is given (default: built-in dashboard)
# descriptor = "~/app/navigation.json"

# Route registry for `sidenav routes` (TOML `routes = [...]` or one route per line)
# routes = "~/app/routes.txt"

# Export format: "json" or "toml"
# format = "json"

# Fail `sidenav routes` on unknown routes (false: warn only)
# strict_routes = true
"#
        .to_string()
    }
}

fn parse_format(value: &str) -> Result<DescriptorFormat, ApplicationError> {
    match value.to_ascii_lowercase().as_str() {
        "json" => Ok(DescriptorFormat::Json),
        "toml" => Ok(DescriptorFormat::Toml),
        other => Err(ApplicationError::Config {
            message: format!("unknown format '{other}', expected json or toml"),
        }),
    }
}

/// `SIDENAV_FORMAT`, `SIDENAV_STRICT_ROUTES`, ...
fn env_source() -> Environment {
    Environment::with_prefix("SIDENAV")
        .prefix_separator("_")
        .separator("__")
}

fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
