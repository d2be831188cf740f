//! Descriptor and route registry file formats

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{RawNavigationGroup, RawNavigationTree, RouteRegistry};

/// On-disk descriptor format, picked by file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorFormat {
    /// Bare array of groups (same shape as the dashboard literal)
    #[default]
    Json,
    /// `[[groups]]` array of tables
    Toml,
}

impl DescriptorFormat {
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for DescriptorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorFormat::Json => write!(f, "json"),
            DescriptorFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Parse descriptor content; `path` is only used for error messages.
///
/// JSON descriptors are either a bare array of groups or wrapped in
/// `{"groups": [...]}`; the first non-whitespace byte picks the form so
/// serde_json reports line and column for the form actually used.
pub fn parse_descriptor(
    content: &str,
    format: DescriptorFormat,
    path: &Path,
) -> ApplicationResult<RawNavigationTree> {
    let parse_err = |message: String| ApplicationError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match format {
        DescriptorFormat::Json => {
            if content.trim_start().starts_with('[') {
                serde_json::from_str::<Vec<RawNavigationGroup>>(content)
                    .map(RawNavigationTree::from_groups)
                    .map_err(|e| parse_err(e.to_string()))
            } else {
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))
            }
        }
        DescriptorFormat::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}

/// Serialise a raw descriptor in canonical form.
pub fn render_descriptor(raw: &RawNavigationTree, format: DescriptorFormat) -> ApplicationResult<String> {
    let serialize_err = |message: String| ApplicationError::Serialize { message };
    match format {
        DescriptorFormat::Json => {
            serde_json::to_string_pretty(&raw.groups).map_err(|e| serialize_err(e.to_string()))
        }
        DescriptorFormat::Toml => toml::to_string_pretty(raw).map_err(|e| serialize_err(e.to_string())),
    }
}

#[derive(Deserialize)]
struct RouteFile {
    #[serde(default)]
    routes: Vec<String>,
}

/// Parse a route registry: TOML `routes = [...]` for `.toml`, a plain list otherwise.
pub fn parse_registry(content: &str, path: &Path) -> ApplicationResult<RouteRegistry> {
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    if is_toml {
        let file: RouteFile = toml::from_str(content).map_err(|e| ApplicationError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(RouteRegistry::new(file.routes))
    } else {
        Ok(RouteRegistry::parse_list(content))
    }
}
