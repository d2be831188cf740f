//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::application::DescriptorFormat;

/// Sidebar navigation descriptors: validate, render, export and check routes
#[derive(Parser, Debug)]
#[command(name = "sidenav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Extra config file, applied after global and local config
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a descriptor (default: configured descriptor or built-in tree)
    Validate {
        /// Descriptor file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Render the navigation tree
    Show {
        /// Descriptor file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the canonical descriptor
    Export {
        /// Descriptor file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Output format (default from settings)
        #[arg(short, long, value_enum)]
        format: Option<DescriptorFormat>,
        /// Write to file instead of stdout (format from extension)
        #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "format")]
        output: Option<PathBuf>,
    },

    /// Check route targets against a route registry
    Routes {
        /// Descriptor file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Route registry (TOML `routes = [...]` or one route per line)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        registry: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a template config file
    Template,
    /// Show config file locations
    Path,
}
