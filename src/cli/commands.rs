//! Command dispatch: one function per subcommand

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, DescriptorFormat, MenuRenderer, TermTreeRenderer};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

/// Execute a parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".to_string()));
    };

    // completions must work even with a broken config file
    if let Commands::Completion { shell } = command {
        return cmd_completion(*shell);
    }

    let cwd = std::env::current_dir().ok();
    let settings = Settings::load(cwd.as_deref(), cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    run(&container, command, cwd.as_deref())
}

/// Dispatch a subcommand against an already wired container.
///
/// `cwd` is only used to report the local config path.
pub fn run(container: &ServiceContainer, command: &Commands, cwd: Option<&Path>) -> CliResult<()> {
    match command {
        Commands::Validate { file } => cmd_validate(container, file.as_deref()),
        Commands::Show { file } => cmd_show(container, file.as_deref()),
        Commands::Export {
            file,
            format,
            output,
        } => cmd_export(container, file.as_deref(), *format, output.as_deref()),
        Commands::Routes { file, registry } => {
            cmd_routes(container, file.as_deref(), registry.as_deref())
        }
        Commands::Config { command } => cmd_config(container, command, cwd),
        Commands::Completion { shell } => cmd_completion(*shell),
    }
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Explicit file, else configured descriptor, else built-in tree (`None`).
fn descriptor_path(container: &ServiceContainer, file: Option<&Path>) -> Option<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| container.settings.descriptor.clone())
}

fn source_label(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in dashboard".to_string())
}

#[instrument(skip(container))]
fn cmd_validate(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = descriptor_path(container, file);
    let tree = container.navigation.load_or_builtin(path.as_deref())?;
    let links: usize = tree.iter().map(|g| g.children().len()).sum();
    output::success(&format!(
        "{}: {} groups, {} links",
        source_label(path.as_deref()),
        tree.len(),
        links
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = descriptor_path(container, file);
    let tree = container.navigation.load_or_builtin(path.as_deref())?;
    let renderer = TermTreeRenderer::default();
    output::info(renderer.render(&tree).trim_end());
    Ok(())
}

#[instrument(skip(container))]
fn cmd_export(
    container: &ServiceContainer,
    file: Option<&Path>,
    format: Option<DescriptorFormat>,
    out: Option<&Path>,
) -> CliResult<()> {
    let path = descriptor_path(container, file);
    let tree = container.navigation.load_or_builtin(path.as_deref())?;
    match out {
        Some(target) => {
            container.navigation.write(&tree, target)?;
            output::action("Wrote", &target.display());
        }
        None => {
            let format = format.unwrap_or(container.settings.format);
            output::info(container.navigation.export(&tree, format)?.trim_end());
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_routes(container: &ServiceContainer, file: Option<&Path>, registry: Option<&Path>) -> CliResult<()> {
    let registry = registry
        .map(Path::to_path_buf)
        .or_else(|| container.settings.routes.clone())
        .ok_or_else(|| {
            CliError::InvalidArgs("no route registry: pass --registry or set `routes` in config".to_string())
        })?;

    let path = descriptor_path(container, file);
    let tree = container.navigation.load_or_builtin(path.as_deref())?;
    let report = container.navigation.check_routes(&tree, &registry)?;

    if report.is_ok() {
        output::success(&format!("{} routes known", report.checked));
        return Ok(());
    }

    output::header(&format!(
        "{} of {} routes unknown to {}",
        report.unknown.len(),
        report.checked,
        registry.display()
    ));
    for unknown in &report.unknown {
        output::failure(&format!("{} ({})", unknown.route, unknown.location));
    }

    if container.settings.strict_routes {
        report
            .into_result()
            .map_err(|e| CliError::from(ApplicationError::from(e)))
    } else {
        output::warning("strict_routes = false, not failing");
        Ok(())
    }
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands, cwd: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(container.settings.to_toml()?.trim_end());
        }
        ConfigCommands::Template => {
            output::info(Settings::template().trim_end());
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".to_string());
            output::detail(&format!("global: {}", global));
            if let Some(dir) = cwd {
                output::detail(&format!("local:  {}", local_config_path(dir).display()));
            }
        }
    }
    Ok(())
}
