//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the configuration source and resolver shared by every command.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping failures to exit codes (see `error` module).

use anyhow::{Context, Result};
use envbridge_config::{ConfigResolver, DeploymentContext};
use envbridge_server::build_lookup;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<ExitCode> {
    let context = DeploymentContext::from(cli.context);
    let resolver =
        ConfigResolver::for_context(context).with_placeholder_detection(!cli.no_placeholder_detection);
    let lookup =
        build_lookup(&cli.source_options()).context("Failed to load configuration sources")?;

    tracing::debug!(%context, layers = ?lookup.layer_names(), "Dispatching command");

    match cli.command {
        Commands::Serve {
            host,
            port,
            platform_label,
        } => {
            commands::serve::run(lookup, resolver, &host, port, &platform_label).await?;
            Ok(ExitCode::Success)
        }
        Commands::Check { strict } => commands::check::run(&lookup, &resolver, strict),
        Commands::RenderScript { variant, output } => {
            commands::render::run(&lookup, &resolver, variant.into(), output.as_deref())
        }
    }
}
