//! `render-script` command: write the client-global injection script.

use anyhow::{Context, Result};
use envbridge_config::{
    ConfigError, ConfigResolver, DeploymentContext, KeyValueLookup, ScriptVariant,
    render_globals_script,
};
use std::path::Path;

use crate::error::ExitCode;

/// Render `variant` from `lookup` to `output`, or stdout when `None`.
pub fn run<L>(
    lookup: &L,
    resolver: &ConfigResolver,
    variant: ScriptVariant,
    output: Option<&Path>,
) -> Result<ExitCode>
where
    L: KeyValueLookup + ?Sized,
{
    // The script has no error channel in the browser, so warn here instead.
    if variant == ScriptVariant::DevServer
        && let Err(e) = check_dev_server_config(resolver, lookup)
    {
        tracing::warn!(error = %e, "Rendering dev-server script with incomplete configuration");
    }

    let script = render_globals_script(variant, lookup);
    match output {
        Some(path) => {
            std::fs::write(path, &script)
                .with_context(|| format!("Failed to write script to {}", path.display()))?;
            tracing::info!(path = %path.display(), ?variant, "Wrote injection script");
        }
        None => print!("{script}"),
    }
    Ok(ExitCode::Success)
}

/// Resolve with the dev-server key names, keeping every other resolver setting.
fn check_dev_server_config<L>(resolver: &ConfigResolver, lookup: &L) -> Result<(), ConfigError>
where
    L: KeyValueLookup + ?Sized,
{
    resolver
        .with_key_scheme(DeploymentContext::DevServer.key_scheme())
        .resolve(lookup)
        .map(|_| ())
}
