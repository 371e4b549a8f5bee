//! Source selection for the configuration lookup.
//!
//! Responsibilities:
//! - Build the layered lookup every command resolves from.
//!
//! Invariants:
//! - Precedence: injected-globals file > env file > process environment.
//! - Files are read once, when the lookup is built; the process environment
//!   is read on every lookup.

use std::path::PathBuf;

use envbridge_config::{ConfigError, InjectedGlobals, LayeredLookup, ProcessEnv, StaticLookup};

/// Optional file sources supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// `.env`-format file layered above the process environment.
    pub env_file: Option<PathBuf>,
    /// Injected-globals JSON file layered above everything else.
    pub globals_file: Option<PathBuf>,
}

/// Build the layered lookup for `options`.
///
/// # Errors
///
/// Returns an error if an explicitly supplied file cannot be read or parsed.
pub fn build_lookup(options: &SourceOptions) -> Result<LayeredLookup, ConfigError> {
    let mut lookup = LayeredLookup::new();

    if let Some(path) = &options.globals_file {
        lookup = lookup.with_layer(InjectedGlobals::from_path(path)?);
    }
    if let Some(path) = &options.env_file {
        lookup = lookup.with_layer(StaticLookup::from_env_file(path)?);
    }
    lookup = lookup.with_layer(ProcessEnv);

    tracing::debug!(layers = ?lookup.layer_names(), "Built configuration lookup");
    Ok(lookup)
}
