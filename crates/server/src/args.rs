//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map CLI value enums onto configuration types.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use envbridge_config::constants::{DEFAULT_HOST, DEFAULT_PLATFORM_LABEL, DEFAULT_PORT};
use envbridge_config::{DeploymentContext, ScriptVariant};
use envbridge_server::{LogFormat, SourceOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envbridge")]
#[command(about = "Serve deployment environment configuration to browser applications", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envbridge serve --port 8787\n  envbridge --env-file .env.production check --strict\n  envbridge --context dev-server render-script --output public/env.js\n  envbridge render-script --variant template\n"
)]
pub struct Cli {
    /// Deployment context that decides which key names are read
    #[arg(long, global = true, env = "ENVBRIDGE_CONTEXT", value_enum, default_value_t = ContextArg::Serverless)]
    pub context: ContextArg,

    /// `.env`-format file layered over the process environment
    #[arg(long, global = true, env = "ENVBRIDGE_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// JSON file of injected globals, layered over `--env-file`
    #[arg(long, global = true, env = "ENVBRIDGE_GLOBALS_FILE", value_name = "FILE")]
    pub globals_file: Option<PathBuf>,

    /// Keep unsubstituted `__KEY__` placeholder values instead of treating them as missing
    #[arg(long, global = true)]
    pub no_placeholder_detection: bool,

    /// Log line format (logs always go to stderr)
    #[arg(long, global = true, env = "ENVBRIDGE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// File sources named by the global options.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            env_file: self.env_file.clone(),
            globals_file: self.globals_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the configuration over HTTP at /config and /api/config
    Serve {
        /// Address to bind
        #[arg(long, env = "ENVBRIDGE_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Platform named in the incomplete-configuration error message
        #[arg(long, env = "ENVBRIDGE_PLATFORM_LABEL", default_value = DEFAULT_PLATFORM_LABEL)]
        platform_label: String,
    },

    /// Resolve once and print the configuration as JSON
    Check {
        /// Also fail (exit code 3) when diagnostics are reported
        #[arg(long)]
        strict: bool,
    },

    /// Write the client-global injection script
    RenderScript {
        /// Which script to render
        #[arg(long, value_enum, default_value_t = VariantArg::DevServer)]
        variant: VariantArg,

        /// Output file path (writes to stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    Serverless,
    DevServer,
    StaticBuild,
}

impl From<ContextArg> for DeploymentContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Serverless => DeploymentContext::Serverless,
            ContextArg::DevServer => DeploymentContext::DevServer,
            ContextArg::StaticBuild => DeploymentContext::StaticBuild,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Values read from the configured sources
    DevServer,
    /// Placeholder tokens for the deployment pipeline to substitute
    Template,
}

impl From<VariantArg> for ScriptVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::DevServer => ScriptVariant::DevServer,
            VariantArg::Template => ScriptVariant::Template,
        }
    }
}
