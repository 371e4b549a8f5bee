//! envbridge - serve deployment configuration to browser applications.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging.
//! - Run the selected command and translate its outcome into an exit code.
//!
//! Does NOT handle:
//! - Resolution rules (see `envbridge-config`).
//! - HTTP routing (see `envbridge_server::http`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use dispatch::run_command;
use envbridge_config::load_dotenv;
use envbridge_server::init_logging;
use error::{ExitCode, exit_code_for};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Keep one-shot commands quiet unless RUST_LOG asks otherwise
    let default_directive = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    if let Err(e) = init_logging(cli.log_format, default_directive) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let code = match run_command(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };
    std::process::exit(code.as_i32());
}
