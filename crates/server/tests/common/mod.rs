//! Shared test utilities for envbridge integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading and
//!   clears configuration variables inherited from the host.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;

/// Variables read by any deployment context.
const CONFIG_VARS: [&str; 8] = [
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "VITE_SUPABASE_URL",
    "VITE_SUPABASE_ANON_KEY",
    "VITE_GOOGLE_CLIENT_ID",
    "VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID",
    "VITE_GOOGLE_DRIVE_UPLOAD_ENDPOINT",
    "ENABLE_AUTO_SEED",
];

/// Returns a hermetic `envbridge` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Configuration and tool variables are cleared to ensure no leakage from the host.
pub fn envbridge_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envbridge");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("ENVBRIDGE_CONTEXT")
        .env_remove("ENVBRIDGE_ENV_FILE")
        .env_remove("ENVBRIDGE_GLOBALS_FILE")
        .env_remove("ENVBRIDGE_LOG_FORMAT");

    cmd
}

/// Returns a hermetic command with both required serverless keys set.
#[allow(dead_code)]
pub fn envbridge_cmd_complete() -> Command {
    let mut cmd = envbridge_cmd();
    cmd.env("SUPABASE_URL", "https://x.supabase.co")
        .env("SUPABASE_ANON_KEY", "abc");
    cmd
}
