//! Exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so deployment scripts can tell an
//!   incomplete configuration apart from other failures.
//!
//! Invariants:
//! - Exit code 2 is reserved for incomplete configuration.
//! - Exit code 3 is reserved for diagnostics reported under `check --strict`.

use envbridge_config::ConfigError;

/// Structured exit codes for `envbridge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable source file, bind failure, I/O error.
    GeneralError = 1,

    /// Required storage configuration is missing.
    ///
    /// Scripts should fix the deployment's environment variables.
    IncompleteConfig = 2,

    /// Configuration resolved, but `check --strict` found suspicious values.
    DiagnosticsFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_incomplete() {
            ExitCode::IncompleteConfig
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Map an error from a command to an exit code.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::GeneralError)
}
