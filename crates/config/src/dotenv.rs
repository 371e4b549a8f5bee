//! `.env` loading into the process environment.
//!
//! Responsibilities:
//! - Load a `.env` file from the working directory before argument parsing,
//!   so local development mirrors a deployment's environment variables.
//! - Enforce the `DOTENV_DISABLED` gate to keep tests hermetic.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Errors never include raw `.env` line contents.
//! - Variables already present in the process environment are not overridden.

use crate::constants::DOTENV_DISABLED;
use crate::error::ConfigError;

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Returns `Ok(true)` if a file was loaded, `Ok(false)` if loading was
/// disabled or no file exists.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the file exists but has invalid syntax.
/// - `ConfigError::DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<bool, ConfigError> {
    if dotenv_disabled() {
        return Ok(false);
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(true)
        }
        Err(e) if is_not_found(&e) => Ok(false),
        Err(e) => Err(ConfigError::from_dotenv(e)),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
