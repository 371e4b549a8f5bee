//! Error types for configuration resolution and source loading.
//!
//! Responsibilities:
//! - Define the domain error (`Incomplete`) returned by `ConfigResolver::resolve`.
//! - Define loader errors for `.env` files and injected-globals documents.
//!
//! Does NOT handle:
//! - Mapping errors to HTTP responses or exit codes (see the server crate).
//!
//! Invariants:
//! - `resolve` only ever returns `ConfigError::Incomplete`.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - `Incomplete` names the missing keys, never any configured value.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading sources or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or both required storage keys are absent, empty, or unsubstituted placeholders.
    #[error("Configuration incomplete: missing {}", missing.join(", "))]
    Incomplete { missing: Vec<String> },

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    /// An explicitly requested env file could not be read.
    #[error("Failed to read env file at {path}: {kind}")]
    EnvFileRead { path: PathBuf, kind: ErrorKind },

    /// An explicitly requested globals file could not be read.
    #[error("Failed to read globals file at {path}: {kind}")]
    GlobalsFileRead { path: PathBuf, kind: ErrorKind },

    /// An injected-globals document is not valid JSON.
    #[error("Failed to parse injected globals: {0}")]
    GlobalsParse(#[from] serde_json::Error),

    /// An injected-globals document is valid JSON but not a flat object.
    #[error("Invalid injected globals: {message}")]
    GlobalsShape { message: String },
}

impl ConfigError {
    /// Map a dotenvy error into a `ConfigError` without leaking file contents.
    pub(crate) fn from_dotenv(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }

    /// Returns true if this is the domain-level incomplete-configuration error.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ConfigError::Incomplete { .. })
    }
}
