//! Process environment adapter.

use super::KeyValueLookup;

/// Reads values from the current process environment.
///
/// This is the serverless-function source. Values that are not valid
/// Unicode are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl KeyValueLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Ignoring non-unicode environment variable");
                None
            }
        }
    }

    fn source_name(&self) -> &str {
        "process-env"
    }
}
