//! Static constant-map adapter.

use std::collections::BTreeMap;
use std::path::Path;

use super::KeyValueLookup;
use crate::error::ConfigError;

/// An owned, immutable map of key-value pairs.
///
/// Used for template-substituted constants and for `.env`-format files
/// supplied explicitly on the command line. Loading a file never touches
/// the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLookup {
    values: BTreeMap<String, String>,
}

impl StaticLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single pair, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Read pairs from a `.env`-format file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EnvFileRead` if the file cannot be opened.
    /// - `ConfigError::DotenvParse` if a line has invalid syntax. The error
    ///   carries only the byte index, never the line content.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| match e {
            dotenvy::Error::Io(io_err) => ConfigError::EnvFileRead {
                path: path.to_path_buf(),
                kind: io_err.kind(),
            },
            other => ConfigError::from_dotenv(other),
        })?;

        let mut values = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(ConfigError::from_dotenv)?;
            values.insert(key, value);
        }

        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded env file");
        Ok(Self { values })
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticLookup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueLookup for StaticLookup {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn source_name(&self) -> &str {
        "static"
    }
}
