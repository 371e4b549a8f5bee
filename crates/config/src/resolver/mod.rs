//! Configuration resolution.
//!
//! Responsibilities:
//! - Read the five logical fields from a `KeyValueLookup` using a `KeyScheme`.
//! - Normalize raw values (empty strings and unsubstituted placeholders count as absent).
//! - Coerce the auto-seed flag and enforce the required storage fields.
//! - Report non-fatal diagnostics for values that resolve but look wrong.
//!
//! Does NOT handle:
//! - Choosing or layering sources (see `lookup::LayeredLookup`).
//! - Mapping errors to HTTP responses (see the server crate).
//!
//! Invariants:
//! - `resolve` is pure given its input: the same lookup contents always give
//!   the same record or the same error.
//! - A record is produced only if both storage fields are present (fail-closed).
//! - Non-empty values are passed through verbatim, whitespace included.
//! - The auto-seed flag is `true` only for the exact raw string `"true"`.
//! - The resolver holds no mutable state and is safe to share across threads.

mod diagnostics;
mod placeholder;

#[cfg(test)]
mod tests;

pub use diagnostics::Diagnostic;
pub use placeholder::{is_unsubstituted, placeholder_token};

use crate::constants::AUTO_SEED_TRUE;
use crate::error::ConfigError;
use crate::lookup::KeyValueLookup;
use crate::model::{ConfigurationRecord, DeploymentContext, KeyScheme};

/// Produces a `ConfigurationRecord` from a key-value source, or fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigResolver {
    scheme: KeyScheme,
    detect_placeholders: bool,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver for the serverless context with placeholder detection on.
    pub fn new() -> Self {
        Self::for_context(DeploymentContext::default())
    }

    /// Create a resolver reading the key names of `context`.
    pub fn for_context(context: DeploymentContext) -> Self {
        Self {
            scheme: context.key_scheme(),
            detect_placeholders: true,
        }
    }

    /// Replace the key scheme.
    pub fn with_key_scheme(mut self, scheme: KeyScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Enable or disable treating unsubstituted placeholder tokens as absent.
    pub fn with_placeholder_detection(mut self, enabled: bool) -> Self {
        self.detect_placeholders = enabled;
        self
    }

    /// The key names this resolver reads.
    pub fn key_scheme(&self) -> &KeyScheme {
        &self.scheme
    }

    /// Resolve a configuration record from `source`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Incomplete` naming the missing keys if the
    /// storage URL, the storage anon key, or both are absent. No other error
    /// is ever returned.
    pub fn resolve<L>(&self, source: &L) -> Result<ConfigurationRecord, ConfigError>
    where
        L: KeyValueLookup + ?Sized,
    {
        let storage_url = self.read(source, self.scheme.storage_url);
        let storage_anon_key = self.read(source, self.scheme.storage_anon_key);
        let drive_root_folder_id = self.read_optional(source, self.scheme.drive_root_folder_id);
        let drive_upload_endpoint = self.read_optional(source, self.scheme.drive_upload_endpoint);
        let auto_seed_enabled = self
            .scheme
            .auto_seed
            .and_then(|key| source.get(key))
            .is_some_and(|raw| raw == AUTO_SEED_TRUE);

        let (storage_url, storage_anon_key) = match (storage_url, storage_anon_key) {
            (Some(url), Some(key)) => (url, key),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(self.scheme.storage_url.to_string());
                }
                if key.is_none() {
                    missing.push(self.scheme.storage_anon_key.to_string());
                }
                return Err(ConfigError::Incomplete { missing });
            }
        };

        tracing::debug!(
            source = source.source_name(),
            has_drive_folder = drive_root_folder_id.is_some(),
            has_upload_endpoint = drive_upload_endpoint.is_some(),
            auto_seed_enabled,
            "Resolved configuration"
        );

        Ok(ConfigurationRecord::new(
            storage_url,
            storage_anon_key,
            drive_root_folder_id,
            drive_upload_endpoint,
            auto_seed_enabled,
        ))
    }

    /// Report values that resolve but are probably misconfigured.
    ///
    /// Diagnostics are advisory: they never change what `resolve` returns.
    pub fn diagnose<L>(&self, source: &L) -> Vec<Diagnostic>
    where
        L: KeyValueLookup + ?Sized,
    {
        let mut found = Vec::new();

        if let Some(url) = self.read(source, self.scheme.storage_url) {
            found.extend(diagnostics::check_http_url(self.scheme.storage_url, &url));
        }
        if let Some(key) = self.scheme.drive_upload_endpoint
            && let Some(endpoint) = self.read(source, key)
        {
            found.extend(diagnostics::check_http_url(key, &endpoint));
        }
        if let Some(key) = self.scheme.auto_seed
            && let Some(raw) = source.get(key)
        {
            found.extend(diagnostics::check_auto_seed(key, &raw));
        }

        found
    }

    fn read_optional<L>(&self, source: &L, key: Option<&'static str>) -> Option<String>
    where
        L: KeyValueLookup + ?Sized,
    {
        key.and_then(|key| self.read(source, key))
    }

    /// Read a string field, treating empty values and unsubstituted
    /// placeholders as absent.
    fn read<L>(&self, source: &L, key: &str) -> Option<String>
    where
        L: KeyValueLookup + ?Sized,
    {
        let value = source.get(key)?;
        if value.is_empty() {
            return None;
        }
        if self.detect_placeholders && is_unsubstituted(key, &value) {
            tracing::warn!(
                key,
                source = source.source_name(),
                "Ignoring unsubstituted build-time placeholder"
            );
            return None;
        }
        Some(value)
    }
}
