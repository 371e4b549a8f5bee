//! Shared application state for the HTTP boundary.
//!
//! Responsibilities:
//! - Hold the configuration source and resolver shared by all requests.
//! - Build the incomplete-configuration error message.
//!
//! Invariants:
//! - State is immutable after construction; cloning only bumps reference counts.
//! - No resolved record is cached: every call to `resolve` reads the source afresh.

use std::sync::Arc;

use envbridge_config::constants::DEFAULT_PLATFORM_LABEL;
use envbridge_config::{ConfigError, ConfigResolver, ConfigurationRecord, KeyValueLookup};

/// Shared state passed to request handlers.
#[derive(Clone)]
pub struct AppState {
    lookup: Arc<dyn KeyValueLookup>,
    resolver: ConfigResolver,
    platform_label: Arc<str>,
}

impl AppState {
    /// Create state serving `lookup` through `resolver`, labelled with the default platform.
    pub fn new(lookup: impl KeyValueLookup + 'static, resolver: ConfigResolver) -> Self {
        Self {
            lookup: Arc::new(lookup),
            resolver,
            platform_label: Arc::from(DEFAULT_PLATFORM_LABEL),
        }
    }

    /// Set the deployment platform named in the incomplete-configuration message.
    pub fn with_platform_label(mut self, label: impl Into<String>) -> Self {
        let label: String = label.into();
        self.platform_label = Arc::from(label);
        self
    }

    /// Resolve a fresh record from the configured source.
    pub fn resolve(&self) -> Result<ConfigurationRecord, ConfigError> {
        self.resolver.resolve(&self.lookup)
    }

    /// Name of the underlying lookup, for logs.
    pub fn source_name(&self) -> &str {
        self.lookup.source_name()
    }

    /// Client-facing message for `ConfigError::Incomplete`.
    pub fn incomplete_message(&self) -> String {
        format!(
            "Server configuration incomplete. Check {} Environment Variables.",
            self.platform_label
        )
    }
}
