//! Read-only key-value sources for configuration resolution.
//!
//! Responsibilities:
//! - Define the `KeyValueLookup` capability the resolver reads from.
//! - Provide one adapter per deployment context: process environment,
//!   static maps (including `.env`-format files), and injected browser globals.
//! - Provide `LayeredLookup` to express which source wins.
//!
//! Does NOT handle:
//! - Blank/placeholder normalization (see `resolver` module).
//! - Loading `.env` into the process environment (see `dotenv` module).
//!
//! Invariants:
//! - Lookups never mutate their source.
//! - All adapters are `Send + Sync` so a single instance can serve concurrent requests.

mod env;
mod globals;
mod layered;
mod static_map;

use std::sync::Arc;

pub use env::ProcessEnv;
pub use globals::InjectedGlobals;
pub use layered::LayeredLookup;
pub use static_map::StaticLookup;

/// A read-only string-keyed lookup over a deployment-specific source.
pub trait KeyValueLookup: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Short human-readable name of the source, used in log lines.
    fn source_name(&self) -> &str {
        "lookup"
    }
}

impl<T: KeyValueLookup + ?Sized> KeyValueLookup for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}

impl<T: KeyValueLookup + ?Sized> KeyValueLookup for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}

impl<T: KeyValueLookup + ?Sized> KeyValueLookup for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}
