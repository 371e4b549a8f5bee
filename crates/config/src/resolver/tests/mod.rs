//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test required-field enforcement and the shape of resolved records.
//! - Test auto-seed coercion.
//! - Test placeholder and empty-value normalization.
//! - Test per-context key schemes and process-environment resolution.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.


use crate::lookup::StaticLookup;

/// Lookup with both required serverless keys set (scenario A).
pub fn minimal_lookup() -> StaticLookup {
    StaticLookup::new()
        .with("SUPABASE_URL", "https://x.supabase.co")
        .with("SUPABASE_ANON_KEY", "abc")
}
