//! Configuration model for envbridge.
//!
//! Responsibilities:
//! - Define the client-visible `ConfigurationRecord` and its wire shape.
//! - Define deployment contexts and the key names each one reads.
//!
//! Does NOT handle:
//! - Reading values from a source (see `lookup` module).
//! - Validation and coercion rules (see `resolver` module).
//!
//! Invariants:
//! - A `ConfigurationRecord` always carries both storage fields.
//! - The `Debug` output of a record never contains the anon key.

mod context;
mod record;

pub use context::{DeploymentContext, KeyScheme};
pub use record::ConfigurationRecord;
