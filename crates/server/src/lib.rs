//! HTTP boundary and command plumbing for envbridge.
//!
//! This crate serves the configuration resolved by `envbridge-config` over
//! HTTP and provides the shared pieces used by the `envbridge` binary.

pub mod http;
pub mod logging;
pub mod sources;
pub mod state;

pub use http::create_router;
pub use logging::{LogFormat, init_logging};
pub use sources::{SourceOptions, build_lookup};
pub use state::AppState;
