//! Configuration resolution for envbridge.
//!
//! This crate turns key-value deployment sources (process environment,
//! `.env`-format files, injected browser globals) into the validated
//! configuration record served to the browser application.

pub mod constants;
mod dotenv;
mod error;
pub mod lookup;
mod model;
pub mod resolver;
pub mod script;

pub use dotenv::{dotenv_disabled, load_dotenv};
pub use error::ConfigError;
pub use lookup::{InjectedGlobals, KeyValueLookup, LayeredLookup, ProcessEnv, StaticLookup};
pub use model::{ConfigurationRecord, DeploymentContext, KeyScheme};
pub use resolver::{ConfigResolver, Diagnostic};
pub use script::{ScriptVariant, render_globals_script};
