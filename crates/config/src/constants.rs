//! Centralized constants for the envbridge workspace.
//!
//! This module contains key names, wire names and defaults used across crates
//! to avoid string duplication between the resolver, the script renderer and
//! the HTTP boundary.

// =============================================================================
// Serverless / Static Build Keys
// =============================================================================

/// Storage (Supabase) project URL.
pub const SUPABASE_URL: &str = "SUPABASE_URL";

/// Storage (Supabase) anonymous key. Public; row-level security guards the data.
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Google Drive root folder id.
pub const GOOGLE_DRIVE_ROOT_FOLDER_ID: &str = "VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID";

/// Google Drive upload endpoint.
pub const GOOGLE_DRIVE_UPLOAD_ENDPOINT: &str = "VITE_GOOGLE_DRIVE_UPLOAD_ENDPOINT";

/// Auto-seed flag. Only the literal string `"true"` enables it.
pub const ENABLE_AUTO_SEED: &str = "ENABLE_AUTO_SEED";

// =============================================================================
// Dev Server Keys
// =============================================================================

/// Storage URL as exposed to the dev server.
pub const VITE_SUPABASE_URL: &str = "VITE_SUPABASE_URL";

/// Storage anonymous key as exposed to the dev server.
pub const VITE_SUPABASE_ANON_KEY: &str = "VITE_SUPABASE_ANON_KEY";

/// Google OAuth client id, only carried by the dev-server injection script.
pub const VITE_GOOGLE_CLIENT_ID: &str = "VITE_GOOGLE_CLIENT_ID";

// =============================================================================
// Client Globals
// =============================================================================

/// Browser-global namespace the injection scripts install configuration onto.
pub const GLOBAL_NAMESPACE: &str = "__APP_CONFIG__";

/// Browser-global flag set once the injection script has run.
pub const GLOBAL_LOADED_FLAG: &str = "__APP_CONFIG_LOADED__";

/// Prefix and suffix wrapped around a key name to form its build-time placeholder.
pub const PLACEHOLDER_AFFIX: &str = "__";

/// The only raw value that enables the auto-seed flag.
pub const AUTO_SEED_TRUE: &str = "true";

// =============================================================================
// HTTP Boundary Defaults
// =============================================================================

/// Default platform label used in the incomplete-configuration error body.
pub const DEFAULT_PLATFORM_LABEL: &str = "Vercel";

/// Default bind host for the HTTP boundary.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP boundary.
pub const DEFAULT_PORT: u16 = 8787;

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";
