//! Deployment contexts and their key schemes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ENABLE_AUTO_SEED, GOOGLE_DRIVE_ROOT_FOLDER_ID, GOOGLE_DRIVE_UPLOAD_ENDPOINT, SUPABASE_ANON_KEY,
    SUPABASE_URL, VITE_SUPABASE_ANON_KEY, VITE_SUPABASE_URL,
};

/// The environment in which configuration is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentContext {
    /// A serverless function reading its process environment.
    #[default]
    Serverless,
    /// A local dev server exposing `VITE_`-prefixed variables.
    DevServer,
    /// A static build whose script was template-substituted by the pipeline.
    StaticBuild,
}

impl DeploymentContext {
    /// All known contexts, in declaration order.
    pub const ALL: [DeploymentContext; 3] = [
        DeploymentContext::Serverless,
        DeploymentContext::DevServer,
        DeploymentContext::StaticBuild,
    ];

    /// The key names this context reads for each logical field.
    pub const fn key_scheme(self) -> KeyScheme {
        match self {
            DeploymentContext::Serverless => KeyScheme {
                storage_url: SUPABASE_URL,
                storage_anon_key: SUPABASE_ANON_KEY,
                drive_root_folder_id: Some(GOOGLE_DRIVE_ROOT_FOLDER_ID),
                drive_upload_endpoint: Some(GOOGLE_DRIVE_UPLOAD_ENDPOINT),
                auto_seed: Some(ENABLE_AUTO_SEED),
            },
            DeploymentContext::DevServer => KeyScheme {
                storage_url: VITE_SUPABASE_URL,
                storage_anon_key: VITE_SUPABASE_ANON_KEY,
                drive_root_folder_id: Some(GOOGLE_DRIVE_ROOT_FOLDER_ID),
                drive_upload_endpoint: Some(GOOGLE_DRIVE_UPLOAD_ENDPOINT),
                auto_seed: Some(ENABLE_AUTO_SEED),
            },
            // The templated script only ever carries the two storage values.
            DeploymentContext::StaticBuild => KeyScheme {
                storage_url: SUPABASE_URL,
                storage_anon_key: SUPABASE_ANON_KEY,
                drive_root_folder_id: None,
                drive_upload_endpoint: None,
                auto_seed: None,
            },
        }
    }

    /// The kebab-case name used on the command line and in serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeploymentContext::Serverless => "serverless",
            DeploymentContext::DevServer => "dev-server",
            DeploymentContext::StaticBuild => "static-build",
        }
    }
}

impl fmt::Display for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw key names read for each logical field of a `ConfigurationRecord`.
///
/// A `None` key means the field is never read in that context: optional
/// strings stay absent and the auto-seed flag stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyScheme {
    /// Key for the storage project URL (required).
    pub storage_url: &'static str,
    /// Key for the storage anonymous key (required).
    pub storage_anon_key: &'static str,
    /// Key for the Google Drive root folder id.
    pub drive_root_folder_id: Option<&'static str>,
    /// Key for the Google Drive upload endpoint.
    pub drive_upload_endpoint: Option<&'static str>,
    /// Key for the auto-seed flag.
    pub auto_seed: Option<&'static str>,
}

impl Default for KeyScheme {
    fn default() -> Self {
        DeploymentContext::default().key_scheme()
    }
}
