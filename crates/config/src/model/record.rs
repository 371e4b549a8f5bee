//! The resolved, client-visible configuration record.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Serializes a `SecretString` as its plain value.
///
/// The anon key must reach the browser verbatim; the secret wrapper only
/// keeps it out of logs and `Debug` output.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// The validated set of configuration values shipped to the browser.
///
/// Serializes with the wire names the client reads. Absent optional fields
/// serialize as `null` rather than being omitted, and `ENABLE_AUTO_SEED` is
/// always a boolean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[serde(rename = "SUPABASE_URL")]
    storage_url: String,
    #[serde(rename = "SUPABASE_ANON_KEY", with = "secret_string")]
    storage_anon_key: SecretString,
    #[serde(rename = "VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID")]
    drive_root_folder_id: Option<String>,
    #[serde(rename = "VITE_GOOGLE_DRIVE_UPLOAD_ENDPOINT")]
    drive_upload_endpoint: Option<String>,
    #[serde(rename = "ENABLE_AUTO_SEED", default)]
    auto_seed_enabled: bool,
}

impl ConfigurationRecord {
    pub(crate) fn new(
        storage_url: String,
        storage_anon_key: String,
        drive_root_folder_id: Option<String>,
        drive_upload_endpoint: Option<String>,
        auto_seed_enabled: bool,
    ) -> Self {
        Self {
            storage_url,
            storage_anon_key: SecretString::new(storage_anon_key.into()),
            drive_root_folder_id,
            drive_upload_endpoint,
            auto_seed_enabled,
        }
    }

    /// Storage (Supabase) project URL.
    pub fn storage_url(&self) -> &str {
        &self.storage_url
    }

    /// Storage anonymous key, exposed for serving to the client.
    pub fn storage_anon_key(&self) -> &str {
        self.storage_anon_key.expose_secret()
    }

    /// Google Drive root folder id, if configured.
    pub fn drive_root_folder_id(&self) -> Option<&str> {
        self.drive_root_folder_id.as_deref()
    }

    /// Google Drive upload endpoint, if configured.
    pub fn drive_upload_endpoint(&self) -> Option<&str> {
        self.drive_upload_endpoint.as_deref()
    }

    /// Whether the client should seed sample data on first load.
    pub fn auto_seed_enabled(&self) -> bool {
        self.auto_seed_enabled
    }
}

// `SecretString` has no `PartialEq`; compare the exposed key.
impl PartialEq for ConfigurationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.storage_url == other.storage_url
            && self.storage_anon_key() == other.storage_anon_key()
            && self.drive_root_folder_id == other.drive_root_folder_id
            && self.drive_upload_endpoint == other.drive_upload_endpoint
            && self.auto_seed_enabled == other.auto_seed_enabled
    }
}

impl Eq for ConfigurationRecord {}
