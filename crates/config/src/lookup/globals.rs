//! Injected browser-globals adapter.
//!
//! The dev server and static builds install configuration as a flat object
//! on a browser-global namespace. This adapter reads the JSON form of that
//! object so the same resolver can validate it.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use super::KeyValueLookup;
use crate::error::ConfigError;

/// A lookup over a flat JSON object of injected globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectedGlobals {
    values: BTreeMap<String, String>,
}

impl InjectedGlobals {
    /// Parse a JSON document holding the global object.
    ///
    /// Strings are kept verbatim, booleans and numbers are rendered to their
    /// JSON text, and `null` is treated as absent.
    ///
    /// # Errors
    ///
    /// - `ConfigError::GlobalsParse` if the document is not valid JSON.
    /// - `ConfigError::GlobalsShape` if it is not an object, or a member is
    ///   a nested object or array.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(document)?;
        match value {
            Value::Object(map) => Self::from_object(map),
            other => Err(ConfigError::GlobalsShape {
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Read and parse a globals document from disk.
    ///
    /// # Errors
    ///
    /// - `ConfigError::GlobalsFileRead` if the file cannot be read.
    /// - Any error of [`InjectedGlobals::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let document =
            std::fs::read_to_string(path).map_err(|e| ConfigError::GlobalsFileRead {
                path: path.to_path_buf(),
                kind: e.kind(),
            })?;
        let globals = Self::from_json_str(&document)?;
        tracing::debug!(path = %path.display(), keys = globals.values.len(), "Loaded injected globals");
        Ok(globals)
    }

    fn from_object(map: Map<String, Value>) -> Result<Self, ConfigError> {
        let mut values = BTreeMap::new();
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(ConfigError::GlobalsShape {
                        message: format!(
                            "member '{}' must be a scalar, got {}",
                            key,
                            json_kind(&other)
                        ),
                    });
                }
            };
            values.insert(key, text);
        }
        Ok(Self { values })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl KeyValueLookup for InjectedGlobals {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn source_name(&self) -> &str {
        "injected-globals"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_string_members() {
        let globals = InjectedGlobals::from_json_str(
            r#"{"VITE_SUPABASE_URL": "https://x.supabase.co", "VITE_SUPABASE_ANON_KEY": "abc"}"#,
        )
        .unwrap();
        assert_eq!(
            globals.get("VITE_SUPABASE_URL").as_deref(),
            Some("https://x.supabase.co")
        );
        assert_eq!(globals.get("VITE_SUPABASE_ANON_KEY").as_deref(), Some("abc"));
    }

    #[test]
    fn test_scalars_render_as_json_text_and_null_is_absent() {
        let globals = InjectedGlobals::from_json_str(
            r#"{"ENABLE_AUTO_SEED": true, "COUNT": 3, "VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID": null}"#,
        )
        .unwrap();
        assert_eq!(globals.get("ENABLE_AUTO_SEED").as_deref(), Some("true"));
        assert_eq!(globals.get("COUNT").as_deref(), Some("3"));
        assert!(globals.get("VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID").is_none());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-globals.json");
        let err = InjectedGlobals::from_path(&path).unwrap_err();
        match &err {
            ConfigError::GlobalsFileRead { path: reported, kind } => {
                assert_eq!(reported, &path);
                assert_eq!(*kind, std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected GlobalsFileRead, got {:?}", other),
        }
        assert!(err.to_string().contains("missing-globals.json"));
    }

    #[test]
    fn test_rejects_non_object_document() {
        let err = InjectedGlobals::from_json_str("[1, 2]").unwrap_err();
        match err {
            ConfigError::GlobalsShape { message } => assert!(message.contains("array")),
            other => panic!("Expected GlobalsShape, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nested_members() {
        let err = InjectedGlobals::from_json_str(r#"{"SUPABASE_URL": {"nested": 1}}"#).unwrap_err();
        match err {
            ConfigError::GlobalsShape { message } => {
                assert!(message.contains("SUPABASE_URL"));
                assert!(message.contains("object"));
            }
            other => panic!("Expected GlobalsShape, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = InjectedGlobals::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::GlobalsParse(_)));
    }
}
