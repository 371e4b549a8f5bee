//! Client-global injection scripts.
//!
//! Responsibilities:
//! - Render the script that installs configuration onto the browser-global
//!   namespace before the application loads, plus its loaded flag.
//! - Render the build-time template whose placeholder tokens a deployment
//!   pipeline substitutes.
//!
//! Does NOT handle:
//! - Performing the substitution (the deployment pipeline does that).
//! - Validating values (see `resolver` module; the scripts have no error channel).
//!
//! Invariants:
//! - Output is always syntactically valid JavaScript: values are JSON-encoded
//!   and `</` is escaped so the script can be inlined in HTML.
//! - Absent or empty values render as `undefined`.

use std::fmt::Write as _;

use crate::constants::{
    GLOBAL_LOADED_FLAG, GLOBAL_NAMESPACE, GOOGLE_DRIVE_ROOT_FOLDER_ID,
    GOOGLE_DRIVE_UPLOAD_ENDPOINT, SUPABASE_ANON_KEY, SUPABASE_URL, VITE_GOOGLE_CLIENT_ID,
    VITE_SUPABASE_ANON_KEY, VITE_SUPABASE_URL,
};
use crate::lookup::KeyValueLookup;
use crate::resolver::placeholder_token;

/// Keys installed by the dev-server script, in output order.
const DEV_SERVER_KEYS: [&str; 5] = [
    VITE_GOOGLE_CLIENT_ID,
    GOOGLE_DRIVE_ROOT_FOLDER_ID,
    GOOGLE_DRIVE_UPLOAD_ENDPOINT,
    VITE_SUPABASE_URL,
    VITE_SUPABASE_ANON_KEY,
];

/// Keys installed by the build-time template, in output order.
const TEMPLATE_KEYS: [&str; 2] = [SUPABASE_URL, SUPABASE_ANON_KEY];

/// Which injection script to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptVariant {
    /// Values read from the source at render time.
    #[default]
    DevServer,
    /// Placeholder tokens left for the deployment pipeline to substitute.
    Template,
}

/// Render the injection script for `variant`.
///
/// `source` is only read by `ScriptVariant::DevServer`.
pub fn render_globals_script<L>(variant: ScriptVariant, source: &L) -> String
where
    L: KeyValueLookup + ?Sized,
{
    let entries: Vec<(&str, Option<String>)> = match variant {
        ScriptVariant::DevServer => DEV_SERVER_KEYS
            .iter()
            .map(|key| (*key, source.get(key).filter(|v| !v.is_empty())))
            .collect(),
        ScriptVariant::Template => TEMPLATE_KEYS
            .iter()
            .map(|key| (*key, Some(placeholder_token(key))))
            .collect(),
    };

    let mut script = String::new();
    script.push_str("// Generated by envbridge. Do not edit.\n");
    let _ = writeln!(script, "window.{GLOBAL_NAMESPACE} = {{");
    for (key, value) in entries {
        let literal = value.map_or_else(|| "undefined".to_string(), |v| js_string(&v));
        let _ = writeln!(script, "  {key}: {literal},");
    }
    script.push_str("};\n");
    let _ = writeln!(script, "window.{GLOBAL_LOADED_FLAG} = true;");
    script
}

/// Encode `value` as a JavaScript string literal safe to inline in HTML.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace("</", "<\\/")
}
