//! Non-fatal configuration diagnostics.
//!
//! Diagnostics point at values that resolve but are probably wrong. They
//! never change the outcome of `ConfigResolver::resolve`.

use std::fmt;

/// A warning about a single configuration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Raw key name the warning is about.
    pub key: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Checks that `raw` parses as an absolute http(s) URL with a host.
pub(super) fn check_http_url(key: &'static str, raw: &str) -> Option<Diagnostic> {
    let message = match url::Url::parse(raw) {
        Err(e) => format!("not an absolute URL ({e})"),
        Ok(parsed) if parsed.scheme() != "http" && parsed.scheme() != "https" => {
            format!("scheme must be http or https, got: {}", parsed.scheme())
        }
        Ok(parsed) if parsed.host_str().is_none() => "host is required".to_string(),
        Ok(_) => return None,
    };
    Some(Diagnostic { key, message })
}

/// Flags auto-seed values that are neither `"true"` nor `"false"`, since
/// they silently resolve to `false`.
pub(super) fn check_auto_seed(key: &'static str, raw: &str) -> Option<Diagnostic> {
    match raw {
        "true" | "false" => None,
        other => Some(Diagnostic {
            key,
            message: format!(
                "value '{other}' is treated as false; only the exact string 'true' enables auto-seed"
            ),
        }),
    }
}
