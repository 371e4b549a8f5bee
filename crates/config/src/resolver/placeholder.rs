//! Detection of unsubstituted build-time placeholder tokens.
//!
//! A templated script ships `__SUPABASE_URL__` where the deployment pipeline
//! is expected to write the real value. If the pipeline did not run, the
//! token reaches the client verbatim. These helpers recognize that case.

use crate::constants::PLACEHOLDER_AFFIX;

/// The placeholder token for `key`, e.g. `__SUPABASE_URL__`.
pub fn placeholder_token(key: &str) -> String {
    format!("{PLACEHOLDER_AFFIX}{key}{PLACEHOLDER_AFFIX}")
}

/// Returns true if `value` is exactly the unsubstituted token for `key`.
///
/// Only an exact match counts: a value that merely contains the token, or
/// the token of a different key, is a real value.
pub fn is_unsubstituted(key: &str, value: &str) -> bool {
    value
        .strip_prefix(PLACEHOLDER_AFFIX)
        .and_then(|rest| rest.strip_suffix(PLACEHOLDER_AFFIX))
        .is_some_and(|inner| inner == key)
}
