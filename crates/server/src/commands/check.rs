//! `check` command: resolve once and print the record.

use anyhow::Result;
use envbridge_config::{ConfigResolver, KeyValueLookup};

use crate::error::ExitCode;

/// Print the resolved record as pretty JSON on stdout and diagnostics on stderr.
///
/// Incomplete configuration is returned as an error so the caller maps it to
/// `ExitCode::IncompleteConfig`.
pub fn run<L>(lookup: &L, resolver: &ConfigResolver, strict: bool) -> Result<ExitCode>
where
    L: KeyValueLookup + ?Sized,
{
    let diagnostics = resolver.diagnose(lookup);
    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let record = resolver.resolve(lookup)?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    if strict && !diagnostics.is_empty() {
        return Ok(ExitCode::DiagnosticsFailed);
    }
    Ok(ExitCode::Success)
}
