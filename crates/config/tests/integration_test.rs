//! Integration tests for configuration resolution across deployment contexts.
//!
//! These tests exercise the public API end to end: a source is loaded the
//! way each deployment context loads it, then resolved into the record the
//! browser receives.

use envbridge_config::{
    ConfigError, ConfigResolver, DeploymentContext, InjectedGlobals, KeyValueLookup,
    LayeredLookup, ScriptVariant, StaticLookup, render_globals_script,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Scenario A: both required keys present, everything else defaulted.
#[test]
fn test_scenario_a_minimal_record() {
    let lookup = StaticLookup::new()
        .with("SUPABASE_URL", "https://x.supabase.co")
        .with("SUPABASE_ANON_KEY", "abc");

    let record = ConfigResolver::new().resolve(&lookup).unwrap();
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "SUPABASE_URL": "https://x.supabase.co",
            "SUPABASE_ANON_KEY": "abc",
            "VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID": null,
            "VITE_GOOGLE_DRIVE_UPLOAD_ENDPOINT": null,
            "ENABLE_AUTO_SEED": false,
        })
    );
}

/// Scenario B: an empty source fails closed.
#[test]
fn test_scenario_b_empty_source() {
    let err = ConfigResolver::new()
        .resolve(&StaticLookup::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Incomplete { .. }));
}

/// Scenario E: auto-seed coercion.
#[test]
fn test_scenario_e_auto_seed() {
    let base = StaticLookup::new()
        .with("SUPABASE_URL", "https://x.supabase.co")
        .with("SUPABASE_ANON_KEY", "abc");
    let resolver = ConfigResolver::new();

    let enabled = resolver
        .resolve(&base.clone().with("ENABLE_AUTO_SEED", "true"))
        .unwrap();
    let disabled = resolver
        .resolve(&base.clone().with("ENABLE_AUTO_SEED", "false"))
        .unwrap();
    let omitted = resolver.resolve(&base).unwrap();

    assert!(enabled.auto_seed_enabled());
    assert!(!disabled.auto_seed_enabled());
    assert!(!omitted.auto_seed_enabled());
}

/// An explicit env file layered over a globals document: globals win.
#[test]
fn test_layered_env_file_and_globals() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join("deploy.env");
    fs::write(
        &env_path,
        "SUPABASE_URL=https://file.supabase.co\nSUPABASE_ANON_KEY=file-key\nENABLE_AUTO_SEED=true\n",
    )
    .unwrap();
    let globals_path = temp_dir.path().join("globals.json");
    fs::write(&globals_path, r#"{"SUPABASE_ANON_KEY": "globals-key"}"#).unwrap();

    let lookup = LayeredLookup::new()
        .with_layer(InjectedGlobals::from_path(&globals_path).unwrap())
        .with_layer(StaticLookup::from_env_file(&env_path).unwrap());

    let record = ConfigResolver::new().resolve(&lookup).unwrap();
    assert_eq!(record.storage_url(), "https://file.supabase.co");
    assert_eq!(record.storage_anon_key(), "globals-key");
    assert!(record.auto_seed_enabled());
}

/// Read the object installed by a rendered script back into globals, the way
/// the browser would see it after the script runs.
fn installed_globals(script: &str) -> InjectedGlobals {
    let mut object = serde_json::Map::new();
    let body = script
        .lines()
        .skip_while(|line| !line.ends_with("= {"))
        .skip(1)
        .take_while(|line| *line != "};");
    for line in body {
        let (key, literal) = line.trim().split_once(": ").unwrap();
        let literal = literal.trim_end_matches(',');
        if literal != "undefined" {
            let value: String = serde_json::from_str(literal).unwrap();
            object.insert(key.to_string(), value.into());
        }
    }
    InjectedGlobals::from_json_str(&serde_json::Value::Object(object).to_string()).unwrap()
}

/// A template substituted by the deployment pipeline installs globals that
/// resolve in the static-build context.
#[test]
fn test_substituted_template_round_trip() {
    let template = render_globals_script(ScriptVariant::Template, &StaticLookup::new());
    let substituted = template
        .replace("__SUPABASE_URL__", "https://prod.supabase.co")
        .replace("__SUPABASE_ANON_KEY__", "prod-key");

    let globals = installed_globals(&substituted);
    assert_eq!(
        globals.get("SUPABASE_URL").as_deref(),
        Some("https://prod.supabase.co")
    );
    let record = ConfigResolver::for_context(DeploymentContext::StaticBuild)
        .resolve(&globals)
        .unwrap();
    assert_eq!(record.storage_url(), "https://prod.supabase.co");
    assert_eq!(record.storage_anon_key(), "prod-key");
}

/// A dev-server script installs exactly the values it was rendered from.
#[test]
fn test_dev_server_script_round_trip() {
    let source = StaticLookup::new()
        .with("VITE_SUPABASE_URL", "https://dev.supabase.co")
        .with("VITE_SUPABASE_ANON_KEY", "dev</script>key")
        .with("VITE_GOOGLE_DRIVE_ROOT_FOLDER_ID", " folder ");
    let script = render_globals_script(ScriptVariant::DevServer, &source);

    let resolver = ConfigResolver::for_context(DeploymentContext::DevServer);
    let record = resolver.resolve(&installed_globals(&script)).unwrap();
    assert_eq!(record, resolver.resolve(&source).unwrap());
    assert_eq!(record.storage_anon_key(), "dev</script>key");
    assert_eq!(record.drive_root_folder_id(), Some(" folder "));
}

/// A shared resolver and lookup serve concurrent callers.
#[test]
fn test_concurrent_resolution() {
    let lookup = std::sync::Arc::new(
        StaticLookup::new()
            .with("SUPABASE_URL", "https://x.supabase.co")
            .with("SUPABASE_ANON_KEY", "abc"),
    );
    let resolver = ConfigResolver::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let lookup = lookup.clone();
            std::thread::spawn(move || resolver.resolve(&lookup).unwrap())
        })
        .collect();

    let expected = resolver.resolve(&lookup).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Trait objects are accepted wherever a lookup is.
#[test]
fn test_dyn_lookup() {
    let lookup: std::sync::Arc<dyn KeyValueLookup> = std::sync::Arc::new(
        StaticLookup::new()
            .with("SUPABASE_URL", "https://x.supabase.co")
            .with("SUPABASE_ANON_KEY", "abc"),
    );
    assert!(ConfigResolver::new().resolve(&lookup).is_ok());
    assert_eq!(lookup.source_name(), "static");
}
