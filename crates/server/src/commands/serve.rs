//! `serve` command: run the HTTP boundary until Ctrl+C.

use anyhow::{Context, Result};
use envbridge_config::{ConfigResolver, LayeredLookup};
use envbridge_server::{AppState, create_router};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub async fn run(
    lookup: LayeredLookup,
    resolver: ConfigResolver,
    host: &str,
    port: u16,
    platform_label: &str,
) -> Result<()> {
    // Surface misconfiguration at startup; requests still fail loudly on their own.
    match resolver.resolve(&lookup) {
        Ok(_) => info!("Configuration complete"),
        Err(e) => warn!(error = %e, "Configuration incomplete; requests will return 500 until fixed"),
    }
    for diagnostic in resolver.diagnose(&lookup) {
        warn!(key = diagnostic.key, "{}", diagnostic.message);
    }

    let state = AppState::new(lookup, resolver).with_platform_label(platform_label);
    let app = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Serving configuration");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
