//! HTTP boundary serving the resolved configuration.
//!
//! Responsibilities:
//! - Route `/config` and `/api/config` to the configuration handler.
//! - Attach the open CORS and JSON content-type headers to every response.
//! - Trace requests.
//!
//! Does NOT handle:
//! - Resolution rules (see `envbridge_config::ConfigResolver`).
//! - Binding sockets or shutdown (see the `serve` command).

mod cors;
mod handlers;


use axum::{Router, middleware, routing::any};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use cors::apply_response_headers;
pub use handlers::{ErrorBody, config_handler};

/// Paths the configuration handler is mounted on.
pub const CONFIG_PATHS: [&str; 2] = ["/config", "/api/config"];

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(CONFIG_PATHS[0], any(config_handler))
        .route(CONFIG_PATHS[1], any(config_handler))
        .layer(middleware::map_response(apply_response_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
