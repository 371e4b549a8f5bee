//! Request handler for the configuration endpoints.

use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Serve the resolved configuration.
///
/// - `GET` resolves a fresh record: `200` with the record, or `500` if the
///   configuration is incomplete.
/// - `OPTIONS` answers the CORS preflight with an empty `200`.
/// - Any other method is `405`.
pub async fn config_handler(State(state): State<AppState>, method: Method) -> Response {
    match method {
        Method::GET => match state.resolve() {
            Ok(record) => (StatusCode::OK, Json(record)).into_response(),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    source = state.source_name(),
                    "Refusing to serve incomplete configuration"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new(state.incomplete_message())),
                )
                    .into_response()
            }
        },
        Method::OPTIONS => StatusCode::OK.into_response(),
        other => {
            tracing::debug!(method = %other, "Rejecting unsupported method");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody::new("Method not allowed")),
            )
                .into_response()
        }
    }
}
