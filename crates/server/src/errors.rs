use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::menu::errors::MenuError;

/// Web-layer wrapper mapping `MenuError` to HTTP outcomes:
/// - `NotFound` -> 404 with empty body (the image miss contract)
/// - `Validation` -> 400 with a JSON error
/// - anything else -> 500 with a JSON error
#[derive(Debug)]
pub struct ApiError(pub MenuError);

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            MenuError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            MenuError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": msg})),
            )
                .into_response(),
            other => {
                let msg = other.to_string();
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": msg})),
                )
                    .into_response()
            }
        }
    }
}
