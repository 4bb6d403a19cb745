use axum::{http::StatusCode, response::IntoResponse};

use crate::shared::response::ApiResponse;

/// Fallback for unknown routes.
pub async fn handler_404() -> impl IntoResponse {
    ApiResponse::error(
        StatusCode::NOT_FOUND,
        "Not found",
        "route not found".to_string(),
    )
}

/// Panic handler for `CatchPanicLayer`; the panic payload is logged, never returned.
pub fn handler_500(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiResponse::error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        "internal server error".to_string(),
    )
    .into_response()
}

pub async fn health() -> impl IntoResponse {
    ApiResponse::ok("OK")
}
