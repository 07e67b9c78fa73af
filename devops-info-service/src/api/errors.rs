//! Error responses
//!
//! Routing misses and handler panics both answer with a `{"detail": ...}`
//! body. Panic payloads are logged, never returned to the client.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use tracing::error;

/// Body of every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Fallback for unknown paths and unsupported methods on known paths
pub async fn not_found() -> (StatusCode, Json<ErrorDetail>) {
    (StatusCode::NOT_FOUND, Json(ErrorDetail::new("Not Found")))
}

/// Route layer answering HEAD with 404 before axum's implicit GET handling
///
/// Only GET is served on `/` and `/health`; HEAD must not reach the handlers.
pub async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return not_found().await.into_response();
    }
    next.run(request).await
}

/// Convert a caught handler panic into a generic 500 response
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    error!("Request handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail::new("Internal Server Error")),
    )
        .into_response()
}
