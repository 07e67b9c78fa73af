//! devops-info-service library
//!
//! Stateless HTTP reporter: service identity, host facts, uptime and request
//! details on `GET /`, liveness on `GET /health`.

use axum::Router;
use devops_info_common::StartTime;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod config;
pub mod snapshot;

pub use config::Config;

/// Application state shared across HTTP handlers
///
/// Read-only after construction; cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Instant the server started serving
    pub start: StartTime,
}

impl AppState {
    /// Create new application state
    pub fn new(start: StartTime) -> Self {
        Self { start }
    }
}

/// Build application router
///
/// Any path other than `/` and `/health`, and any non-GET method on those
/// paths (HEAD included), answers 404 `{"detail": "Not Found"}`.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::get;

    Router::new()
        .route("/", get(api::service_info).fallback(api::not_found))
        .route("/health", get(api::health_check).fallback(api::not_found))
        .route_layer(middleware::from_fn(api::reject_head))
        .fallback(api::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}
