//! HTTP router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. Audit logger

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the application router.
///
/// Handlers use `State<ApiContext>`; `.with_state()` turns the router into
/// `Router<()>` before the middleware layers are applied.
pub fn build_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::send))
        .route("/diabetes/predict", post(endpoints::prediction::diabetes))
        .route(
            "/blood_pressure/predict",
            post(endpoints::prediction::blood_pressure),
        )
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CorsLayer::permissive())
}
