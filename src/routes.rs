//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /r/{slug}`     - Short link redirect (public)
//! - `GET /health`       - Health check: DB, click queue (public)
//! - `/api/*`            - REST API (Bearer token required, except feedback)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer token for link management and stats
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::api_layer());

    let api_public = api::routes::public_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_layer,
        ))
        .layer(rate_limit::public_api_layer());

    let api_router = Router::new().merge(api_protected).merge(api_public);

    let redirect_router = Router::new()
        .route("/r/{slug}", get(redirect_handler))
        .layer(rate_limit::redirect_layer());

    let router = Router::new()
        .merge(redirect_router)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
