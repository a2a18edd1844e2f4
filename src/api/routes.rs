//! API route configuration.
//!
//! Link management and stats endpoints require Bearer token authentication
//! via [`crate::api::middleware::auth`]; feedback is public.

use crate::api::handlers::{
    create_feedback_handler, create_link_handler, delete_link_handler, get_link_handler,
    list_links_handler, stats_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /links`       - Create a short link
/// - `GET    /links`       - List the account's links
/// - `GET    /links/{id}`  - Fetch one link
/// - `PUT    /links/{id}`  - Update alias and/or expiry
/// - `DELETE /links/{id}`  - Delete a link and its click log
/// - `GET    /stats`       - Aggregate link/click counts for the account
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/stats", get(stats_handler))
}

/// API routes reachable without authentication.
///
/// The top-level router wraps these in
/// [`crate::api::middleware::auth::optional_layer`] so a Bearer key, when
/// present and valid, still attributes the request to its account.
///
/// # Endpoints
///
/// - `POST /feedback` - Submit feedback (anonymous submissions need an email)
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/feedback", post(create_feedback_handler))
}
