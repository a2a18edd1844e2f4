//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /r/{slug}`
///
/// # Request Flow
///
/// 1. Look up the link and check expiry
/// 2. Atomically increment the click counter
/// 3. Send a click event to the background worker
/// 4. Return 307 Temporary Redirect
///
/// # Click Tracking
///
/// The counter increment is part of the resolve path and must succeed for
/// the redirect to be served. The per-click log row goes through a bounded
/// channel instead; if the queue is full, that row is dropped
/// (fire-and-forget) and only the counter records the visit.
///
/// # Errors
///
/// Returns 404 Not Found when the slug is unknown or the link has expired.
/// The two cases are indistinguishable to the caller.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.redirect_service.resolve(&slug).await?;

    let click_event = ClickEvent::new(
        link.id,
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    let _ = state.click_sender.try_send(click_event);

    Ok(Redirect::temporary(&link.destination))
}
