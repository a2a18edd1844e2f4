//! Handler for account statistics endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate statistics for the authenticated account.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 42,
///   "total_clicks": 1337
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
) -> Result<Json<StatsResponse>, AppError> {
    let (total_links, total_clicks) = state.link_service.owner_stats(account.id).await?;

    Ok(Json(StatsResponse {
        total_links,
        total_clicks,
    }))
}
