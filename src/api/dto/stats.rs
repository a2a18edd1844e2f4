//! DTO for the account statistics endpoint.

use serde::Serialize;

/// Response for `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_links: i64,
    pub total_clicks: i64,
}
