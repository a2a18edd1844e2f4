//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Link;

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom alias to use instead of a generated slug.
    #[validate(length(min = 3, max = 50))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub custom_alias: Option<String>,

    /// Optional expiry timestamp. After this time, the link stops resolving.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request body for `PUT /api/links/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `expires_at` semantics
///
/// - **Absent** (`expires_at` not in JSON): leave existing value unchanged
/// - **`null`**: clear expiry (link never expires)
/// - **Timestamp**: set new expiry
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New alias for this link.
    #[validate(length(min = 3, max = 50))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub custom_alias: Option<String>,

    /// Expiry timestamp. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    /// Case-insensitive substring filter on destination or slug.
    pub search: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub original_url: String,
    pub short_url: String,
    pub click_count: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            original_url: link.destination,
            short_url,
            click_count: link.click_count,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

/// Response for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
    pub total: usize,
    pub total_clicks: i64,
}
