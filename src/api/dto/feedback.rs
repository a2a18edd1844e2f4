//! DTOs for the feedback endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for `POST /api/feedback`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    /// One of `suggestion`, `complaint`, `bug`, `other`.
    pub kind: String,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,

    /// Contact email; required when the submission is anonymous.
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Response for a stored feedback entry.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub kind: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
