//! Feedback entity for user-submitted suggestions and reports.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Accepted feedback categories.
pub const FEEDBACK_KINDS: &[&str] = &["suggestion", "complaint", "bug", "other"];

/// Initial status of newly submitted feedback.
pub const FEEDBACK_STATUS_PENDING: &str = "pending";

/// A feedback entry, possibly anonymous.
///
/// `owner_id` is nulled by the store when the account is deleted;
/// anonymous entries carry a contact email instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub kind: String,
    pub subject: String,
    pub message: String,
    pub owner_id: Option<Uuid>,
    pub email: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting feedback.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub kind: String,
    pub subject: String,
    pub message: String,
    pub owner_id: Option<Uuid>,
    pub email: Option<String>,
}
