//! Handler for the feedback endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::feedback::{CreateFeedbackRequest, FeedbackResponse};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a feedback submission.
///
/// # Endpoint
///
/// `POST /api/feedback`
///
/// The endpoint is public. When a valid Bearer token is presented the
/// submission is attributed to the account; otherwise a contact email is
/// required.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown kind, a blank subject or
/// message, or an anonymous submission without an email.
pub async fn create_feedback_handler(
    State(state): State<AppState>,
    account: Option<Extension<Account>>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), AppError> {
    payload.validate()?;

    let feedback = state
        .feedback_service
        .submit(
            account.map(|Extension(a)| a.id),
            payload.kind,
            payload.subject,
            payload.message,
            payload.email,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            id: feedback.id,
            kind: feedback.kind,
            status: feedback.status,
            created_at: feedback.created_at,
        }),
    ))
}
