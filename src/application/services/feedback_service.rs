//! Feedback submission service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{FEEDBACK_KINDS, Feedback, NewFeedback};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

/// Service for collecting user feedback.
pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    /// Submits feedback from a known account or anonymously.
    ///
    /// Anonymous submissions must carry a contact email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown kind, a blank
    /// subject or message, or a missing email on an anonymous submission.
    pub async fn submit(
        &self,
        owner_id: Option<Uuid>,
        kind: String,
        subject: String,
        message: String,
        email: Option<String>,
    ) -> Result<Feedback, AppError> {
        if !FEEDBACK_KINDS.contains(&kind.as_str()) {
            return Err(AppError::bad_request(
                "Unknown feedback kind",
                json!({ "kind": kind, "allowed": FEEDBACK_KINDS }),
            ));
        }

        if subject.trim().is_empty() || message.trim().is_empty() {
            return Err(AppError::bad_request(
                "Subject and message must not be empty",
                json!({}),
            ));
        }

        if owner_id.is_none() && email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(AppError::bad_request(
                "Anonymous feedback requires a contact email",
                json!({}),
            ));
        }

        self.feedback
            .create(NewFeedback {
                kind,
                subject,
                message,
                owner_id,
                email,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FEEDBACK_STATUS_PENDING;
    use crate::domain::repositories::MockFeedbackRepository;
    use chrono::Utc;

    fn stored(new: NewFeedback) -> Feedback {
        Feedback {
            id: Uuid::new_v4(),
            kind: new.kind,
            subject: new.subject,
            message: new.message,
            owner_id: new.owner_id,
            email: new.email,
            status: FEEDBACK_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_submit_from_account() {
        let mut mock = MockFeedbackRepository::new();
        mock.expect_create().times(1).returning(|new| Ok(stored(new)));

        let service = FeedbackService::new(Arc::new(mock));
        let feedback = service
            .submit(
                Some(Uuid::new_v4()),
                "bug".to_string(),
                "Broken redirect".to_string(),
                "My link loops forever".to_string(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(feedback.status, FEEDBACK_STATUS_PENDING);
    }

    #[tokio::test]
    async fn test_anonymous_submit_requires_email() {
        let mock = MockFeedbackRepository::new();
        let service = FeedbackService::new(Arc::new(mock));

        let err = service
            .submit(
                None,
                "suggestion".to_string(),
                "Dark mode".to_string(),
                "Please".to_string(),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_anonymous_submit_with_email_succeeds() {
        let mut mock = MockFeedbackRepository::new();
        mock.expect_create().times(1).returning(|new| Ok(stored(new)));

        let service = FeedbackService::new(Arc::new(mock));
        let feedback = service
            .submit(
                None,
                "other".to_string(),
                "Thanks".to_string(),
                "Great service".to_string(),
                Some("someone@example.com".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(feedback.email.as_deref(), Some("someone@example.com"));
    }

    #[tokio::test]
    async fn test_unknown_kind_rejected() {
        let mock = MockFeedbackRepository::new();
        let service = FeedbackService::new(Arc::new(mock));

        let err = service
            .submit(
                Some(Uuid::new_v4()),
                "rant".to_string(),
                "subject".to_string(),
                "message".to_string(),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_blank_subject_rejected() {
        let mock = MockFeedbackRepository::new();
        let service = FeedbackService::new(Arc::new(mock));

        let err = service
            .submit(
                Some(Uuid::new_v4()),
                "bug".to_string(),
                "   ".to_string(),
                "message".to_string(),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }
}
