//! Repository trait for feedback storage.

use crate::domain::entities::{Feedback, NewFeedback};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for feedback entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError>;
}
