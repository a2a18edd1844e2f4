//! PostgreSQL implementation of the feedback repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{FEEDBACK_STATUS_PENDING, Feedback, NewFeedback};
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    id: Uuid,
    kind: String,
    subject: String,
    message: String,
    owner_id: Option<Uuid>,
    email: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Feedback {
            id: row.id,
            kind: row.kind,
            subject: row.subject,
            message: row.message,
            owner_id: row.owner_id,
            email: row.email,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for feedback storage.
pub struct PgFeedbackRepository {
    pool: Arc<PgPool>,
}

impl PgFeedbackRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn create(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            "INSERT INTO feedback (id, kind, subject, message, owner_id, email, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, kind, subject, message, owner_id, email, status, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&new_feedback.kind)
        .bind(&new_feedback.subject)
        .bind(&new_feedback.message)
        .bind(new_feedback.owner_id)
        .bind(&new_feedback.email)
        .bind(FEEDBACK_STATUS_PENDING)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
