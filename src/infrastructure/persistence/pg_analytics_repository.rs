//! PostgreSQL implementation of the click analytics log.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AnalyticsRepository;
use crate::error::AppError;

/// PostgreSQL repository appending raw click rows.
pub struct PgAnalyticsRepository {
    pool: Arc<PgPool>,
}

impl PgAnalyticsRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn log_click(&self, event: &ClickEvent) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO link_clicks (link_id, ip, user_agent, referrer)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(event.link_id)
        .bind(&event.ip)
        .bind(&event.user_agent)
        .bind(&event.referrer)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
