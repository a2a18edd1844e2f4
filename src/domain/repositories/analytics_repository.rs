//! Repository trait for the click analytics log.

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store for raw click records.
///
/// Writes happen on the background worker, never in the redirect path;
/// a failed write costs an analytics row, not a redirect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn log_click(&self, event: &ClickEvent) -> Result<(), AppError>;
}
