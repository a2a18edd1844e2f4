//! Background consumer for the click event queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AnalyticsRepository;

/// Insert attempts per event before the event is dropped.
const MAX_ATTEMPTS: usize = 3;

/// Consumes click events and appends them to the analytics log.
///
/// Delivery is at-most-once: transient insert failures are retried with
/// jittered exponential backoff, after which the event is dropped with a
/// warning. The worker exits when all senders are gone.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    analytics: Arc<dyn AnalyticsRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        if let Err(e) = Retry::spawn(strategy, || analytics.log_click(&event)).await {
            warn!(link_id = event.link_id, "dropping click event: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAnalyticsRepository;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_logs_received_events() {
        let mut mock = MockAnalyticsRepository::new();
        mock.expect_log_click()
            .withf(|ev| ev.link_id == 5)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock)));

        tx.send(ClickEvent::new(5, None, Some("TestBot/1.0"), None))
            .await
            .unwrap();
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failures() {
        let mut mock = MockAnalyticsRepository::new();
        let mut calls = 0;
        mock.expect_log_click().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(AppError::internal("Database error", json!({})))
            } else {
                Ok(())
            }
        });

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock)));

        tx.send(ClickEvent::new(9, None, None, None)).await.unwrap();
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_drops_event_after_exhausted_retries() {
        let mut mock = MockAnalyticsRepository::new();
        mock.expect_log_click()
            .times(MAX_ATTEMPTS)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock)));

        tx.send(ClickEvent::new(11, None, None, None)).await.unwrap();
        drop(tx);

        // Worker survives the failure and exits cleanly on channel close.
        worker.await.unwrap();
    }
}
