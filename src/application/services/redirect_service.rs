//! Slug resolution for the redirect path.

use std::sync::Arc;

use serde_json::json;

use crate::domain::clock::Clock;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves slugs to destinations and records clicks.
///
/// Per request the sequence is strictly lookup, expiry check, increment.
/// A missing slug and an expired link produce the same `NotFound` so the
/// public redirect path does not reveal which links ever existed.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    clock: Arc<dyn Clock>,
}

impl RedirectService {
    pub fn new(links: Arc<dyn LinkRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { links, clock }
    }

    /// Resolves a slug, counting the click on success.
    ///
    /// The increment is a store-side atomic add and must be durable before
    /// this returns: a failed increment fails the resolution rather than
    /// redirecting with an uncounted click. Expired links are never
    /// incremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug is absent or expired,
    /// [`AppError::Internal`] when the increment cannot be persisted.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        let Some(mut link) = self.links.find_by_slug(slug).await? else {
            return Err(gone(slug));
        };

        if link.is_expired_at(self.clock.now()) {
            return Err(gone(slug));
        }

        link.click_count = self.links.increment_click(link.id).await?;

        Ok(link)
    }
}

fn gone(slug: &str) -> AppError {
    AppError::not_found("Link not found or has expired", json!({ "slug": slug }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn link(id: i64, slug: &str, expires_at: Option<chrono::DateTime<Utc>>) -> Link {
        Link {
            id,
            slug: slug.to_string(),
            destination: "https://example.com/target".to_string(),
            owner_id: Uuid::new_v4(),
            click_count: 5,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug_is_not_found() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_slug().times(1).returning(|_| Ok(None));
        mock.expect_increment_click().times(0);

        let service = RedirectService::new(Arc::new(mock), Arc::new(FixedClock(Utc::now())));

        let err = service.resolve("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_expired_link_is_not_found_and_not_counted() {
        let now = Utc::now();
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_slug()
            .times(1)
            .returning(move |slug| Ok(Some(link(1, slug, Some(now - Duration::seconds(1))))));
        mock.expect_increment_click().times(0);

        let service = RedirectService::new(Arc::new(mock), Arc::new(FixedClock(now)));

        let err = service.resolve("expired1").await.unwrap_err();
        // Same outward error as a slug that never existed.
        assert_eq!(err.to_string(), "Link not found or has expired");
    }

    #[tokio::test]
    async fn test_resolve_valid_link_counts_exactly_one_click() {
        let now = Utc::now();
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_slug()
            .times(1)
            .returning(move |slug| Ok(Some(link(9, slug, Some(now + Duration::hours(1))))));
        mock.expect_increment_click()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Ok(6));

        let service = RedirectService::new(Arc::new(mock), Arc::new(FixedClock(now)));

        let resolved = service.resolve("active1").await.unwrap();
        assert_eq!(resolved.destination, "https://example.com/target");
        assert_eq!(resolved.click_count, 6);
    }

    #[tokio::test]
    async fn test_resolve_fails_when_increment_fails() {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_slug()
            .times(1)
            .returning(|slug| Ok(Some(link(2, slug, None))));
        mock.expect_increment_click().times(1).returning(|_| {
            Err(AppError::internal(
                "Database error",
                serde_json::json!({}),
            ))
        });

        let service = RedirectService::new(Arc::new(mock), Arc::new(FixedClock(Utc::now())));

        // No success without a durable increment.
        let err = service.resolve("anyslug").await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
