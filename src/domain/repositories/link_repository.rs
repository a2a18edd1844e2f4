//! Repository trait for link storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Store interface for links.
///
/// The unique index on `slug` is the sole arbiter of slug uniqueness: a
/// [`set_slug`](LinkRepository::set_slug) racing against a concurrent
/// reservation of the same alias fails with [`AppError::Conflict`], and
/// exactly one of the racers wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory,
///   used by integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link row and returns it with its store-assigned id.
    ///
    /// The returned link carries a provisional placeholder slug; callers
    /// must follow up with [`set_slug`](LinkRepository::set_slug) before
    /// the link is resolvable.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by id, scoped to its owner.
    async fn find_by_id(&self, id: i64, owner_id: Uuid) -> Result<Option<Link>, AppError>;

    /// Sets the slug of an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the slug is already reserved
    /// (unique-constraint violation, the authoritative signal under a
    /// race) and [`AppError::NotFound`] when no such link exists.
    async fn set_slug(&self, id: i64, slug: &str) -> Result<(), AppError>;

    /// Sets or clears the expiry of an owned link.
    async fn set_expiry(
        &self,
        id: i64,
        owner_id: Uuid,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError>;

    /// Atomically increments the click counter, returning the new count.
    ///
    /// Implemented store-side (`click_count = click_count + 1`) so that
    /// concurrent redirects never lose updates.
    async fn increment_click(&self, id: i64) -> Result<i32, AppError>;

    /// Lists an owner's links, newest first, optionally filtered by a
    /// case-insensitive substring of the destination or slug.
    async fn list_for_owner<'a>(
        &self,
        owner_id: Uuid,
        search: Option<&'a str>,
    ) -> Result<Vec<Link>, AppError>;

    /// Deletes an owned link and its click log rows in one transaction.
    ///
    /// Returns `Ok(false)` if no link matched.
    async fn delete(&self, id: i64, owner_id: Uuid) -> Result<bool, AppError>;

    /// Returns `(total_links, total_clicks)` for an owner.
    async fn owner_totals(&self, owner_id: Uuid) -> Result<(i64, i64), AppError>;
}
