//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, slug, destination, owner_id, click_count, created_at, expires_at";

/// Row mapping for the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    destination: String,
    owner_id: Uuid,
    click_count: i32,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            slug: row.slug,
            destination: row.destination,
            owner_id: row.owner_id,
            click_count: row.click_count,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

/// PostgreSQL repository for link storage.
///
/// The `slug` column carries the unique index that arbitrates alias
/// races; [`set_slug`](LinkRepository::set_slug) surfaces a violation as
/// [`AppError::Conflict`] via the shared sqlx error mapping.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        // `~` is outside both slug alphabets, so placeholders never collide
        // with an assigned slug; the uuid keeps them unique among themselves.
        let placeholder = format!("~{}", Uuid::new_v4().simple());

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (slug, destination, owner_id, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&placeholder)
        .bind(&new_link.destination)
        .bind(new_link.owner_id)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64, owner_id: Uuid) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn set_slug(&self, id: i64, slug: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE links SET slug = $2 WHERE id = $1")
            .bind(id)
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn set_expiry(
        &self,
        id: i64,
        owner_id: Uuid,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE links SET expires_at = $3 WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .bind(expires_at)
                .execute(self.pool.as_ref())
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn increment_click(&self, id: i64) -> Result<i32, AppError> {
        let count: i32 = sqlx::query_scalar(
            "UPDATE links SET click_count = click_count + 1 WHERE id = $1 RETURNING click_count",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn list_for_owner<'a>(
        &self,
        owner_id: Uuid,
        search: Option<&'a str>,
    ) -> Result<Vec<Link>, AppError> {
        let pattern = search.map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links
             WHERE owner_id = $1
               AND ($2::text IS NULL OR destination ILIKE $2 OR slug ILIKE $2)
             ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .bind(pattern)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, id: i64, owner_id: Uuid) -> Result<bool, AppError> {
        // Dependents first, then the link, in one transaction.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM link_clicks WHERE link_id IN
             (SELECT id FROM links WHERE id = $1 AND owner_id = $2)",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn owner_totals(&self, owner_id: Uuid) -> Result<(i64, i64), AppError> {
        let (total_links, total_clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(click_count), 0) FROM links WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok((total_links, total_clicks))
    }
}
