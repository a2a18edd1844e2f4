//! Link creation, alias management, and owner-scoped queries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::destination::validate_destination;
use crate::utils::slug::{generate_slug, validate_alias};

/// Service for creating and managing shortened links.
///
/// Slug assignment follows a three-step protocol: insert the row to obtain
/// the surrogate id, derive or validate the slug, then persist it. For
/// custom aliases the store's unique index is the sole arbiter; the
/// pre-check read only provides a friendly early error, and a losing racer
/// is detected by the unique-constraint violation at commit time.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    min_slug_length: u32,
    base_url: String,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkRepository>, min_slug_length: u32, base_url: String) -> Self {
        Self {
            links,
            min_slug_length,
            base_url,
        }
    }

    /// Creates a link, assigning a generated slug or reserving a custom alias.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - destination is not a valid HTTP(S) URL,
    ///   or the alias fails format validation
    /// - [`AppError::Conflict`] - the alias is already reserved, whether
    ///   detected by the pre-check or by losing the insert race
    pub async fn create_link(
        &self,
        owner_id: Uuid,
        destination: String,
        custom_alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        let destination = validate_destination(&destination).map_err(|e| {
            AppError::bad_request("Invalid destination URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(alias) = custom_alias.as_deref() {
            validate_alias(alias)?;

            if self.links.find_by_slug(alias).await?.is_some() {
                return Err(alias_taken(alias));
            }
        }

        let mut link = self
            .links
            .insert(NewLink {
                destination,
                owner_id,
                expires_at,
            })
            .await?;

        let is_custom = custom_alias.is_some();
        let slug = match custom_alias {
            Some(alias) => alias,
            None => generate_slug(link.id, self.min_slug_length),
        };

        if let Err(e) = self.reserve_slug(link.id, &slug, is_custom).await {
            // The row was inserted but never got a resolvable slug; remove it
            // so a lost alias race leaves nothing behind. Best effort.
            let _ = self.links.delete(link.id, owner_id).await;
            return Err(e);
        }

        link.slug = slug;
        Ok(link)
    }

    /// Fetches one owned link.
    pub async fn get_link(&self, id: i64, owner_id: Uuid) -> Result<Link, AppError> {
        self.links
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Lists an owner's links newest first, returning the total click sum
    /// alongside for the list summary.
    pub async fn list_links(
        &self,
        owner_id: Uuid,
        search: Option<&str>,
    ) -> Result<(Vec<Link>, i64), AppError> {
        let links = self.links.list_for_owner(owner_id, search).await?;
        let total_clicks = links.iter().map(|l| i64::from(l.click_count)).sum();
        Ok((links, total_clicks))
    }

    /// Updates an owned link's alias and/or expiry.
    ///
    /// Alias changes go through the same validation and reservation
    /// protocol as creation; setting the alias to its current value is a
    /// no-op. `expires_at` semantics: `None` = unchanged,
    /// `Some(None)` = clear, `Some(Some(t))` = set.
    pub async fn update_link(
        &self,
        id: i64,
        owner_id: Uuid,
        alias: Option<String>,
        expires_at: Option<Option<DateTime<Utc>>>,
    ) -> Result<Link, AppError> {
        let link = self
            .links
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| link_not_found(id))?;

        if let Some(alias) = alias
            && alias != link.slug
        {
            validate_alias(&alias)?;

            if self.links.find_by_slug(&alias).await?.is_some() {
                return Err(alias_taken(&alias));
            }

            self.reserve_slug(id, &alias, true).await?;
        }

        if let Some(expires_at) = expires_at {
            self.links.set_expiry(id, owner_id, expires_at).await?;
        }

        self.links
            .find_by_id(id, owner_id)
            .await?
            .ok_or_else(|| link_not_found(id))
    }

    /// Deletes an owned link and its click log.
    pub async fn delete_link(&self, id: i64, owner_id: Uuid) -> Result<(), AppError> {
        if self.links.delete(id, owner_id).await? {
            Ok(())
        } else {
            Err(link_not_found(id))
        }
    }

    /// Returns `(total_links, total_clicks)` for an owner.
    pub async fn owner_stats(&self, owner_id: Uuid) -> Result<(i64, i64), AppError> {
        self.links.owner_totals(owner_id).await
    }

    /// Constructs the full short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), slug)
    }

    /// Lightweight indexed read used by the health endpoint.
    ///
    /// `~health` contains a character outside the slug alphabets, so the
    /// lookup always misses; only the store round-trip matters.
    pub async fn health_probe(&self) -> Result<(), AppError> {
        self.links.find_by_slug("~health").await.map(|_| ())
    }

    /// Persists a slug, translating a lost race into the right error.
    ///
    /// For custom aliases a unique violation becomes the same `AliasTaken`
    /// error as the pre-check path, so callers cannot distinguish how the
    /// conflict was detected. For generated slugs uniqueness holds by
    /// construction, so a conflict is a broken invariant.
    async fn reserve_slug(&self, id: i64, slug: &str, is_custom: bool) -> Result<(), AppError> {
        match self.links.set_slug(id, slug).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_conflict() && is_custom => Err(alias_taken(slug)),
            Err(e) if e.is_conflict() => {
                tracing::error!(id, slug, "generated slug collided, store id reuse?");
                Err(AppError::internal(
                    "Failed to assign generated slug",
                    json!({ "link_id": id }),
                ))
            }
            Err(e) => Err(e),
        }
    }
}

fn alias_taken(alias: &str) -> AppError {
    AppError::conflict("This alias is already taken", json!({ "alias": alias }))
}

fn link_not_found(id: i64) -> AppError {
    AppError::not_found("Link not found", json!({ "id": id }))
}
