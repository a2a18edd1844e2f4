//! In-memory store implementing every repository trait.
//!
//! Backs integration tests and local development without PostgreSQL.
//! A single mutex guards all state, which makes `set_slug` and
//! `increment_click` atomic with respect to concurrent callers, the same
//! guarantees the unique index and atomic SQL update provide in Postgres.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{
    Account, FEEDBACK_STATUS_PENDING, Feedback, Link, NewAccount, NewFeedback, NewLink,
};
use crate::domain::repositories::{
    AccountRepository, AnalyticsRepository, FeedbackRepository, LinkRepository,
};
use crate::error::AppError;

#[derive(Default)]
struct State {
    next_link_id: i64,
    links: BTreeMap<i64, Link>,
    accounts: Vec<Account>,
    clicks: Vec<ClickEvent>,
    feedback: Vec<Feedback>,
}

/// Shared in-memory store; clones are handles onto the same state.
#[derive(Default, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of click rows logged so far. Test support.
    pub fn clicks_logged(&self) -> usize {
        self.lock().clicks.len()
    }

    /// Owner attribution of stored feedback, oldest first. Test support.
    pub fn feedback_owners(&self) -> Vec<Option<Uuid>> {
        self.lock().feedback.iter().map(|f| f.owner_id).collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }
}

fn unique_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": constraint }),
    )
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut state = self.lock();
        state.next_link_id += 1;
        let link = Link {
            id: state.next_link_id,
            slug: format!("~{}", Uuid::new_v4().simple()),
            destination: new_link.destination,
            owner_id: new_link.owner_id,
            click_count: 0,
            created_at: Utc::now(),
            expires_at: new_link.expires_at,
        };
        state.links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock().links.values().find(|l| l.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: i64, owner_id: Uuid) -> Result<Option<Link>, AppError> {
        Ok(self
            .lock()
            .links
            .get(&id)
            .filter(|l| l.owner_id == owner_id)
            .cloned())
    }

    async fn set_slug(&self, id: i64, slug: &str) -> Result<(), AppError> {
        let mut state = self.lock();

        // Check-and-set under one lock: the in-memory analogue of the
        // unique index deciding the race.
        if state.links.values().any(|l| l.id != id && l.slug == slug) {
            return Err(unique_violation("links_slug_key"));
        }

        let link = state
            .links
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;
        link.slug = slug.to_string();
        Ok(())
    }

    async fn set_expiry(
        &self,
        id: i64,
        owner_id: Uuid,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let mut state = self.lock();
        let link = state
            .links
            .get_mut(&id)
            .filter(|l| l.owner_id == owner_id)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;
        link.expires_at = expires_at;
        Ok(())
    }

    async fn increment_click(&self, id: i64) -> Result<i32, AppError> {
        let mut state = self.lock();
        let link = state
            .links
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;
        link.click_count += 1;
        Ok(link.click_count)
    }

    async fn list_for_owner<'a>(
        &self,
        owner_id: Uuid,
        search: Option<&'a str>,
    ) -> Result<Vec<Link>, AppError> {
        let needle = search.map(|s| s.to_lowercase());
        let mut links: Vec<Link> = self
            .lock()
            .links
            .values()
            .filter(|l| l.owner_id == owner_id)
            .filter(|l| {
                needle.as_deref().is_none_or(|n| {
                    l.destination.to_lowercase().contains(n) || l.slug.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn delete(&self, id: i64, owner_id: Uuid) -> Result<bool, AppError> {
        let mut state = self.lock();
        if state
            .links
            .get(&id)
            .is_none_or(|l| l.owner_id != owner_id)
        {
            return Ok(false);
        }
        state.clicks.retain(|c| c.link_id != id);
        state.links.remove(&id);
        Ok(true)
    }

    async fn owner_totals(&self, owner_id: Uuid) -> Result<(i64, i64), AppError> {
        let state = self.lock();
        let owned = state.links.values().filter(|l| l.owner_id == owner_id);
        let (mut total_links, mut total_clicks) = (0i64, 0i64);
        for link in owned {
            total_links += 1;
            total_clicks += i64::from(link.click_count);
        }
        Ok((total_links, total_clicks))
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut state = self.lock();

        if state.accounts.iter().any(|a| a.email == new_account.email) {
            return Err(unique_violation("accounts_email_key"));
        }
        if let Some(key) = &new_account.api_key
            && state.accounts.iter().any(|a| a.api_key.as_ref() == Some(key))
        {
            return Err(unique_violation("accounts_api_key_key"));
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: new_account.email,
            name: new_account.name,
            api_key: new_account.api_key,
            created_at: Utc::now(),
        };
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .lock()
            .accounts
            .iter()
            .find(|a| a.api_key.as_deref() == Some(api_key))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .lock()
            .accounts
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.lock().accounts.clone())
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<bool, AppError> {
        let mut state = self.lock();
        let Some(pos) = state.accounts.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        let owned: Vec<i64> = state
            .links
            .values()
            .filter(|l| l.owner_id == id)
            .map(|l| l.id)
            .collect();
        state.clicks.retain(|c| !owned.contains(&c.link_id));
        for link_id in owned {
            state.links.remove(&link_id);
        }
        for entry in state.feedback.iter_mut() {
            if entry.owner_id == Some(id) {
                entry.owner_id = None;
            }
        }
        state.accounts.remove(pos);
        Ok(true)
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryStore {
    async fn log_click(&self, event: &ClickEvent) -> Result<(), AppError> {
        self.lock().clicks.push(event.clone());
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn create(&self, new_feedback: NewFeedback) -> Result<Feedback, AppError> {
        let feedback = Feedback {
            id: Uuid::new_v4(),
            kind: new_feedback.kind,
            subject: new_feedback.subject,
            message: new_feedback.message,
            owner_id: new_feedback.owner_id,
            email: new_feedback.email,
            status: FEEDBACK_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        };
        self.lock().feedback.push(feedback.clone());
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids_and_placeholder_slugs() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let a = store
            .insert(NewLink {
                destination: "https://a.example/".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();
        let b = store
            .insert(NewLink {
                destination: "https://b.example/".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();

        assert!(b.id > a.id);
        assert!(a.slug.starts_with('~'));
        assert_ne!(a.slug, b.slug);
    }

    #[tokio::test]
    async fn test_set_slug_enforces_uniqueness() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let a = store
            .insert(NewLink {
                destination: "https://a.example/".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();
        let b = store
            .insert(NewLink {
                destination: "https://b.example/".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();

        store.set_slug(a.id, "myname").await.unwrap();
        let err = store.set_slug(b.id, "myname").await.unwrap_err();
        assert!(err.is_conflict());

        // Re-setting a link's own slug is not a conflict.
        store.set_slug(a.id, "myname").await.unwrap();
    }

    #[tokio::test]
    async fn test_increment_click_counts_up() {
        let store = MemoryStore::new();
        let link = store
            .insert(NewLink {
                destination: "https://a.example/".to_string(),
                owner_id: Uuid::new_v4(),
                expires_at: None,
            })
            .await
            .unwrap();

        assert_eq!(store.increment_click(link.id).await.unwrap(), 1);
        assert_eq!(store.increment_click(link.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_cascade_removes_links_and_clicks() {
        let store = MemoryStore::new();
        let account = AccountRepository::create(
            &store,
            NewAccount {
                email: "owner@example.com".to_string(),
                name: "Owner".to_string(),
                api_key: Some("key-123".to_string()),
            },
        )
        .await
        .unwrap();

        let link = store
            .insert(NewLink {
                destination: "https://a.example/".to_string(),
                owner_id: account.id,
                expires_at: None,
            })
            .await
            .unwrap();
        store
            .log_click(&ClickEvent::new(link.id, None, None, None))
            .await
            .unwrap();

        assert!(store.delete_cascade(account.id).await.unwrap());
        assert_eq!(store.clicks_logged(), 0);
        assert!(store.find_by_slug(&link.slug).await.unwrap().is_none());
        assert!(
            store
                .find_by_api_key("key-123")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_for_owner_filters_by_search() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let a = store
            .insert(NewLink {
                destination: "https://docs.example.com/rust".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();
        store.set_slug(a.id, "rust-docs").await.unwrap();

        let b = store
            .insert(NewLink {
                destination: "https://blog.example.com/".to_string(),
                owner_id: owner,
                expires_at: None,
            })
            .await
            .unwrap();
        store.set_slug(b.id, "blog").await.unwrap();

        let hits = store.list_for_owner(owner, Some("RUST")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "rust-docs");

        let all = store.list_for_owner(owner, None).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
