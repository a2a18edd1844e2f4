#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use clipurl::application::services::{FeedbackService, LinkService, RedirectService};
use clipurl::domain::click_event::ClickEvent;
use clipurl::domain::clock::SystemClock;
use clipurl::domain::entities::{Account, Link, NewAccount};
use clipurl::domain::repositories::{AccountRepository, LinkRepository};
use clipurl::infrastructure::persistence::MemoryStore;
use clipurl::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key-000000000000000000";
pub const TEST_BASE_URL: &str = "http://short.test";

/// Builds an [`AppState`] over a shared in-memory store.
///
/// Returns the state, the store handle for direct inspection, and the
/// receiving side of the click queue.
pub fn create_test_state() -> (AppState, MemoryStore, mpsc::Receiver<ClickEvent>) {
    let store = MemoryStore::new();
    let links: Arc<MemoryStore> = Arc::new(store.clone());

    let (click_tx, click_rx) = mpsc::channel(100);

    let link_service = Arc::new(LinkService::new(
        links.clone(),
        6,
        TEST_BASE_URL.to_string(),
    ));
    let redirect_service = Arc::new(RedirectService::new(links.clone(), Arc::new(SystemClock)));
    let feedback_service = Arc::new(FeedbackService::new(links.clone()));

    let state = AppState::new(
        link_service,
        redirect_service,
        feedback_service,
        links,
        click_tx,
    );

    (state, store, click_rx)
}

/// Creates an account whose API key is [`TEST_API_KEY`].
pub async fn create_test_account(store: &MemoryStore) -> Account {
    store
        .create(NewAccount {
            email: "owner@example.com".to_string(),
            name: "Owner".to_string(),
            api_key: Some(TEST_API_KEY.to_string()),
        })
        .await
        .unwrap()
}

/// Inserts a link directly into the store with the given slug.
pub async fn create_test_link(
    store: &MemoryStore,
    slug: &str,
    destination: &str,
    owner: &Account,
) -> Link {
    create_test_link_with_expiry(store, slug, destination, owner, None).await
}

/// Inserts a link with an explicit expiry.
pub async fn create_test_link_with_expiry(
    store: &MemoryStore,
    slug: &str,
    destination: &str,
    owner: &Account,
    expires_at: Option<DateTime<Utc>>,
) -> Link {
    let link = store
        .insert(clipurl::domain::entities::NewLink {
            destination: destination.to_string(),
            owner_id: owner.id,
            expires_at,
        })
        .await
        .unwrap();
    store.set_slug(link.id, slug).await.unwrap();
    store.find_by_slug(slug).await.unwrap().unwrap()
}
