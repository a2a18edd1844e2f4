//! Account entity: the owner of links.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// `api_key` authenticates programmatic access; it is `None` for accounts
/// that have not been issued one.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub api_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub api_key: Option<String>,
}
