//! Repository trait for account storage.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Store interface for accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the email or API key is taken.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Resolves an API key to its account. Used by the auth middleware.
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Account>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Deletes an account together with its links and their click rows.
    ///
    /// The steps run inside a single transaction, dependents first:
    /// click rows, then links, then the account (feedback keeps its rows
    /// with `owner_id` nulled by the foreign key). Returns `Ok(false)` if
    /// no account matched.
    async fn delete_cascade(&self, id: Uuid) -> Result<bool, AppError>;
}
