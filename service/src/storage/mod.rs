//! Storage port for the account collection.
//!
//! The HTTP layer talks to the collection only through [`AccountStore`], so
//! the backing implementation can be swapped without touching a handler.
//! [`SqliteAccountStore`] is the production store; [`MemoryAccountStore`]
//! backs tests that want a collection without a database file.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryAccountStore;
pub use sqlite::SqliteAccountStore;

use async_trait::async_trait;

use crate::errors::ServiceResult;
use crate::models::Account;

/// Persistence operations over the account collection.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a new record and returns it with its assigned id.
    ///
    /// Any id carried by `account` is ignored; identity is assigned by the
    /// store.
    async fn create(&self, account: &Account) -> ServiceResult<Account>;

    /// Replaces the record whose id matches `account.id`.
    ///
    /// Returns `Ok(None)` when no record has that id. An `account` without
    /// an id is rejected as a validation error, never treated as a create.
    async fn update(&self, account: &Account) -> ServiceResult<Option<Account>>;

    /// Removes the record with the given id. Removing an absent id is not
    /// an error.
    async fn delete(&self, id: i64) -> ServiceResult<()>;

    /// Looks up a single record by id.
    async fn find(&self, id: i64) -> ServiceResult<Option<Account>>;

    /// Returns every record in insertion order.
    async fn all(&self) -> ServiceResult<Vec<Account>>;
}
