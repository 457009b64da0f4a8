//! In-memory account store.
//!
//! A `Vec` behind a mutex, with ids handed out from a counter. Backs tests
//! that exercise the HTTP surface without a database, and keeps the same
//! observable behavior as the SQLite store: insertion order, id assignment,
//! and idempotent deletes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::AccountStore;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::Account;

struct Inner {
    rows: Vec<Account>,
    next_id: i64,
}

pub struct MemoryAccountStore {
    inner: Mutex<Inner>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, account: &Account) -> ServiceResult<Account> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = Account {
            id: Some(id),
            ..account.clone()
        };
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, account: &Account) -> ServiceResult<Option<Account>> {
        let id = account
            .id
            .ok_or_else(|| ServiceError::validation("Update called with empty ID field"))?;

        let mut inner = self.lock();
        match inner.rows.iter_mut().find(|row| row.id == Some(id)) {
            Some(row) => {
                *row = account.clone();
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.lock().rows.retain(|row| row.id != Some(id));
        Ok(())
    }

    async fn find(&self, id: i64) -> ServiceResult<Option<Account>> {
        Ok(self.lock().rows.iter().find(|row| row.id == Some(id)).cloned())
    }

    async fn all(&self) -> ServiceResult<Vec<Account>> {
        Ok(self.lock().rows.clone())
    }
}
