//! SQLite-backed account store.
//!
//! Owns the connection pool and applies the embedded schema on startup, so a
//! fresh database file is usable without any out-of-band setup.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::AccountStore;
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::Account;

const SCHEMA: &str = include_str!("../../migrations/20250601000001_create_accounts.sql");

pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// Initializes the connection pool and applies the schema.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Opens a throwaway in-memory database.
    #[cfg(test)]
    async fn in_memory() -> Result<Self> {
        // One connection, so every statement sees the same in-memory db.
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            server_port: 0,
        };
        Self::connect(&config).await
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, account: &Account) -> ServiceResult<Account> {
        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, account: &Account) -> ServiceResult<Option<Account>> {
        let id = account
            .id
            .ok_or_else(|| ServiceError::validation("Update called with empty ID field"))?;

        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = ?, email = ?, address = ?, phone_number = ?, date_joined = ?
            WHERE id = ?
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find(&self, id: i64) -> ServiceResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn all(&self) -> ServiceResult<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(name: &str) -> Account {
        Account {
            id: None,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            address: "100 Main St".to_string(),
            phone_number: "555-0100".to_string(),
            date_joined: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_ids_in_order() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let first = store.create(&sample("alpha")).await.unwrap();
        let second = store.create(&sample("beta")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(
            first.date_joined,
            NaiveDate::from_ymd_opt(2021, 3, 14).unwrap()
        );
    }

    #[tokio::test]
    async fn find_returns_stored_fields() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let created = store.create(&sample("carol")).await.unwrap();
        let found = store.find(created.id.unwrap()).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.email, "carol@example.com");
    }

    #[tokio::test]
    async fn find_missing_is_none() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        assert!(store.find(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_row() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let created = store.create(&sample("dora")).await.unwrap();
        let mut changed = created.clone();
        changed.address = "7 New Lane".to_string();

        let updated = store.update(&changed).await.unwrap().unwrap();
        assert_eq!(updated.address, "7 New Lane");

        let found = store.find(created.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.address, "7 New Lane");
        assert_eq!(found.name, "dora");
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let err = store.update(&sample("ghost")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let mut absent = sample("nobody");
        absent.id = Some(404);
        assert!(store.update(&absent).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        let created = store.create(&sample("erin")).await.unwrap();
        let id = created.id.unwrap();

        store.delete(id).await.unwrap();
        store.delete(id).await.unwrap();

        assert!(store.find(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn all_preserves_insertion_order() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        for name in ["one", "two", "three"] {
            store.create(&sample(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|account| account.name)
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn all_on_empty_store_is_empty() {
        let store = SqliteAccountStore::in_memory().await.unwrap();

        assert!(store.all().await.unwrap().is_empty());
    }
}
