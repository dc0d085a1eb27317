//! SQLite-backed key-value store.
//!
//! One `kv` table with string keys and values; `set` upserts. This is the
//! production [`KeyValueStore`] behind the session identifier and the
//! preferred-voice name.

use async_trait::async_trait;
use hookchat_core::{ChatError, KeyValueStore, Result};
use tracing::info;

use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteKvStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteKvStore {
    /// Opens (creating if needed) the database at `database_url` and ensures
    /// the kv table exists.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url)
            .await
            .map_err(|e| ChatError::Store(e.to_string()))?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        info!("Creating kv table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await
        .map_err(|e| ChatError::Store(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool_manager.pool())
            .await
            .map_err(|e| ChatError::Store(e.to_string()))?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO kv (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool_manager.pool())
        .await
        .map_err(|e| ChatError::Store(e.to_string()))?;

        Ok(())
    }
}
