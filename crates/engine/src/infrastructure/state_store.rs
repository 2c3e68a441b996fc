//! Unread state storage adapters.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use threadwatch_domain::UnreadState;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{ClockPort, RepoError, UnreadStateRepo};

/// SQLite implementation of the key/value badge state store.
pub struct SqliteStateRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteStateRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("badge_state", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS badge_state (
                key TEXT PRIMARY KEY NOT NULL,
                state_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("badge_state", e))?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl UnreadStateRepo for SqliteStateRepo {
    async fn get_data(&self, key: &str) -> Result<Option<UnreadState>, RepoError> {
        let row = sqlx::query("SELECT state_json FROM badge_state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_data", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("state_json");
                let state = serde_json::from_str(&json)
                    .map_err(RepoError::serialization)?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    async fn store_data(&self, key: &str, state: &UnreadState) -> Result<(), RepoError> {
        let json =
            serde_json::to_string(state).map_err(RepoError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO badge_state (key, state_json, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                state_json = excluded.state_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("store_data", e))?;

        Ok(())
    }
}

/// Process-local store. State is lost when the process exits.
#[derive(Default)]
pub struct InMemoryStateRepo {
    entries: RwLock<HashMap<String, UnreadState>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnreadStateRepo for InMemoryStateRepo {
    async fn get_data(&self, key: &str) -> Result<Option<UnreadState>, RepoError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn store_data(&self, key: &str, state: &UnreadState) -> Result<(), RepoError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), state.clone());
        Ok(())
    }
}
