//! Database-backed storage for options

use super::error::{OptionsError, Result};
use super::models::{DbOption, OptionRecord, decode_value, encode_value};
use super::repository::OptionRepository;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::BTreeSet;

/// Keys bound per `IN (...)` query, below SQLite's bound-parameter limit
const FETCH_CHUNK_SIZE: usize = 999;

/// Options store over the `options` table
#[derive(Clone)]
pub struct Options {
    pool: SqlitePool,
}

impl Options {
    /// Create a new options store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a typed value, `None` when the key is absent
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| OptionsError::serialization(key, e)),
            None => Ok(None),
        }
    }

    /// Set a typed value
    pub async fn set_as<T: Serialize + ?Sized + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<Vec<OptionRecord>> {
        let value = serde_json::to_value(value).map_err(|e| OptionsError::serialization(key, e))?;
        self.set(key, value).await
    }

    /// Number of stored options
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM options")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get raw value from database
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM options WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(raw)
    }

    /// Upsert raw value in database
    async fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO options (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| OptionsError::from_write(key, e))?;

        log::debug!("Set option: {} = {}", key, value);
        Ok(())
    }

    /// Fetch the rows for a set of keys, ordered by key
    async fn fetch_keys(&self, keys: &BTreeSet<String>) -> Result<Vec<OptionRecord>> {
        let keys: Vec<&String> = keys.iter().collect();
        let mut records = Vec::with_capacity(keys.len());

        // Sorted chunks keep the concatenated result ordered by key
        for chunk in keys.chunks(FETCH_CHUNK_SIZE) {
            let mut query =
                QueryBuilder::<Sqlite>::new("SELECT key, value FROM options WHERE key IN (");
            let mut separated = query.separated(", ");
            for key in chunk {
                separated.push_bind((*key).clone());
            }
            separated.push_unseparated(") ORDER BY key");

            let rows: Vec<DbOption> = query.build_query_as().fetch_all(&self.pool).await?;
            for row in rows {
                records.push(OptionRecord::try_from(row)?);
            }
        }

        Ok(records)
    }
}

#[async_trait]
impl OptionRepository for Options {
    async fn exists(&self, key: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM options WHERE key = ?")
            .bind(key)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn get(&self, key: &str, default: Value) -> Result<Value> {
        match self.get_raw(key).await? {
            Some(raw) => decode_value(key, &raw),
            None => Ok(default),
        }
    }

    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<Vec<OptionRecord>> {
        let mut keys = BTreeSet::new();
        for (key, value) in &entries {
            let raw = encode_value(key, value)?;
            self.set_raw(key, &raw).await?;
            keys.insert(key.clone());
        }

        self.fetch_keys(&keys).await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM options WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            log::info!("Removed option: {}", key);
        }
        Ok(removed)
    }

    async fn getsert(&self, key: &str, default: Value) -> Result<Value> {
        if let Some(raw) = self.get_raw(key).await? {
            return decode_value(key, &raw);
        }

        let raw = encode_value(key, &default)?;
        let result = sqlx::query(
            "INSERT INTO options (key, value) VALUES (?, ?) ON CONFLICT(key) DO NOTHING",
        )
        .bind(key)
        .bind(&raw)
        .execute(&self.pool)
        .await
        .map_err(|e| OptionsError::from_write(key, e))?;

        if result.rows_affected() > 0 {
            log::debug!("Inserted default for option: {} = {}", key, raw);
            return Ok(default);
        }

        // Another writer got there first; its value wins
        match self.get_raw(key).await? {
            Some(raw) => decode_value(key, &raw),
            None => Ok(default),
        }
    }

    async fn list(&self) -> Result<Vec<OptionRecord>> {
        let rows: Vec<DbOption> = sqlx::query_as("SELECT key, value FROM options ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(OptionRecord::try_from).collect()
    }
}
