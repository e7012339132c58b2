//! Repository interface over the options table
//!
//! Callers depend on this trait; `Options` is the SQLite-backed implementation.

use super::error::Result;
use super::models::OptionRecord;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Whether a record exists for `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Stored value for `key`, or `default` when absent. Never writes.
    async fn get(&self, key: &str, default: Value) -> Result<Value>;

    /// Upsert each pair independently and return the affected records, ordered by key.
    ///
    /// Pairs are not written atomically: if a later pair fails, earlier pairs stay written.
    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<Vec<OptionRecord>>;

    /// Single-key form of [`OptionRepository::set_many`]
    async fn set(&self, key: &str, value: Value) -> Result<Vec<OptionRecord>> {
        self.set_many(vec![(key.to_string(), value)]).await
    }

    /// Delete the record for `key`; returns whether anything was deleted
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Stored value for `key`, or store `default` and return it
    async fn getsert(&self, key: &str, default: Value) -> Result<Value>;

    /// All records, ordered by key
    async fn list(&self) -> Result<Vec<OptionRecord>>;
}
