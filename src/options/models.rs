//! Option record types

use super::error::{OptionsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Database representation of an option row
#[derive(Debug, Clone, FromRow)]
pub struct DbOption {
    pub key: String,
    pub value: String, // JSON
}

/// A named setting with its decoded value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub key: String,
    pub value: Value,
}

impl OptionRecord {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl TryFrom<DbOption> for OptionRecord {
    type Error = OptionsError;

    fn try_from(row: DbOption) -> Result<Self> {
        let value = decode_value(&row.key, &row.value)?;
        Ok(Self {
            key: row.key,
            value,
        })
    }
}

/// Encode a value for the `value` column
pub fn encode_value(key: &str, value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| OptionsError::serialization(key, e))
}

/// Decode the `value` column back into JSON
pub fn decode_value(key: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| OptionsError::serialization(key, e))
}
