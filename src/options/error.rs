//! Error taxonomy for the options store

use thiserror::Error;

/// Result alias used throughout the options store
pub type Result<T> = std::result::Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// Connection, pool or driver level failure
    #[error("option storage is unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// Unique key violated despite the upsert
    #[error("constraint violation while writing option '{key}': {source}")]
    ConstraintViolation {
        key: String,
        #[source]
        source: sqlx::Error,
    },

    /// Value could not be encoded to or decoded from JSON
    #[error("failed to serialize value of option '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other database error (missing table, malformed query, ...)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl OptionsError {
    /// Classify an error raised while writing `key`
    pub fn from_write(key: &str, error: sqlx::Error) -> Self {
        let unique = matches!(&error, sqlx::Error::Database(db) if db.is_unique_violation());
        if unique {
            OptionsError::ConstraintViolation {
                key: key.to_string(),
                source: error,
            }
        } else {
            error.into()
        }
    }

    pub fn serialization(key: &str, source: serde_json::Error) -> Self {
        OptionsError::Serialization {
            key: key.to_string(),
            source,
        }
    }

    /// Whether the storage backend itself could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, OptionsError::StorageUnavailable(_))
    }
}

impl From<sqlx::Error> for OptionsError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => OptionsError::StorageUnavailable(error),
            other => OptionsError::Database(other),
        }
    }
}
