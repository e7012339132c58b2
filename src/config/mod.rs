//! SQLite-based configuration for the options store
//!
//! Resolves where the database lives, opens the connection pool, makes sure
//! the `options` table exists and hands out the [`Options`] store.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::options::Options;

pub mod db;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "OPTIONS_STORE_DB";

/// Main configuration manager using SQLite backend
pub struct Config {
    pub(crate) pool: sqlx::SqlitePool,
    db_path: PathBuf,

    /// Key-value options store
    pub options: Options,
}

impl Config {
    /// Get the path to the SQLite database file
    pub fn get_db_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                let path = PathBuf::from(path);
                ensure_parent_dir(&path)?;
                return Ok(path);
            }
        }

        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("options-store")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".options-store")
        };

        let path = config_dir.join("options.db");
        ensure_parent_dir(&path)?;
        Ok(path)
    }

    /// Load configuration from SQLite database
    ///
    /// An explicit `path` takes precedence over [`DB_PATH_ENV`] and the platform default.
    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        let db_path = match path {
            Some(path) => {
                ensure_parent_dir(&path)?;
                path
            }
            None => Self::get_db_path()?,
        };
        log::debug!("Loading options from: {:?}", db_path);

        let pool = db::connect(&db_path).await?;
        db::ensure_schema(&pool).await?;

        Ok(Self {
            options: Options::new(pool.clone()),
            pool,
            db_path,
        })
    }

    /// Create a new config for testing (in-memory database)
    pub async fn new_test() -> Result<Self> {
        let pool = db::connect_memory().await?;
        db::ensure_schema(&pool).await?;

        Ok(Self {
            options: Options::new(pool.clone()),
            pool,
            db_path: PathBuf::from(":memory:"),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub async fn db_info(&self) -> Result<db::DatabaseInfo> {
        db::get_db_info(&self.pool).await
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
            log::info!("Created config directory: {:?}", dir);
        }
    }
    Ok(())
}
