//! Persistent key-value options backed by SQLite
//!
//! ```no_run
//! use options_store::config::Config;
//! use options_store::options::OptionRepository;
//! use serde_json::json;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::load(None).await?;
//! config.options.set("site.name", json!("Acme")).await?;
//! let flag = config.options.getsert("feature.beta", json!(false)).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod options;

pub use options::{OptionRecord, OptionRepository, Options, OptionsError};
