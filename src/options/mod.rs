//! Persistent key-value options
//!
//! The options store provides:
//! - JSON values of any shape under string keys
//! - Upsert semantics (one row per key)
//! - Get-or-insert defaults
//! - Typed helpers on top of the raw JSON API

pub mod error;
pub mod models;
pub mod repository;
pub mod store;

pub use error::{OptionsError, Result};
pub use models::OptionRecord;
pub use repository::OptionRepository;
pub use store::Options;
