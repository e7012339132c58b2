//! Command handlers for the options CLI

use anyhow::{Context, Result};
use serde_json::Value;

pub mod info;
pub mod read;
pub mod transfer;
pub mod write;

pub use info::info_command;
pub use read::{exists_command, get_command, list_command};
pub use transfer::{export_command, import_command};
pub use write::{getsert_command, remove_command, set_command, set_many_command};

/// Interpret a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str, force_string: bool) -> Value {
    if force_string {
        return Value::String(raw.to_string());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse a JSON object into key/value pairs
pub fn parse_entries(raw: &str) -> Result<Vec<(String, Value)>> {
    let value: Value = serde_json::from_str(raw).context("Invalid JSON")?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => anyhow::bail!("Expected a JSON object of options, got: {}", other),
    }
}

/// Render a value for terminal output
pub fn format_value(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
