//! JSON import/export of the whole options table

use anyhow::{Context, Result};
use colored::*;
use log::info;
use serde_json::{Map, Value};
use std::path::Path;

use super::parse_entries;
use crate::options::OptionRepository;

/// Write every option to `path` as one JSON object; returns the number exported
pub async fn export_command(options: &dyn OptionRepository, path: &Path) -> Result<usize> {
    let records = options.list().await?;
    let count = records.len();

    let map: Map<String, Value> = records.into_iter().map(|r| (r.key, r.value)).collect();
    let contents = serde_json::to_string_pretty(&Value::Object(map))?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    info!("Exported {} option(s) to {}", count, path.display());
    println!(
        "{} Exported {} option(s) to {}",
        "✓".bright_green().bold(),
        count,
        path.display()
    );
    Ok(count)
}

/// Load options from a JSON object file; returns the number imported
pub async fn import_command(options: &dyn OptionRepository, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;
    let entries = parse_entries(&contents)
        .with_context(|| format!("Invalid options file: {}", path.display()))?;

    let records = options.set_many(entries).await?;

    info!("Imported {} option(s) from {}", records.len(), path.display());
    println!(
        "{} Imported {} option(s) from {}",
        "✓".bright_green().bold(),
        records.len(),
        path.display()
    );
    Ok(records.len())
}
