use anyhow::Result;
use colored::*;
use log::info;
use serde_json::{Map, Value};

use super::{format_value, parse_value};
use crate::options::OptionRepository;

/// Print whether an option is stored
pub async fn exists_command(options: &dyn OptionRepository, key: String) -> Result<()> {
    let exists = options.exists(&key).await?;
    println!("{}", exists);
    Ok(())
}

/// Print the value of an option, or the default when absent
pub async fn get_command(
    options: &dyn OptionRepository,
    key: String,
    default: Option<String>,
) -> Result<()> {
    info!("Getting option: {}", key);

    let default = default
        .map(|raw| parse_value(&raw, false))
        .unwrap_or(Value::Null);
    let value = options.get(&key, default).await?;
    println!("{}", format_value(&value));
    Ok(())
}

/// List all options
pub async fn list_command(options: &dyn OptionRepository, json: bool) -> Result<()> {
    let records = options.list().await?;

    if json {
        let map: Map<String, Value> = records.into_iter().map(|r| (r.key, r.value)).collect();
        println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
        return Ok(());
    }

    if records.is_empty() {
        println!("  {}", "No options stored".bright_yellow().bold());
        return Ok(());
    }

    println!();
    for record in &records {
        println!("  {} = {}", record.key.bright_cyan().bold(), format_value(&record.value));
    }
    println!();
    println!("  {}", format!("{} option(s)", records.len()).dimmed());

    Ok(())
}
