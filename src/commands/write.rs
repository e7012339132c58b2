use anyhow::Result;
use colored::*;
use log::info;

use super::{format_value, parse_entries, parse_value};
use crate::options::{OptionRecord, OptionRepository};

/// Set a single option
pub async fn set_command(
    options: &dyn OptionRepository,
    key: String,
    value: String,
    force_string: bool,
) -> Result<()> {
    info!("Setting {} to {}", key, value);

    let records = options.set(&key, parse_value(&value, force_string)).await?;
    print_written(&records);
    Ok(())
}

/// Set several options from a JSON object
pub async fn set_many_command(options: &dyn OptionRepository, json: String) -> Result<()> {
    let entries = parse_entries(&json)?;
    info!("Setting {} option(s)", entries.len());

    let records = options.set_many(entries).await?;
    print_written(&records);
    Ok(())
}

/// Remove an option
pub async fn remove_command(options: &dyn OptionRepository, key: String) -> Result<()> {
    if options.remove(&key).await? {
        println!(
            "{} Option '{}' removed",
            "✓".bright_green().bold(),
            key.bright_green().bold()
        );
    } else {
        println!("  {} Option '{}' not found", "⚠️".bright_yellow().bold(), key);
    }
    Ok(())
}

/// Print an option, storing the default if it is absent
pub async fn getsert_command(
    options: &dyn OptionRepository,
    key: String,
    default: String,
) -> Result<()> {
    let value = options.getsert(&key, parse_value(&default, false)).await?;
    println!("{}", format_value(&value));
    Ok(())
}

fn print_written(records: &[OptionRecord]) {
    for record in records {
        println!(
            "{} {} = {}",
            "✓".bright_green().bold(),
            record.key.bright_green().bold(),
            format_value(&record.value)
        );
    }
}
