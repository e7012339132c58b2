use anyhow::Result;
use colored::*;

use crate::config::Config;

/// Show database information
pub async fn info_command(config: &Config) -> Result<()> {
    let info = config.db_info().await?;

    println!();
    println!("  {}", "Options database".bright_white().bold());
    println!("  path:           {}", config.db_path().display());
    println!("  sqlite version: {}", info.sqlite_version);
    println!("  journal mode:   {}", info.journal_mode);
    println!("  page size:      {}", info.page_size);
    println!("  options:        {}", info.option_count);
    println!();

    Ok(())
}
