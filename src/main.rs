use anyhow::Result;
use clap::Parser;
use log::{debug, info};

use options_store::cli::{Cli, Commands};
use options_store::commands;
use options_store::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the logger so RUST_LOG can come from it; a missing file is fine
    let env_file = dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Some(path) = env_file {
        debug!("Loaded environment from {:?}", path);
    }

    let cli = Cli::parse();
    info!("Starting options-cli");

    let config = Config::load(cli.db).await?;
    let options = &config.options;

    match cli.command {
        Commands::Exists { key } => commands::exists_command(options, key).await,
        Commands::Get { key, default } => commands::get_command(options, key, default).await,
        Commands::Set { key, value, string } => {
            commands::set_command(options, key, value, string).await
        }
        Commands::SetMany { json } => commands::set_many_command(options, json).await,
        Commands::Remove { key } => commands::remove_command(options, key).await,
        Commands::Getsert { key, default } => {
            commands::getsert_command(options, key, default).await
        }
        Commands::List { json } => commands::list_command(options, json).await,
        Commands::Export { path } => commands::export_command(options, &path).await.map(|_| ()),
        Commands::Import { path } => commands::import_command(options, &path).await.map(|_| ()),
        Commands::Info => commands::info_command(&config).await,
    }
}
