use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "options-cli")]
#[command(about = "Read and write persistent key-value options")]
pub struct Cli {
    /// Path to the options database (overrides OPTIONS_STORE_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether an option is stored
    Exists {
        /// Option key
        key: String,
    },
    /// Print the value of an option
    Get {
        /// Option key
        key: String,
        /// JSON value printed when the option is absent
        #[arg(long)]
        default: Option<String>,
    },
    /// Set a single option
    Set {
        /// Option key
        key: String,
        /// Value, parsed as JSON when possible
        value: String,
        /// Store the value as a plain string without JSON parsing
        #[arg(long)]
        string: bool,
    },
    /// Set several options from a JSON object
    SetMany {
        /// JSON object mapping keys to values
        json: String,
    },
    /// Remove an option
    Remove {
        /// Option key
        key: String,
    },
    /// Print an option, storing the default first if it is absent
    Getsert {
        /// Option key
        key: String,
        /// JSON value stored when the option is absent
        #[arg(long, default_value = "false")]
        default: String,
    },
    /// List all options
    List {
        /// Print as a single JSON object
        #[arg(long)]
        json: bool,
    },
    /// Write all options to a JSON file
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Load options from a JSON file
    Import {
        /// Source file containing a JSON object
        path: PathBuf,
    },
    /// Show database information
    Info,
}
