use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rowscope-cli")]
#[command(about = "Command line interface for browsing tables on a rowscope server")]
#[command(version)]
#[command(after_help = "Examples:
  rowscope-cli tables                         # List tables
  rowscope-cli page orders                    # First 100 rows of 'orders'
  rowscope-cli page orders --page 3           # Rows 201-300
  rowscope-cli query \"SELECT count(*) FROM orders\"
  rowscope-cli schema orders                  # Column names and types
  rowscope-cli page orders --format html      # Markup instead of a console table
  rowscope-cli --url http://db:5000 tables    # One-off server
  rowscope-cli config set --url http://db.internal:5000

Environment Variables:
  ROWSCOPE_URL  Server URL (overridden by --url)
  RUST_LOG      Log filter, e.g. rowscope_core=debug")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server URL for this invocation (goes before the subcommand)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console tables
    Text,
    /// HTML fragments
    Html,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tables the server exposes
    Tables,
    /// Print one page of a table
    Page {
        /// Table name, exactly as listed by `tables`
        table: String,
        /// 1-based page number
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },
    /// Run a read-only query
    Query {
        /// Query text; surrounding whitespace is ignored
        query: String,
    },
    /// Show a table's columns and their types
    Schema { table: String },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Persist configuration values
    #[command(after_help = "Examples:
  rowscope-cli config set --url http://localhost:5000
  rowscope-cli config set --timeout 60")]
    Set {
        /// Server URL to store
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}
