//! Portfolio CLI - schema and message management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the contacts table if it is missing
//! portfolio-cli schema ensure
//!
//! # Print stored contact messages, newest first
//! portfolio-cli messages list
//! portfolio-cli messages list --limit 5
//! ```
//!
//! Both commands read the same environment as the site (`SITE_DATA_DIR`,
//! `VERCEL`, `.env`) so they operate on the site's database file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "portfolio-cli")]
#[command(author, version, about = "Portfolio site CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the database schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Inspect stored contact messages
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Create the contacts table if it does not exist
    Ensure,
}

#[derive(Subcommand)]
enum MessagesAction {
    /// List stored messages, newest first
    List {
        /// Show at most this many messages
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Schema { action } => match action {
            SchemaAction::Ensure => commands::schema::ensure().await?,
        },
        Commands::Messages { action } => match action {
            MessagesAction::List { limit } => commands::messages::list(limit).await?,
        },
    }
    Ok(())
}
