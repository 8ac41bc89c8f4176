//! CLI command implementations.

pub mod messages;
pub mod schema;

use sqlx::SqlitePool;
use thiserror::Error;

use portfolio_site::config::{ConfigError, SiteConfig};
use portfolio_site::db::{self, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database could not be opened.
    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// A repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Open the site's database using the site's configuration.
async fn connect() -> Result<SqlitePool, CommandError> {
    let config = SiteConfig::from_env()?;
    let path = config.database_path();

    tracing::info!(path = %path.display(), "Opening database");
    Ok(db::create_pool(&path).await?)
}
