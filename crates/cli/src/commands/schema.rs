//! Schema commands.

use sqlx::SqlitePool;

use portfolio_site::db::{ContactRepository, RepositoryError};

use super::{CommandError, connect};

/// Create the contacts table if it does not exist.
pub async fn ensure() -> Result<(), CommandError> {
    let pool = connect().await?;
    ensure_on(&pool).await?;
    tracing::info!("Contacts table is in place");
    Ok(())
}

async fn ensure_on(pool: &SqlitePool) -> Result<(), RepositoryError> {
    ContactRepository::new(pool).ensure_schema().await
}
