//! Database operations for the site's SQLite store.
//!
//! # Database: `<data dir>/database.db`
//!
//! ## Tables
//!
//! - `contacts` - Contact form submissions (append-only)
//! - `tower_sessions` - Session storage, managed by `tower-sessions-sqlx-store`
//!
//! # Schema
//!
//! There are no migration files. The `contacts` table is created with
//! `CREATE TABLE IF NOT EXISTS` on every start via
//! [`ContactRepository::ensure_schema`], which is safe when several processes
//! start against the same file.

pub mod contacts;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use contacts::ContactRepository;

/// How long a caller waits for a pooled connection before giving up.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long SQLite waits on a locked database before failing a statement.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a SQLite connection pool for the database at `database_path`.
///
/// The parent directory and the database file are created if missing.
///
/// # Errors
///
/// Returns `sqlx::Error` if the directory cannot be created or the database
/// cannot be opened.
pub async fn create_pool(database_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = database_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

/// Check that the store answers a trivial query.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if no connection can be acquired or
/// the query fails.
pub async fn ping(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

/// Throwaway databases for tests.
#[cfg(test)]
pub(crate) mod testing {
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    use super::{ContactRepository, create_pool};

    /// A pool over a fresh database file with the schema in place.
    ///
    /// Keep the returned `TempDir` alive for as long as the pool is used.
    #[allow(clippy::expect_used)]
    pub async fn fresh_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pool = create_pool(&dir.path().join("nested/database.db"))
            .await
            .expect("open database");
        ContactRepository::new(&pool)
            .ensure_schema()
            .await
            .expect("create schema");
        (dir, pool)
    }
}
