//! Contact message repository.
//!
//! Messages are append-only: there is an insert and a newest-first listing,
//! nothing else. Every call checks a connection out of the pool for its own
//! duration; the connection goes back to the pool when it is dropped, on the
//! error paths as well.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use portfolio_core::{ContactMessage, ContactSubmission, MessageId};

use super::RepositoryError;

/// Format written by the `created_at` column default.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const CREATE_CONTACTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )
";

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    created_at: String,
}

impl TryFrom<ContactRow> for ContactMessage {
    type Error = RepositoryError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let created_at = NaiveDateTime::parse_from_str(&row.created_at, CREATED_AT_FORMAT)
            .map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid created_at '{}' for contact {}: {e}",
                    row.created_at, row.id
                ))
            })?
            .and_utc();

        Ok(Self {
            id: MessageId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            created_at,
        })
    }
}

/// Repository for contact message database operations.
pub struct ContactRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `contacts` table if it does not exist yet.
    ///
    /// Running it again leaves the table and its rows untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_CONTACTS_TABLE)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Store a validated submission.
    ///
    /// The store assigns the ID and the `created_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if no connection is available or
    /// the insert fails.
    pub async fn insert_message(
        &self,
        submission: &ContactSubmission,
    ) -> Result<MessageId, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO contacts (name, email, message) VALUES (?, ?, ?)")
            .bind(submission.name())
            .bind(submission.email())
            .bind(submission.message())
            .execute(&mut *conn)
            .await?;

        Ok(MessageId::new(result.last_insert_rowid()))
    }

    /// List every stored message, most recent first.
    ///
    /// Messages sharing a timestamp are ordered by descending ID, so the
    /// listing is strictly newest-first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored timestamp cannot be parsed.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    /// List at most `limit` messages, most recent first.
    ///
    /// Same ordering as [`Self::list_messages`]; only the newest rows are read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored timestamp cannot be parsed.
    pub async fn list_recent_messages(
        &self,
        limit: u32,
    ) -> Result<Vec<ContactMessage>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    /// Count stored messages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_messages(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
