//! Stored message commands.

use std::fmt::Write as _;

use sqlx::SqlitePool;

use portfolio_core::ContactMessage;
use portfolio_site::db::{ContactRepository, RepositoryError};

use super::{CommandError, connect};

/// Print stored messages, newest first.
///
/// # Arguments
///
/// * `limit` - Print at most this many messages; all when `None`
pub async fn list(limit: Option<u32>) -> Result<(), CommandError> {
    let pool = connect().await?;
    let (total, messages) = fetch(&pool, limit).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", render(total, &messages));
    }
    Ok(())
}

/// Load the total count and the newest `limit` messages.
async fn fetch(
    pool: &SqlitePool,
    limit: Option<u32>,
) -> Result<(i64, Vec<ContactMessage>), RepositoryError> {
    let repo = ContactRepository::new(pool);
    repo.ensure_schema().await?;

    let total = repo.count_messages().await?;
    let messages = match limit {
        Some(limit) => repo.list_recent_messages(limit).await?,
        None => repo.list_messages().await?,
    };
    Ok((total, messages))
}

/// Plain-text listing, one block per message.
fn render(total: i64, messages: &[ContactMessage]) -> String {
    let mut out = format!("{total} message(s) stored, showing {}\n", messages.len());
    for message in messages {
        let _ = write!(
            out,
            "\n#{} {} <{}> at {}\n{}\n",
            message.id,
            message.name,
            message.email,
            message.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            message.message,
        );
    }
    out
}
