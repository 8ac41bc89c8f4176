//! Contact form submission.
//!
//! A submission is validated, stored, and turned into a notice for the
//! visitor. A storage failure is logged with full detail but the visitor only
//! sees a generic retry message.

use sqlx::SqlitePool;
use thiserror::Error;

use portfolio_core::{ContactError, ContactSubmission, MessageId};

use crate::db::{ContactRepository, RepositoryError};
use crate::models::Flash;

/// Notice shown when a message was stored.
pub const SENT_NOTICE: &str = "Thank you! Your message has been sent successfully.";

/// Notice shown when the store rejected a valid message.
pub const RETRY_NOTICE: &str = "An error occurred. Please try again later.";

/// Why a submission was not stored.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A validation rule failed; nothing was written.
    #[error(transparent)]
    Invalid(#[from] ContactError),

    /// The store failed; nothing was written.
    #[error("failed to store contact message: {0}")]
    Storage(#[from] RepositoryError),
}

impl SubmissionError {
    /// User-facing notice for this failure.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Invalid(rule) => rule.to_string(),
            Self::Storage(_) => RETRY_NOTICE.to_owned(),
        }
    }
}

/// Notice for the outcome of [`ContactService::submit`].
#[must_use]
pub fn outcome_notice(outcome: &Result<MessageId, SubmissionError>) -> Flash {
    match outcome {
        Ok(_) => Flash::success(SENT_NOTICE),
        Err(e) => Flash::error(e.notice()),
    }
}

/// Contact submission service.
pub struct ContactService<'a> {
    contacts: ContactRepository<'a>,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            contacts: ContactRepository::new(pool),
        }
    }

    /// Validate and store one submission.
    ///
    /// Inputs are trimmed before the rules run; the first failing rule is
    /// reported. Either the whole record is stored or nothing is.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Invalid` if a rule fails.
    /// Returns `SubmissionError::Storage` if the insert fails.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<MessageId, SubmissionError> {
        let submission = ContactSubmission::parse(name, email, message)?;

        let id = self
            .contacts
            .insert_message(&submission)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to store contact message"))?;

        tracing::info!(message_id = %id, "Contact message stored");
        Ok(id)
    }
}
