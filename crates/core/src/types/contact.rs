//! Contact form submissions and the rules they must pass.
//!
//! The rules run in a fixed order and the first failure is reported:
//!
//! 1. `name`, `email` and `message` are non-empty after trimming
//! 2. `email` contains both an `@` and a `.`
//! 3. `message` is at least [`MIN_MESSAGE_LENGTH`] characters after trimming
//!
//! The email rule is intentionally a plain substring check. Addresses such as
//! `a.b@c` pass; anything stricter belongs to the mail server, not the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::MessageId;

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// A contact form rule failure.
///
/// The `Display` text is the user-facing notice for that failure.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    /// One of the fields is empty after trimming.
    #[error("All fields are required.")]
    MissingField,
    /// The email lacks an `@` or a `.`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// The trimmed message is shorter than [`MIN_MESSAGE_LENGTH`].
    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

/// Check that every field has content once surrounding whitespace is removed.
///
/// # Errors
///
/// Returns [`ContactError::MissingField`] if any field trims to empty.
pub fn require_fields(name: &str, email: &str, message: &str) -> Result<(), ContactError> {
    if [name, email, message]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ContactError::MissingField);
    }
    Ok(())
}

/// Check that an email contains both an `@` and a `.` somewhere.
///
/// # Errors
///
/// Returns [`ContactError::InvalidEmail`] if either character is absent.
pub fn check_email(email: &str) -> Result<(), ContactError> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail)
    }
}

/// Check that the trimmed message reaches [`MIN_MESSAGE_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`ContactError::MessageTooShort`] for shorter messages.
pub fn check_message_length(message: &str) -> Result<(), ContactError> {
    if message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        return Err(ContactError::MessageTooShort);
    }
    Ok(())
}

/// A contact submission that passed every rule.
///
/// Fields are stored trimmed. The only way to obtain one is
/// [`ContactSubmission::parse`].
///
/// ## Examples
///
/// ```
/// use portfolio_core::{ContactError, ContactSubmission};
///
/// let ok = ContactSubmission::parse("  Jane ", "jane@x.com", "Hello there, this works");
/// assert_eq!(ok.unwrap().name(), "Jane");
///
/// let err = ContactSubmission::parse("A", "no-at-sign", "a valid message");
/// assert_eq!(err.unwrap_err(), ContactError::InvalidEmail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Trim the raw form fields and run the rules in order.
    ///
    /// # Errors
    ///
    /// Returns the [`ContactError`] of the first rule that fails.
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        require_fields(name, email, message)?;
        check_email(email)?;
        check_message_length(message)?;

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored contact message.
///
/// Records are written once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Store-assigned ID.
    pub id: MessageId,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// When the store accepted the message.
    pub created_at: DateTime<Utc>,
}
