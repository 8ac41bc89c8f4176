//! Admin authentication error types.

use thiserror::Error;

/// Notice shown for every failed admin login, whatever the cause.
pub const INCORRECT_PASSWORD_NOTICE: &str = "Incorrect password.";

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted secret does not match the configured one.
    #[error("incorrect admin password")]
    IncorrectPassword,

    /// The session could not be read or written.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl AuthError {
    /// User-facing notice.
    ///
    /// Identical for every variant so a failed login reveals nothing about why.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn notice(&self) -> &'static str {
        INCORRECT_PASSWORD_NOTICE
    }
}
