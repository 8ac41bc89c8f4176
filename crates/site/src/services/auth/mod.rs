//! Admin session gate.
//!
//! The admin view is protected by one shared secret. A matching secret sets a
//! boolean flag in the caller's session; logout removes it. There is no
//! attempt counting or lockout.
//!
//! Session access goes through [`AdminSessionStore`] so the gate can be driven
//! by something other than a live `tower_sessions::Session`.

mod error;

pub use error::{AuthError, INCORRECT_PASSWORD_NOTICE};

use std::future::Future;

use secrecy::{ExposeSecret, SecretString};
use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Notice shown after logging out.
pub const LOGGED_OUT_NOTICE: &str = "Logged out successfully.";

/// Notice shown when the admin flag could not be removed.
pub const LOGOUT_FAILED_NOTICE: &str = "Logout failed. Please try again.";

/// Notice for the outcome of [`AdminGate::logout`].
///
/// Success is only reported once the flag is actually gone.
#[must_use]
pub fn logout_notice(outcome: &Result<(), AuthError>) -> Flash {
    match outcome {
        Ok(()) => Flash::success(LOGGED_OUT_NOTICE),
        Err(_) => Flash::error(LOGOUT_FAILED_NOTICE),
    }
}

/// Per-client storage for the admin flag.
pub trait AdminSessionStore {
    /// Whether the flag is set.
    fn is_authenticated(&self) -> impl Future<Output = Result<bool, AuthError>> + Send;

    /// Set the flag.
    fn set_authenticated(&self) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Remove the flag.
    fn clear_authenticated(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}

impl AdminSessionStore for Session {
    async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self
            .get::<bool>(session_keys::ADMIN_AUTHENTICATED)
            .await?
            .unwrap_or(false))
    }

    async fn set_authenticated(&self) -> Result<(), AuthError> {
        self.insert(session_keys::ADMIN_AUTHENTICATED, true).await?;
        Ok(())
    }

    async fn clear_authenticated(&self) -> Result<(), AuthError> {
        self.remove::<bool>(session_keys::ADMIN_AUTHENTICATED)
            .await?;
        Ok(())
    }
}

/// Admin gate state for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminState {
    Unauthenticated,
    Authenticated,
}

/// Checks the admin secret and tracks the result in the session.
pub struct AdminGate<'a> {
    secret: &'a SecretString,
}

impl<'a> AdminGate<'a> {
    /// Create a gate for the configured admin secret.
    #[must_use]
    pub const fn new(secret: &'a SecretString) -> Self {
        Self { secret }
    }

    /// Current state of the session.
    ///
    /// A session that cannot be read counts as unauthenticated.
    pub async fn state<S: AdminSessionStore>(&self, store: &S) -> AdminState {
        match store.is_authenticated().await {
            Ok(true) => AdminState::Authenticated,
            Ok(false) => AdminState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read admin session flag");
                AdminState::Unauthenticated
            }
        }
    }

    /// Authenticate the session if `candidate` equals the admin secret exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IncorrectPassword` on mismatch, leaving the session
    /// unchanged. Returns `AuthError::Session` if the flag cannot be stored.
    pub async fn authenticate<S: AdminSessionStore>(
        &self,
        store: &S,
        candidate: &str,
    ) -> Result<(), AuthError> {
        if candidate != self.secret.expose_secret() {
            tracing::warn!("Admin login rejected");
            return Err(AuthError::IncorrectPassword);
        }

        store.set_authenticated().await?;
        tracing::info!("Admin session authenticated");
        Ok(())
    }

    /// Return the session to the unauthenticated state.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if the flag cannot be removed.
    pub async fn logout<S: AdminSessionStore>(&self, store: &S) -> Result<(), AuthError> {
        store.clear_authenticated().await?;
        tracing::info!("Admin session logged out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Admin flags for many clients, keyed by session ID.
    #[derive(Default)]
    struct MemorySessions {
        flags: Mutex<HashMap<String, bool>>,
    }

    impl MemorySessions {
        fn session(&self, id: &str) -> MemorySession<'_> {
            MemorySession {
                id: id.to_owned(),
                sessions: self,
            }
        }
    }

    struct MemorySession<'a> {
        id: String,
        sessions: &'a MemorySessions,
    }

    impl AdminSessionStore for MemorySession<'_> {
        async fn is_authenticated(&self) -> Result<bool, AuthError> {
            let flags = self.sessions.flags.lock().unwrap();
            Ok(flags.get(&self.id).copied().unwrap_or(false))
        }

        async fn set_authenticated(&self) -> Result<(), AuthError> {
            self.sessions
                .flags
                .lock()
                .unwrap()
                .insert(self.id.clone(), true);
            Ok(())
        }

        async fn clear_authenticated(&self) -> Result<(), AuthError> {
            self.sessions.flags.lock().unwrap().remove(&self.id);
            Ok(())
        }
    }

    /// A store whose backend is down.
    struct BrokenSession;

    fn backend_down() -> AuthError {
        AuthError::Session(tower_sessions::session::Error::Store(
            tower_sessions::session_store::Error::Backend("store unavailable".to_owned()),
        ))
    }

    impl AdminSessionStore for BrokenSession {
        async fn is_authenticated(&self) -> Result<bool, AuthError> {
            Err(backend_down())
        }

        async fn set_authenticated(&self) -> Result<(), AuthError> {
            Err(backend_down())
        }

        async fn clear_authenticated(&self) -> Result<(), AuthError> {
            Err(backend_down())
        }
    }

    fn secret() -> SecretString {
        SecretString::from("Koalapo")
    }

    #[tokio::test]
    async fn test_matching_secret_authenticates() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let session = sessions.session("a");

        assert_eq!(gate.state(&session).await, AdminState::Unauthenticated);
        gate.authenticate(&session, "Koalapo").await.unwrap();
        assert_eq!(gate.state(&session).await, AdminState::Authenticated);
    }

    #[tokio::test]
    async fn test_other_secrets_rejected() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let session = sessions.session("a");

        for candidate in ["", "koalapo", "Koalapo ", " Koalapo", "Koala", "Koalapo!"] {
            let err = gate.authenticate(&session, candidate).await.unwrap_err();
            assert!(matches!(err, AuthError::IncorrectPassword), "{candidate:?}");
            assert_eq!(err.notice(), "Incorrect password.");
            assert_eq!(gate.state(&session).await, AdminState::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_attempts_are_unlimited() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let session = sessions.session("a");

        for _ in 0..50 {
            assert!(gate.authenticate(&session, "wrong").await.is_err());
        }
        gate.authenticate(&session, "Koalapo").await.unwrap();
        assert_eq!(gate.state(&session).await, AdminState::Authenticated);
    }

    #[tokio::test]
    async fn test_wrong_secret_keeps_existing_login() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let session = sessions.session("a");

        gate.authenticate(&session, "Koalapo").await.unwrap();
        assert!(gate.authenticate(&session, "wrong").await.is_err());
        assert_eq!(gate.state(&session).await, AdminState::Authenticated);
    }

    #[tokio::test]
    async fn test_logout_always_unauthenticates() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let session = sessions.session("a");

        // From the unauthenticated state.
        gate.logout(&session).await.unwrap();
        assert_eq!(gate.state(&session).await, AdminState::Unauthenticated);

        // From the authenticated state.
        gate.authenticate(&session, "Koalapo").await.unwrap();
        gate.logout(&session).await.unwrap();
        assert_eq!(gate.state(&session).await, AdminState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();
        let admin = sessions.session("admin");
        let visitor = sessions.session("visitor");

        gate.authenticate(&admin, "Koalapo").await.unwrap();
        assert_eq!(gate.state(&visitor).await, AdminState::Unauthenticated);

        gate.logout(&visitor).await.unwrap();
        assert_eq!(gate.state(&admin).await, AdminState::Authenticated);
    }

    #[tokio::test]
    async fn test_unreadable_session_is_unauthenticated() {
        let secret = secret();
        let gate = AdminGate::new(&secret);

        assert_eq!(gate.state(&BrokenSession).await, AdminState::Unauthenticated);

        let err = gate
            .authenticate(&BrokenSession, "Koalapo")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Session(_)));
        assert_eq!(err.notice(), INCORRECT_PASSWORD_NOTICE);
    }

    #[tokio::test]
    async fn test_logout_notice_reports_failure() {
        let secret = secret();
        let gate = AdminGate::new(&secret);
        let sessions = MemorySessions::default();

        let ok = gate.logout(&sessions.session("a")).await;
        assert_eq!(logout_notice(&ok), Flash::success(LOGGED_OUT_NOTICE));

        let failed = gate.logout(&BrokenSession).await;
        assert!(failed.is_err());
        assert_eq!(logout_notice(&failed), Flash::error(LOGOUT_FAILED_NOTICE));
    }
}
