//! Session middleware configuration.
//!
//! Sets up SQLite-backed sessions using tower-sessions. The session cookie
//! only carries an ID and is signed with a key derived from `SECRET_KEY`.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha512};
use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::session_store::{self, ExpiredDeletion};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "portfolio_session";

/// Session expiry time in seconds (24 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// How often expired session rows are deleted.
const EXPIRED_SWEEP_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Session layer type produced by [`create_session_layer`].
pub type SiteSessionLayer = SessionManagerLayer<SqliteStore, SignedCookie>;

/// Derive the 64-byte cookie signing key from the configured secret.
#[must_use]
pub fn signing_key(secret: &SecretString) -> Key {
    let digest = Sha512::digest(secret.expose_secret().as_bytes());
    Key::from(digest.as_slice())
}

/// Create the session layer with a SQLite store.
///
/// Creates the session table if it does not exist yet.
///
/// # Arguments
///
/// * `pool` - SQLite connection pool shared with the contact store
/// * `config` - Site configuration (session secret, HTTPS mode)
///
/// # Errors
///
/// Returns `sqlx::Error` if the session table cannot be created.
pub async fn create_session_layer(
    pool: &SqlitePool,
    config: &SiteConfig,
) -> Result<SiteSessionLayer, sqlx::Error> {
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(signing_key(&config.session_secret)))
}

/// Delete expired session rows now and then every hour.
///
/// Expects the session table created by [`create_session_layer`]. The task
/// ends only if a sweep fails.
pub fn spawn_expired_session_sweep(
    pool: &SqlitePool,
) -> JoinHandle<Result<(), session_store::Error>> {
    let store = SqliteStore::new(pool.clone());
    tokio::spawn(store.continuously_delete_expired(EXPIRED_SWEEP_PERIOD))
}
