//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Secrets (placeholders are refused when `SITE_ENV=production`)
//! - `ADMIN_PASSWORD` - Shared secret for the admin message view
//! - `SECRET_KEY` - Session signing secret (min 32 chars)
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 5000)
//! - `SITE_BASE_URL` - Public URL (default: <http://localhost:5000>)
//! - `SITE_ENV` - `development` or `production` (default: development)
//! - `SITE_DATA_DIR` - Directory holding `database.db` (default: database)
//! - `SITE_STATIC_DIR` - Static asset directory (default: crates/site/static)
//! - `SITE_LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `VERCEL` - When set, the database lives in the OS temp directory, since
//!   the rest of the filesystem is read-only on that host
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Admin secret used when `ADMIN_PASSWORD` is unset. Development only.
const PLACEHOLDER_ADMIN_PASSWORD: &str = "change-me-admin-password";

/// Session secret used when `SECRET_KEY` is unset. Development only.
const PLACEHOLDER_SESSION_SECRET: &str = "portfolio-insecure-development-session-secret";

/// File name of the SQLite database inside the storage directory.
pub const DATABASE_FILE_NAME: &str = "database.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvVar(
                "SITE_ENV".to_string(),
                format!("unknown environment '{other}'"),
            )),
        }
    }
}

/// Site application configuration.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Admin shared secret
    pub admin_password: SecretString,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Directory holding the SQLite database
    pub data_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Emit JSON logs instead of text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced by Sentry
    pub sentry_traces_sample_rate: f32,
    /// Variables that fell back to a placeholder secret
    placeholder_vars: Vec<&'static str>,
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .field("admin_password", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("data_dir", &self.data_dir)
            .field("static_dir", &self.static_dir)
            .field("log_json", &self.log_json)
            .field("sentry_dsn", &self.sentry_dsn)
            .field("sentry_environment", &self.sentry_environment)
            .finish_non_exhaustive()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid, or if a secret is
    /// missing or too weak in production.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);

        let host = env
            .or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = env
            .or_default("SITE_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = env.or_default("SITE_BASE_URL", &format!("http://localhost:{port}"));
        let environment = Environment::parse(&env.or_default("SITE_ENV", "development"))?;

        let mut placeholder_vars = Vec::new();

        let admin_password = match env.optional("ADMIN_PASSWORD") {
            Some(value) if !value.is_empty() => SecretString::from(value),
            _ => {
                placeholder_vars.push("ADMIN_PASSWORD");
                SecretString::from(PLACEHOLDER_ADMIN_PASSWORD)
            }
        };

        let session_secret = match env.optional("SECRET_KEY") {
            Some(value) if !value.is_empty() => {
                let secret = SecretString::from(value);
                validate_session_secret(&secret, "SECRET_KEY")?;
                secret
            }
            _ => {
                placeholder_vars.push("SECRET_KEY");
                SecretString::from(PLACEHOLDER_SESSION_SECRET)
            }
        };

        if environment == Environment::Production
            && let Some(var) = placeholder_vars.first()
        {
            return Err(ConfigError::InsecureSecret(
                (*var).to_string(),
                "must be set explicitly in production".to_string(),
            ));
        }

        let data_dir = resolve_data_dir(
            env.optional("VERCEL").is_some_and(|v| !v.is_empty()),
            env.optional("SITE_DATA_DIR"),
        );
        let static_dir = PathBuf::from(env.or_default("SITE_STATIC_DIR", "crates/site/static"));
        let log_json = env
            .optional("SITE_LOG_FORMAT")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"));

        let sentry_sample_rate = parse_rate(&env, "SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = parse_rate(&env, "SENTRY_TRACES_SAMPLE_RATE", 0.0)?;

        Ok(Self {
            host,
            port,
            base_url,
            environment,
            admin_password,
            session_secret,
            data_dir,
            static_dir,
            log_json,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
            placeholder_vars,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the SQLite database file.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Environment variables that fell back to an insecure placeholder.
    #[must_use]
    pub fn placeholder_vars(&self) -> &[&'static str] {
        &self.placeholder_vars
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional environment variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    /// Get an environment variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

/// Pick the directory that will hold the database.
///
/// Read-only hosts only allow writes under the temp directory.
fn resolve_data_dir(read_only_host: bool, data_dir: Option<String>) -> PathBuf {
    if read_only_host {
        return std::env::temp_dir();
    }
    data_dir.map_or_else(|| PathBuf::from("database"), PathBuf::from)
}

fn parse_rate<F>(env: &Lookup<F>, key: &str, default: f32) -> Result<f32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = env.optional(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be between 0.0 and 1.0".to_string(),
        ));
    }
    Ok(rate)
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Check whether a path is inside the OS temp directory.
#[must_use]
pub fn is_temp_path(path: &Path) -> bool {
    path.starts_with(std::env::temp_dir())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.database_path(), PathBuf::from("database/database.db"));
        assert!(!config.is_secure());
        assert!(!config.log_json);
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_placeholders_reported_in_development() {
        let config = load(&[]).unwrap();
        assert_eq!(config.placeholder_vars(), &["ADMIN_PASSWORD", "SECRET_KEY"]);
        assert_eq!(
            config.admin_password.expose_secret(),
            PLACEHOLDER_ADMIN_PASSWORD
        );
    }

    #[test]
    fn test_placeholders_refused_in_production() {
        let err = load(&[("SITE_ENV", "production")]).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(ref var, _) if var == "ADMIN_PASSWORD"));

        let err = load(&[("SITE_ENV", "production"), ("ADMIN_PASSWORD", "hunter2-but-longer")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(ref var, _) if var == "SECRET_KEY"));
    }

    #[test]
    fn test_production_with_explicit_secrets() {
        let config = load(&[
            ("SITE_ENV", "production"),
            ("ADMIN_PASSWORD", "correct horse battery staple"),
            ("SECRET_KEY", &"k".repeat(40)),
        ])
        .unwrap();
        assert!(config.placeholder_vars().is_empty());
        assert_eq!(
            config.admin_password.expose_secret(),
            "correct horse battery staple"
        );
    }

    #[test]
    fn test_session_secret_too_short() {
        let err = load(&[("SECRET_KEY", "short")]).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_ok());
    }

    #[test]
    fn test_read_only_host_uses_temp_dir() {
        let config = load(&[("VERCEL", "1"), ("SITE_DATA_DIR", "/srv/data")]).unwrap();
        assert_eq!(config.data_dir, std::env::temp_dir());
        assert!(is_temp_path(&config.database_path()));
    }

    #[test]
    fn test_empty_vercel_flag_ignored() {
        let config = load(&[("VERCEL", ""), ("SITE_DATA_DIR", "/srv/data")]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("SITE_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "SITE_PORT"));
    }

    #[test]
    fn test_invalid_environment() {
        assert!(matches!(
            load(&[("SITE_ENV", "staging")]),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        assert!(load(&[("SENTRY_TRACES_SAMPLE_RATE", "abc")]).is_err());
    }

    #[test]
    fn test_https_base_url_is_secure() {
        let config = load(&[("SITE_BASE_URL", "https://example.dev")]).unwrap();
        assert!(config.is_secure());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = load(&[
            ("ADMIN_PASSWORD", "super_secret_admin_value"),
            ("SECRET_KEY", "super_secret_session_value_0123456789"),
        ])
        .unwrap();

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("127.0.0.1"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_admin_value"));
        assert!(!debug_output.contains("super_secret_session_value"));
    }
}
