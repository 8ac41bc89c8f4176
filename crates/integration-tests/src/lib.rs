//! End-to-end tests for the portfolio site.
//!
//! Each test spawns the real router on an ephemeral port, backed by a fresh
//! SQLite file in a temp directory, and drives it with a cookie-keeping
//! `reqwest` client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p portfolio-integration-tests
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;

use reqwest::{Client, Response, redirect::Policy};
use sqlx::SqlitePool;
use tempfile::TempDir;

use portfolio_site::catalog::default_projects;
use portfolio_site::config::SiteConfig;
use portfolio_site::db::{self, ContactRepository};
use portfolio_site::{app, state::AppState};

/// Admin secret every test site is configured with.
pub const ADMIN_PASSWORD: &str = "Koalapo";

const SESSION_SECRET: &str = "integration-test-session-secret-0123456789";

/// A running site plus the handles a test needs to inspect it.
pub struct TestSite {
    addr: SocketAddr,
    pool: SqlitePool,
    _data_dir: TempDir,
}

impl TestSite {
    /// Start a site on `127.0.0.1` with an OS-assigned port.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory, database, or listener cannot be set up.
    #[allow(clippy::expect_used)]
    pub async fn spawn() -> Self {
        let data_dir = tempfile::tempdir().expect("create temp dir");

        let vars: HashMap<&str, String> = HashMap::from([
            ("SITE_PORT", "0".to_string()),
            ("ADMIN_PASSWORD", ADMIN_PASSWORD.to_string()),
            ("SECRET_KEY", SESSION_SECRET.to_string()),
            ("SITE_DATA_DIR", data_dir.path().display().to_string()),
            (
                "SITE_STATIC_DIR",
                concat!(env!("CARGO_MANIFEST_DIR"), "/../site/static").to_string(),
            ),
        ]);
        let config =
            SiteConfig::from_lookup(|key| vars.get(key).cloned()).expect("load test config");

        let pool = db::create_pool(&config.database_path())
            .await
            .expect("open database");
        ContactRepository::new(&pool)
            .ensure_schema()
            .await
            .expect("create schema");

        let state = AppState::new(config, pool.clone(), default_projects());
        let router = app::build(state).await.expect("build router");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve site");
        });

        Self {
            addr,
            pool,
            _data_dir: data_dir,
        }
    }

    /// Absolute URL for `path` on this site.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A new browser-like client: keeps cookies, does not follow redirects.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn client(&self) -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("build HTTP client")
    }

    /// The site's database pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over the site's database.
    #[must_use]
    pub const fn contacts(&self) -> ContactRepository<'_> {
        ContactRepository::new(&self.pool)
    }

    /// Submit the contact form.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    #[allow(clippy::expect_used)]
    pub async fn submit_contact(
        &self,
        client: &Client,
        fields: &[(&str, &str)],
    ) -> Response {
        client
            .post(self.url("/contact"))
            .form(fields)
            .send()
            .await
            .expect("submit contact form")
    }

    /// GET `path` and return the body text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the status is not 200.
    #[allow(clippy::expect_used)]
    pub async fn page(&self, client: &Client, path: &str) -> String {
        let resp = client
            .get(self.url(path))
            .send()
            .await
            .expect("fetch page");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "GET {path}");
        resp.text().await.expect("read page body")
    }
}

/// The `Location` header of a redirect response.
///
/// # Panics
///
/// Panics if the header is missing or not valid text.
#[allow(clippy::expect_used)]
#[must_use]
pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .expect("Location header")
        .to_str()
        .expect("Location is text")
}
