//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use portfolio_core::ProjectRecord;

use crate::config::SiteConfig;
use crate::services::AdminGate;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is fixed at startup;
/// handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: SqlitePool,
    projects: Arc<[ProjectRecord]>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `pool` - SQLite connection pool
    /// * `projects` - Showcase catalog rendered on the home page
    #[must_use]
    pub fn new(config: SiteConfig, pool: SqlitePool, projects: Vec<ProjectRecord>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                projects: projects.into(),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a shared handle to the project catalog.
    #[must_use]
    pub fn projects(&self) -> Arc<[ProjectRecord]> {
        Arc::clone(&self.inner.projects)
    }

    /// Get the admin gate for the configured secret.
    #[must_use]
    pub fn admin_gate(&self) -> AdminGate<'_> {
        AdminGate::new(&self.inner.config.admin_password)
    }
}
