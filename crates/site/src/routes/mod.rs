//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Project showcase and contact form
//! POST /contact        - Contact form submission (redirects to /#contact)
//!
//! # Admin
//! GET  /admin          - Password prompt or stored messages
//! POST /admin          - Password check
//! GET  /admin/logout   - Clear the admin session
//!
//! # Health
//! GET  /health         - Liveness
//! GET  /health/ready   - Readiness (database reachable)
//! ```

pub mod admin;
pub mod contact;
pub mod health;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::show).post(admin::login))
        .route("/logout", get(admin::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/contact", post(contact::submit))
        .nest("/admin", admin_routes())
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}
