//! Business logic services for the site.
//!
//! # Services
//!
//! - `auth` - Admin session gate (shared-secret login, logout)
//! - `contact` - Contact form submission (validate, store, notice)

pub mod auth;
pub mod contact;

pub use auth::{
    AdminGate, AdminSessionStore, AdminState, AuthError, INCORRECT_PASSWORD_NOTICE,
    LOGGED_OUT_NOTICE, LOGOUT_FAILED_NOTICE, logout_notice,
};
pub use contact::{ContactService, RETRY_NOTICE, SENT_NOTICE, SubmissionError, outcome_notice};
