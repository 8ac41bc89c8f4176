//! Core types for the portfolio site.
//!
//! This module provides type-safe wrappers for the site's domain concepts.

pub mod contact;
pub mod id;
pub mod project;

pub use contact::{ContactError, ContactMessage, ContactSubmission, MIN_MESSAGE_LENGTH};
pub use id::*;
pub use project::ProjectRecord;
