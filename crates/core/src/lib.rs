//! Portfolio Core - Shared types library.
//!
//! This crate provides the types used across the portfolio components:
//! - `site` - Public portfolio site with contact form and admin view
//! - `cli` - Command-line tools for the message store
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. The contact validation rules live here so they can be
//! exercised without a server or a store.
//!
//! # Modules
//!
//! - [`types`] - Message IDs, contact validation, and project records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
