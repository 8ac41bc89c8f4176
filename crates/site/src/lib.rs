//! Portfolio site library.
//!
//! The project showcase, the contact form that stores submissions, and the
//! password-gated admin view that lists them. Exposed as a library so the
//! CLI and the integration tests share the same storage and router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
