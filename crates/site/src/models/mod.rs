//! Domain models for the site.
//!
//! Stored contact messages and project records live in `portfolio-core`;
//! this module holds the types that only exist inside a web session.

pub mod flash;
pub mod session;

pub use flash::{Flash, FlashKind};
pub use session::keys as session_keys;
