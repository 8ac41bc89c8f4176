//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors, added by the binary)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers
//! 4. Session layer (tower-sessions with SQLite store, signed cookie)

pub mod flash;
pub mod security_headers;
pub mod session;

pub use flash::{Flashes, push_flash, take_flashes};
pub use security_headers::security_headers_middleware;
pub use session::{SiteSessionLayer, create_session_layer, spawn_expired_session_sweep};
