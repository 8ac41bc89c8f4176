//! Session-related types.

/// Session keys.
pub mod keys {
    /// Key for the admin authentication flag.
    pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";

    /// Key for notices waiting to be shown on the next page.
    pub const FLASH: &str = "flash";
}
