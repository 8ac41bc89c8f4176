//! Flash notices carried in the session across a redirect.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn push_flash(
    session: &Session,
    flash: Flash,
) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Flash> = session.get(session_keys::FLASH).await?.unwrap_or_default();
    pending.push(flash);
    session.insert(session_keys::FLASH, pending).await
}

/// Remove and return every queued notice.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Flash>>(session_keys::FLASH)
        .await?
        .unwrap_or_default())
}

/// Extractor that takes the pending notices for the page being rendered.
///
/// Notices are consumed: a second request will not see them. A missing or
/// unreadable session yields no notices rather than an error.
///
/// # Example
///
/// ```rust,ignore
/// async fn page(Flashes(flashes): Flashes) -> impl IntoResponse {
///     PageTemplate { flashes }
/// }
/// ```
pub struct Flashes(pub Vec<Flash>);

impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self(Vec::new()));
        };

        match take_flashes(session).await {
            Ok(flashes) => Ok(Self(flashes)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read flash notices");
                Ok(Self(Vec::new()))
            }
        }
    }
}
