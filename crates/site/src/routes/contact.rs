//! Contact form route handler.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::push_flash;
use crate::services::{ContactService, outcome_notice};
use crate::state::AppState;

/// Where the visitor lands after submitting, so the notice is in view.
pub const CONTACT_ANCHOR: &str = "/#contact";

/// Contact form data. Missing fields are treated as empty.
#[derive(Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Handle a contact form submission.
///
/// POST /contact
///
/// Every outcome, success or not, becomes a flash notice and a redirect back
/// to the contact section. Message bodies are never logged.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Redirect> {
    let outcome = ContactService::new(state.pool())
        .submit(&form.name, &form.email, &form.message)
        .await;

    match &outcome {
        Ok(id) => add_breadcrumb("contact", &format!("Contact message {id} stored")),
        Err(e) => tracing::info!(reason = %e, "Contact submission not stored"),
    }

    push_flash(&session, outcome_notice(&outcome)).await?;
    Ok(Redirect::to(CONTACT_ANCHOR))
}
