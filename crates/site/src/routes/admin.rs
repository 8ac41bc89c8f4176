//! Admin route handlers.
//!
//! One page serves both states of the admin gate: a password prompt, or the
//! list of stored contact messages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use portfolio_core::ContactMessage;

use crate::db::ContactRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::{Flashes, push_flash, take_flashes};
use crate::models::Flash;
use crate::services::{AdminState, logout_notice};
use crate::state::AppState;

/// Admin page path; every admin action redirects here.
pub const ADMIN_PATH: &str = "/admin";

/// Notice shown when the message list cannot be read.
pub const LIST_FAILED_NOTICE: &str = "Messages could not be loaded. Please try again later.";

/// Admin login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub authenticated: bool,
    pub messages: Vec<ContactMessage>,
    pub flashes: Vec<Flash>,
}

impl AdminTemplate {
    /// The password prompt.
    fn prompt(flashes: Vec<Flash>) -> Self {
        Self {
            authenticated: false,
            messages: Vec::new(),
            flashes,
        }
    }

    /// The message list, newest first.
    ///
    /// A failed read still renders the page, with an error notice and no rows.
    async fn messages(state: &AppState, mut flashes: Vec<Flash>) -> Self {
        let messages = match ContactRepository::new(state.pool()).list_messages().await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list contact messages");
                flashes.push(Flash::error(LIST_FAILED_NOTICE));
                Vec::new()
            }
        };

        Self {
            authenticated: true,
            messages,
            flashes,
        }
    }
}

/// Display the admin page.
///
/// GET /admin
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Flashes(flashes): Flashes,
) -> impl IntoResponse {
    match state.admin_gate().state(&session).await {
        AdminState::Authenticated => AdminTemplate::messages(&state, flashes).await,
        AdminState::Unauthenticated => AdminTemplate::prompt(flashes),
    }
}

/// Handle the admin password form.
///
/// POST /admin
///
/// A match renders the message list directly, along with any pending
/// notices. A mismatch redirects back to the prompt with an error notice and
/// leaves pending notices queued for that page.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state
        .admin_gate()
        .authenticate(&session, &form.password)
        .await
    {
        Ok(()) => {
            let flashes = take_flashes(&session).await?;
            Ok(AdminTemplate::messages(&state, flashes)
                .await
                .into_response())
        }
        Err(e) => {
            push_flash(&session, Flash::error(e.notice())).await?;
            Ok(Redirect::to(ADMIN_PATH).into_response())
        }
    }
}

/// Log out of the admin view.
///
/// GET /admin/logout
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let outcome = state.admin_gate().logout(&session).await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "Failed to clear admin session flag");
    }

    push_flash(&session, logout_notice(&outcome)).await?;
    Ok(Redirect::to(ADMIN_PATH))
}
