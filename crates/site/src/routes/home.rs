//! Home page route handler.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use portfolio_core::ProjectRecord;

use crate::filters;
use crate::middleware::Flashes;
use crate::models::Flash;
use crate::state::AppState;

/// Home page template: project showcase, contact form, pending notices.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub projects: Arc<[ProjectRecord]>,
    pub flashes: Vec<Flash>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>, Flashes(flashes): Flashes) -> impl IntoResponse {
    IndexTemplate {
        projects: state.projects(),
        flashes,
    }
}
