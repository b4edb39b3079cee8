use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use tasky_contact::FormKind;

use crate::routes::{AppState, form, index::IndexTemplate};
use crate::template::Template;

/// Re-renders the landing page with the contact form's new state.
#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let (status, form) = form::submit(FormKind::Contact, app_state.store.clone(), fields).await;

    template.render_with_status(status, IndexTemplate::new(template.layout(), form))
}
