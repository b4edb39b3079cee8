use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use tasky_contact::FormKind;

use crate::routes::{AppState, form, form::FormView};
use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "feature.html")]
pub struct FeatureTemplate<'a> {
    pub layout: &'a Layout,
    pub form: FormView,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(FeatureTemplate {
        layout: template.layout(),
        form: FormView::empty(FormKind::FeatureRequest),
    })
}

#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let (status, form) =
        form::submit(FormKind::FeatureRequest, app_state.store.clone(), fields).await;

    template.render_with_status(
        status,
        FeatureTemplate {
            layout: template.layout(),
            form,
        },
    )
}
