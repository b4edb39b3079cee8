use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use sqlx::SqlitePool;
use tasky_contact::DocumentStore;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod feature;
pub mod form;
mod health;
mod index;
mod legal;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Arc<dyn DocumentStore>,
    /// Set when the store is SQLite-backed, used by the readiness probe.
    pub pool: Option<SqlitePool>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: template.layout(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", axum::routing::post(contact::action))
        .route("/feature", get(feature::page).post(feature::action))
        .route("/feature/", get(feature::page).post(feature::action))
        .route("/terms", get(legal::terms))
        .route("/terms/", get(legal::terms))
        .route("/privacy", get(legal::privacy))
        .route("/privacy/", get(legal::privacy))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
