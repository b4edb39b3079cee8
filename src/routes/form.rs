use std::{str::FromStr, sync::Arc};

use axum::http::StatusCode;
use tasky_contact::{
    DocumentStore, Field, FormController, FormKind, FormState, SubmissionStatus, SubmitOutcome,
};

/// A form as rendered back into the page after a request.
pub struct FormView {
    pub kind: FormKind,
    values: FormState,
    pub status: Option<SubmissionStatus>,
}

impl FormView {
    pub fn empty(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormState::new(kind),
            status: None,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        Field::from_str(name)
            .map(|field| self.values.get(field))
            .unwrap_or_default()
    }

    pub fn succeeded(&self) -> bool {
        self.status.as_ref().is_some_and(|status| status.success)
    }
}

/// Runs one form submission for the posted fields.
pub async fn submit(
    kind: FormKind,
    store: Arc<dyn DocumentStore>,
    fields: Vec<(String, String)>,
) -> (StatusCode, FormView) {
    let controller = FormController::new(kind, store);
    for (name, value) in fields {
        controller.update_field(&name, value);
    }

    let status = match controller.submit().await {
        SubmitOutcome::Saved(_) => StatusCode::OK,
        SubmitOutcome::Invalid(err) => {
            tracing::debug!(form = %kind, err = %err, "form rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmitOutcome::Failed(_) => StatusCode::SERVICE_UNAVAILABLE,
        SubmitOutcome::InFlight => StatusCode::CONFLICT,
    };

    (
        status,
        FormView {
            kind,
            values: controller.snapshot(),
            status: controller.status(),
        },
    )
}
