use std::{
    str::FromStr,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    DocumentId, DocumentStore, Field, FormKind, FormState, Record, SubmissionError,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    pub success: bool,
    pub message: String,
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Record appended, fields cleared.
    Saved(DocumentId),
    /// Required fields empty, no store call made.
    Invalid(ValidationError),
    /// Store call failed, fields kept for a retry.
    Failed(SubmissionError),
    /// Another submission of this form is still pending.
    InFlight,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

struct Inner {
    form: FormState,
    status: Option<SubmissionStatus>,
}

/// State and submission logic of one form view.
///
/// The controller is `Sync`: share it behind an `Arc` to observe
/// [`FormController::is_submitting`] while [`FormController::submit`] is pending.
pub struct FormController<S> {
    kind: FormKind,
    store: S,
    inner: Mutex<Inner>,
    submitting: AtomicBool,
}

impl<S: DocumentStore> FormController<S> {
    pub fn new(kind: FormKind, store: S) -> Self {
        Self {
            kind,
            store,
            inner: Mutex::new(Inner {
                form: FormState::new(kind),
                status: None,
            }),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sets a field by its input name. Names the form does not know are ignored.
    pub fn update_field(&self, name: &str, value: impl Into<String>) {
        let Ok(field) = Field::from_str(name) else {
            tracing::debug!(form = %self.kind, name, "ignoring unknown form field");
            return;
        };

        self.set(field, value);
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        if !self.lock().form.set(field, value) {
            tracing::debug!(form = %self.kind, field = %field, "field not part of form");
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().form.clone()
    }

    pub fn status(&self) -> Option<SubmissionStatus> {
        self.lock().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let messages = self.kind.messages();

        let (record, in_flight) = {
            let mut inner = self.lock();

            if self.submitting.load(Ordering::Acquire) {
                tracing::debug!(form = %self.kind, "submission already in flight");
                return SubmitOutcome::InFlight;
            }

            let missing = inner.form.missing_required();
            if !missing.is_empty() {
                inner.status = Some(SubmissionStatus::failure(messages.missing_fields));
                return SubmitOutcome::Invalid(ValidationError { missing });
            }

            let record = Record::from_state(&inner.form, OffsetDateTime::now_utc());
            (record, InFlightGuard::engage(&self.submitting))
        };

        let collection = self.kind.collection();
        let result = self.store.append(collection, record).await;

        let outcome = {
            let mut inner = self.lock();

            match result {
                Ok(id) => {
                    tracing::info!(form = %self.kind, collection, id = %id, "form submitted");
                    inner.status = Some(SubmissionStatus::success(messages.success));
                    inner.form.clear();
                    SubmitOutcome::Saved(id)
                }
                Err(source) => {
                    let err = SubmissionError {
                        collection: collection.to_owned(),
                        source,
                    };
                    tracing::error!(form = %self.kind, err = %err, "form submission failed");
                    inner.status = Some(SubmissionStatus::failure(messages.failure));
                    SubmitOutcome::Failed(err)
                }
            }
        };

        drop(in_flight);
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight flag when dropped, so an abandoned submission
/// cannot leave the form locked.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
