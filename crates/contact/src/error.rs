use crate::Field;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "sqlite")]
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[cfg(feature = "firestore")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store rejected the record ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed store response: {0}")]
    MalformedResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("timestamp error: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Required fields were left empty. Recovered in place, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

/// The append-record call failed. The cause is logged, not shown.
#[derive(Debug, thiserror::Error)]
#[error("failed to append record to {collection}: {source}")]
pub struct SubmissionError {
    pub collection: String,
    pub source: StoreError,
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_missing_fields() {
        let err = ValidationError {
            missing: vec![Field::Name, Field::Feature],
        };

        assert_eq!(err.to_string(), "missing required fields: name, feature");
    }
}
