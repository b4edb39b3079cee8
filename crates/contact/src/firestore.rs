use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::{DocumentId, DocumentStore, Record, StoreError};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Appends records through the Firestore REST API.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct CreatedDocument {
    name: Option<String>,
}

impl FirestoreStore {
    pub fn new(project_id: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            project_id: project_id.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{collection}",
            self.base_url, self.project_id
        )
    }
}

/// Wraps every value in Firestore's typed-value envelope.
pub fn document_body(record: &Record) -> Result<Value, StoreError> {
    let mut fields = Map::new();
    for (name, value) in &record.fields {
        fields.insert(name.to_owned(), json!({ "stringValue": value }));
    }
    fields.insert(
        "createdAt".to_owned(),
        json!({ "stringValue": record.created_at_rfc3339()? }),
    );
    if let Some(email_sent) = record.email_sent {
        fields.insert("emailSent".to_owned(), json!({ "booleanValue": email_sent }));
    }

    Ok(json!({ "fields": fields }))
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn append(&self, collection: &str, record: Record) -> Result<DocumentId, StoreError> {
        let body = document_body(&record)?;

        let mut request = self.client.post(self.collection_url(collection)).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedDocument = response.json().await?;
        let id = created
            .name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| StoreError::MalformedResponse("document name missing".to_owned()))?;

        Ok(DocumentId(id.to_owned()))
    }
}
