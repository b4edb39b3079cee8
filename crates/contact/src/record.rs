use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer, ser::SerializeMap};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{FormState, StoreError};

/// One form submission as it is written to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: BTreeMap<String, String>,
    pub created_at: OffsetDateTime,
    pub email_sent: Option<bool>,
}

impl Record {
    pub fn from_state(state: &FormState, created_at: OffsetDateTime) -> Self {
        Self {
            fields: state
                .iter()
                .map(|(field, value)| (field.to_string(), value.to_owned()))
                .collect(),
            created_at,
            email_sent: state.kind().tracks_email_delivery().then_some(false),
        }
    }

    pub fn created_at_rfc3339(&self) -> Result<String, StoreError> {
        Ok(self.created_at.format(&Rfc3339)?)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let created_at = self
            .created_at
            .format(&Rfc3339)
            .map_err(serde::ser::Error::custom)?;

        let mut map = serializer.serialize_map(Some(
            self.fields.len() + 1 + usize::from(self.email_sent.is_some()),
        ))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("createdAt", &created_at)?;
        if let Some(email_sent) = self.email_sent {
            map.serialize_entry("emailSent", &email_sent)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
