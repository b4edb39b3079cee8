use std::collections::BTreeMap;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Name of the collection every site form appends to.
pub const SUBMISSIONS_COLLECTION: &str = "contactSubmissions";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Feature,
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Contact,
    FeatureRequest,
}

/// User-facing texts of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

const CONTACT_MESSAGES: Messages = Messages {
    missing_fields: "Please fill in all required fields",
    success: "Message sent successfully! We will get in touch soon 😊",
    failure: "Failed to send message. Please try again.",
};

const FEATURE_REQUEST_MESSAGES: Messages = Messages {
    missing_fields: "Please fill all fields.",
    success: "Feature request sent! Thank you!",
    failure: "Something went wrong. Try again.",
};

impl FormKind {
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Contact => &[
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Subject,
                Field::Message,
            ],
            FormKind::FeatureRequest => &[Field::Name, Field::Email, Field::Feature],
        }
    }

    pub fn required(&self) -> &'static [Field] {
        match self {
            FormKind::Contact => &[Field::Name, Field::Email, Field::Message],
            FormKind::FeatureRequest => &[Field::Name, Field::Email, Field::Feature],
        }
    }

    pub fn collection(&self) -> &'static str {
        SUBMISSIONS_COLLECTION
    }

    /// Contact submissions are picked up by the mail relay, which flips
    /// `emailSent` once the notification went out.
    pub fn tracks_email_delivery(&self) -> bool {
        matches!(self, FormKind::Contact)
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            FormKind::Contact => &CONTACT_MESSAGES,
            FormKind::FeatureRequest => &FEATURE_REQUEST_MESSAGES,
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

/// Field values of one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    values: BTreeMap<Field, String>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind
                .fields()
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Returns `false` when the field does not belong to this form.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.values.get_mut(&field) {
            Some(current) => {
                *current = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn missing_required(&self) -> Vec<Field> {
        self.kind
            .required()
            .iter()
            .filter(|field| self.get(**field).is_empty())
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}
