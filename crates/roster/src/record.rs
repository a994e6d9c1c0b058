//! Input records supplied by the persistence layer.

use cake_calendar::{CalendarDate, CalendarError};
use serde::{Deserialize, Deserializer, Serialize};

/// One registered birthday.
///
/// Only `id`, `name` and the birth date take part in projection; the
/// optional fields ride along for search and display. Unknown fields in
/// stored data (photos, timestamps) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    name: String,
    /// Birth date as `YYYY-MM-DD` text.
    #[serde(rename = "date", alias = "birthDate")]
    birth_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl BirthRecord {
    /// Creates a record with no description or phone.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date: birth_date.into(),
            description: None,
            phone: None,
        }
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Birth date text as stored.
    pub fn birth_date_text(&self) -> &str {
        &self.birth_date
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Phone number, if any.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Parses the stored birth date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Format`] if the text is not a valid date.
    pub fn birth_date(&self) -> Result<CalendarDate, CalendarError> {
        CalendarDate::parse(&self.birth_date)
    }
}

/// Stored ids are strings or (in older backups) JSON numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
