use folio_core::Contact;

use chrono::SecondsFormat;
use serde::Serialize;

/// Contact DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

impl From<Contact> for ContactDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            message: c.message,
            created_at: c.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
