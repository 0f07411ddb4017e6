use crate::documents::new_identity;

use folio_core::{Contact, NewContact};

use bson::DateTime;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime,
}

impl ContactDocument {
    pub fn new(input: NewContact) -> Self {
        let (id, created_at) = new_identity();
        Self {
            id,
            name: input.name,
            email: input.email,
            message: input.message,
            created_at,
        }
    }
}

impl From<ContactDocument> for Contact {
    fn from(document: ContactDocument) -> Self {
        NewContact {
            name: document.name,
            email: document.email,
            message: document.message,
        }
        .into_contact(document.id.to_hex(), document.created_at.to_chrono())
    }
}
