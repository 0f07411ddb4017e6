use crate::documents::new_identity;

use folio_core::{NewSponsor, Sponsor};

use bson::DateTime;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub created_at: DateTime,
}

impl SponsorDocument {
    pub fn new(input: NewSponsor) -> Self {
        let (id, created_at) = new_identity();
        Self {
            id,
            donor_name: input.donor_name,
            message: input.message,
            amount: input.amount,
            created_at,
        }
    }
}

impl From<SponsorDocument> for Sponsor {
    fn from(document: SponsorDocument) -> Self {
        NewSponsor {
            donor_name: document.donor_name,
            message: document.message,
            amount: document.amount,
        }
        .into_sponsor(document.id.to_hex(), document.created_at.to_chrono())
    }
}
