use folio_core::Sponsor;

use chrono::SecondsFormat;
use serde::Serialize;

/// Sponsor DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorDto {
    pub id: String,
    pub donor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub created_at: String,
}

impl From<Sponsor> for SponsorDto {
    fn from(s: Sponsor) -> Self {
        Self {
            id: s.id,
            donor_name: s.donor_name,
            message: s.message,
            amount: s.amount,
            created_at: s.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
