use crate::schema::rules::IssueCollector;
use crate::{NewSponsor, ValidationError};

use serde::Deserialize;

/// Wire shape of `POST /api/sponsors`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorPayload {
    #[serde(default)]
    pub donor_name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,
}

#[track_caller]
pub fn validate_sponsor_input(payload: SponsorPayload) -> Result<NewSponsor, ValidationError> {
    let mut issues = IssueCollector::new();

    let donor_name =
        issues.required_text("donorName", payload.donor_name, "Donor name is required");
    let amount = issues.optional_positive("amount", payload.amount);

    issues.finish(
        "sponsor",
        NewSponsor {
            donor_name,
            message: payload.message,
            amount,
        },
    )
}
