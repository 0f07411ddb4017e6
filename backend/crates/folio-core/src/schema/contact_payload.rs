use crate::schema::rules::IssueCollector;
use crate::{NewContact, ValidationError};

use serde::Deserialize;

/// Wire shape of `POST /api/contacts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

#[track_caller]
pub fn validate_contact_input(payload: ContactPayload) -> Result<NewContact, ValidationError> {
    let mut issues = IssueCollector::new();

    let name = issues.required_text("name", payload.name, "Name is required");
    let email = issues.required_email("email", payload.email);
    let message = issues.required_text("message", payload.message, "Message is required");

    issues.finish(
        "contact",
        NewContact {
            name,
            email,
            message,
        },
    )
}
