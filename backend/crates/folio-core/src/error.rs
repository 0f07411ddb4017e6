use std::fmt;

use error_location::ErrorLocation;
use thiserror::Error;

/// A single rejected field in a creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire name of the field (e.g. "imageUrl")
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Rejection of an untrusted creation payload.
///
/// Carries every offending field, not just the first one found.
#[derive(Error, Debug)]
pub struct ValidationError {
    pub entity: &'static str,
    pub issues: Vec<FieldIssue>,
    pub location: ErrorLocation,
}

impl ValidationError {
    /// Client-facing message, without the source location
    pub fn message(&self) -> String {
        let details = self
            .issues
            .iter()
            .map(FieldIssue::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        format!("Invalid {} data: {}", self.entity, details)
    }

    /// Names of the rejected fields, in the order they were checked
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.message(), self.location)
    }
}
