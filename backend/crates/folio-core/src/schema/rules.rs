use crate::{FieldIssue, ValidationError};

use std::panic::Location;

use error_location::ErrorLocation;
use validator::{ValidateEmail, ValidateUrl};

/// Accumulates field issues so a payload reports all of its problems at once
#[derive(Default)]
pub(crate) struct IssueCollector {
    issues: Vec<FieldIssue>,
}

impl IssueCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field,
            message: message.into(),
        });
    }

    /// Text that must contain at least one non-whitespace character
    pub(crate) fn required_text(
        &mut self,
        field: &'static str,
        value: Option<String>,
        message: &str,
    ) -> String {
        match value {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                self.push(field, message);
                String::new()
            }
        }
    }

    pub(crate) fn required_email(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(email) if email.as_str().validate_email() => email,
            _ => {
                self.push(field, "Invalid email format");
                String::new()
            }
        }
    }

    pub(crate) fn optional_url(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Option<String> {
        let url = value?;
        if url.as_str().validate_url() {
            Some(url)
        } else {
            self.push(field, "Invalid url");
            None
        }
    }

    pub(crate) fn optional_positive(
        &mut self,
        field: &'static str,
        value: Option<f64>,
    ) -> Option<f64> {
        let number = value?;
        if number.is_finite() && number > 0.0 {
            Some(number)
        } else {
            self.push(field, "Must be a positive number");
            None
        }
    }

    /// Resolve to the validated value, or to an error listing every issue
    #[track_caller]
    pub(crate) fn finish<T>(self, entity: &'static str, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            return Ok(value);
        }

        Err(ValidationError {
            entity,
            issues: self.issues,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
