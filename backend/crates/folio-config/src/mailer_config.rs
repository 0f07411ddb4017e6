use crate::{ConfigError, ConfigErrorResult, DEFAULT_SENDER_NAME};

use std::fmt;

use serde::Deserialize;
use validator::ValidateEmail;

/// SMTP settings for contact notifications.
/// Notifications are disabled unless `smtp_host` is set.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    pub smtp_host: Option<String>,
    pub smtp_username: String,
    pub smtp_password: String,
    pub sender_name: String,
    pub sender_email: String,
    /// Recipient of new-contact notifications
    pub notify_email: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_username: String::new(),
            smtp_password: String::new(),
            sender_name: String::from(DEFAULT_SENDER_NAME),
            sender_email: String::new(),
            notify_email: String::new(),
        }
    }
}

impl fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailerConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("sender_name", &self.sender_name)
            .field("sender_email", &self.sender_email)
            .field("notify_email", &self.notify_email)
            .finish()
    }
}

impl MailerConfig {
    pub fn is_enabled(&self) -> bool {
        self.smtp_host
            .as_deref()
            .is_some_and(|host| !host.trim().is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        if !self.sender_email.as_str().validate_email() {
            return Err(ConfigError::mailer(format!(
                "mailer.sender_email '{}' is not a valid address",
                self.sender_email
            )));
        }

        if !self.notify_email.as_str().validate_email() {
            return Err(ConfigError::mailer(format!(
                "mailer.notify_email '{}' is not a valid address",
                self.notify_email
            )));
        }

        Ok(())
    }
}
