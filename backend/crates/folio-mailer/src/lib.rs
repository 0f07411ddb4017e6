//! Outbound email notifications.
//!
//! The API layer only sees the [`Notifier`] trait; [`SmtpNotifier`] is the
//! production implementation. Delivery is best effort and callers treat a
//! [`NotificationError`] as something to log, never to surface.

mod error;
mod message;
mod notifier;
mod smtp_notifier;

#[cfg(test)]
mod tests;

pub use error::{NotificationError, Result};
pub use message::contact_message;
pub use notifier::Notifier;
pub use smtp_notifier::SmtpNotifier;
