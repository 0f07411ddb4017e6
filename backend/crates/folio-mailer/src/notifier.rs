use crate::Result;

use folio_core::Contact;

use async_trait::async_trait;

/// Sends a notification when someone submits the contact form
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_contact(&self, contact: &Contact) -> Result<()>;
}
