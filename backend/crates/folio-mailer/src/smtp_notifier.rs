use crate::{Notifier, NotificationError, Result, contact_message};

use folio_core::Contact;

use async_trait::async_trait;
use lettre::Address;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use log::info;

pub struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    /// Relay over TLS to `smtp_host`. Nothing is sent until the first notification.
    pub fn new(
        smtp_host: &str,
        smtp_username: &str,
        smtp_password: &str,
        sender_name: &str,
        sender_email: &str,
        notify_email: &str,
    ) -> Result<Self> {
        let from = sender_mailbox(sender_name, sender_email)?;
        let to = notify_email
            .parse::<Mailbox>()
            .map_err(|e| NotificationError::address(notify_email, e))?;

        let transport = SmtpTransport::relay(smtp_host)?
            .credentials(Credentials::new(
                smtp_username.to_string(),
                smtp_password.to_string(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_contact(&self, contact: &Contact) -> Result<()> {
        let message = contact_message(&self.from, &self.to, contact)?;
        let transport = self.transport.clone();

        // lettre's SmtpTransport is blocking
        tokio::task::spawn_blocking(move || transport.send(&message)).await??;

        info!("Sent contact notification for {}", contact.id);
        Ok(())
    }
}

/// The display name is taken verbatim, so commas and quotes need no escaping
pub(crate) fn sender_mailbox(sender_name: &str, sender_email: &str) -> Result<Mailbox> {
    let address = sender_email
        .parse::<Address>()
        .map_err(|e| NotificationError::address(sender_email, e))?;

    Ok(Mailbox::new(Some(sender_name.to_string()), address))
}
