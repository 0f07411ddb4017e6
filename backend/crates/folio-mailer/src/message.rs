use crate::Result;

use folio_core::Contact;

use lettre::Message;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;

/// Plain-text notification for a new contact submission.
/// Replies go to the submitter when their address parses as a mailbox.
pub fn contact_message(from: &Mailbox, to: &Mailbox, contact: &Contact) -> Result<Message> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(format!("New contact from {}", contact.name))
        .header(ContentType::TEXT_PLAIN);

    if let Ok(reply_to) = contact.email.parse::<Mailbox>() {
        builder = builder.reply_to(reply_to);
    }

    let body = format!(
        "Name: {}\nEmail: {}\nReceived: {}\n\n{}\n",
        contact.name,
        contact.email,
        contact.created_at.to_rfc3339(),
        contact.message
    );

    Ok(builder.body(body)?)
}
