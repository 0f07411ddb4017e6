use crate::smtp_notifier::sender_mailbox;
use crate::{NotificationError, SmtpNotifier, contact_message};

use folio_core::Contact;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use lettre::message::Mailbox;

fn contact(email: &str) -> Contact {
    Contact {
        id: "65f0c0ffee0000000000abcd".to_string(),
        name: "Jane".to_string(),
        email: email.to_string(),
        message: "Loved the portfolio".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

fn mailbox(address: &str) -> Mailbox {
    address.parse().unwrap()
}

#[test]
fn when_contact_message_built_then_headers_and_body_present() {
    let message = contact_message(
        &mailbox("Portfolio <site@example.com>"),
        &mailbox("owner@example.com"),
        &contact("jane@x.com"),
    )
    .unwrap();

    let rendered = String::from_utf8(message.formatted()).unwrap();

    assert_that!(rendered.as_str(), contains_substring("Subject: New contact from Jane"));
    assert_that!(rendered.as_str(), contains_substring("To: owner@example.com"));
    assert_that!(rendered.as_str(), contains_substring("Reply-To: jane@x.com"));
    assert_that!(rendered.as_str(), contains_substring("Loved the portfolio"));
    assert_that!(rendered.as_str(), contains_substring("2024-03-01T12:00:00+00:00"));
}

#[test]
fn when_submitter_address_unparsable_then_message_has_no_reply_to() {
    let message = contact_message(
        &mailbox("site@example.com"),
        &mailbox("owner@example.com"),
        &contact("not an address"),
    )
    .unwrap();

    let rendered = String::from_utf8(message.formatted()).unwrap();

    assert!(!rendered.contains("Reply-To"));
}

#[test]
fn when_notify_address_invalid_then_notifier_not_built() {
    let result = SmtpNotifier::new(
        "smtp.example.com",
        "user",
        "secret",
        "Portfolio",
        "site@example.com",
        "nobody",
    );

    assert!(matches!(result, Err(NotificationError::Address { .. })));
}

#[test]
fn when_sender_name_has_comma_then_mailbox_keeps_it() {
    let from = sender_mailbox("Prashanth, Dev", "site@example.com").unwrap();

    assert_eq!(from.name.as_deref(), Some("Prashanth, Dev"));
    assert_eq!(from.email.to_string(), "site@example.com");

    let message = contact_message(&from, &mailbox("owner@example.com"), &contact("jane@x.com"))
        .unwrap();
    let rendered = String::from_utf8(message.formatted()).unwrap();
    assert_that!(rendered.as_str(), contains_substring("\"Prashanth, Dev\" <site@example.com>"));
}

#[test]
fn when_sender_email_invalid_then_address_error() {
    let result = sender_mailbox("Portfolio", "not-an-email");

    assert!(matches!(result, Err(NotificationError::Address { .. })));
}
