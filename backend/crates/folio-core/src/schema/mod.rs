//! Creation payloads and their validation.
//!
//! Payload fields are all optional at the wire level so that a missing
//! field surfaces as a per-field issue rather than a deserialization failure.

pub mod contact_payload;
pub mod project_payload;
pub mod sponsor_payload;
mod rules;
