pub mod error;
pub mod models;
pub mod schema;


pub use error::{FieldIssue, ValidationError};
pub use models::contact::{Contact, NewContact};
pub use models::project::{NewProject, Project};
pub use models::sponsor::{NewSponsor, Sponsor};
pub use schema::contact_payload::{ContactPayload, validate_contact_input};
pub use schema::project_payload::{ProjectPayload, validate_project_input};
pub use schema::sponsor_payload::{SponsorPayload, validate_sponsor_input};

pub use error_location::ErrorLocation;
