pub mod database;
pub mod documents;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod storage;

#[cfg(test)]
mod tests;

pub use database::{Database, DatabaseStatus, MongoDatabase};
pub use documents::contact_document::ContactDocument;
pub use documents::project_document::ProjectDocument;
pub use documents::sponsor_document::SponsorDocument;
pub use error::{DbError, Result};
pub use memory::MemoryDatabase;
pub use repositories::contact_repository::ContactRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sponsor_repository::SponsorRepository;
pub use storage::Storage;

/// Collection names, matching what the site has always written to
pub const PROJECTS_COLLECTION: &str = "projects";
pub const CONTACTS_COLLECTION: &str = "contacts";
pub const SPONSORS_COLLECTION: &str = "sponsors";
