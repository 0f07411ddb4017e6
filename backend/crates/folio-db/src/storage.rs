//! Storage facade used by the API layer.
//!
//! Reads never fail: a storage fault is logged and reported as an empty
//! list. Writes surface the [`DbError`](crate::DbError) so the caller can
//! answer with a server error.

use crate::{
    ContactRepository, Database, DatabaseStatus, ProjectRepository, Result as DbErrorResult,
    SponsorRepository,
};

use folio_core::{Contact, NewContact, NewProject, NewSponsor, Project, Sponsor};

use log::{error, info};

#[derive(Clone)]
pub struct Storage {
    db: Database,
}

impl Storage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn list_projects(&self) -> Vec<Project> {
        ProjectRepository::new(self.db.clone())
            .find_all()
            .await
            .unwrap_or_else(|e| {
                error!("Error fetching projects: {}", e);
                Vec::new()
            })
    }

    pub async fn create_project(&self, input: NewProject) -> DbErrorResult<Project> {
        ProjectRepository::new(self.db.clone()).create(input).await
    }

    pub async fn list_contacts(&self) -> Vec<Contact> {
        ContactRepository::new(self.db.clone())
            .find_all()
            .await
            .unwrap_or_else(|e| {
                error!("Error fetching contacts: {}", e);
                Vec::new()
            })
    }

    pub async fn create_contact(&self, input: NewContact) -> DbErrorResult<Contact> {
        ContactRepository::new(self.db.clone()).create(input).await
    }

    pub async fn list_sponsors(&self) -> Vec<Sponsor> {
        SponsorRepository::new(self.db.clone())
            .find_all()
            .await
            .unwrap_or_else(|e| {
                error!("Error fetching sponsors: {}", e);
                Vec::new()
            })
    }

    pub async fn create_sponsor(&self, input: NewSponsor) -> DbErrorResult<Sponsor> {
        SponsorRepository::new(self.db.clone()).create(input).await
    }

    /// Insert `projects` only if the collection is empty.
    /// Returns how many were inserted.
    pub async fn seed_projects(&self, projects: Vec<NewProject>) -> DbErrorResult<usize> {
        let repo = ProjectRepository::new(self.db.clone());

        let existing = repo.count().await?;
        if existing > 0 {
            info!("Skipping project seed: {} projects already stored", existing);
            return Ok(0);
        }

        let inserted = repo.create_many(projects).await?;
        info!("Seeded {} projects", inserted.len());
        Ok(inserted.len())
    }

    pub async fn status(&self) -> DatabaseStatus {
        self.db.status().await
    }
}
