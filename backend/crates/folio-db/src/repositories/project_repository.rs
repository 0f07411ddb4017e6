use crate::{Database, PROJECTS_COLLECTION, ProjectDocument, Result as DbErrorResult};

use folio_core::{NewProject, Project};

pub struct ProjectRepository {
    db: Database,
}

impl ProjectRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All projects, newest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let documents = self
            .db
            .find_all::<ProjectDocument>(PROJECTS_COLLECTION)
            .await?;

        Ok(documents.into_iter().map(Project::from).collect())
    }

    pub async fn create(&self, input: NewProject) -> DbErrorResult<Project> {
        let document = ProjectDocument::new(input);
        self.db.insert_one(PROJECTS_COLLECTION, &document).await?;

        Ok(document.into())
    }

    /// Insert several projects in one round trip.
    ///
    /// `find_all` lists the batch in the given order: identities are assigned
    /// last input first, so the first input carries the newest `createdAt`
    /// and `_id`.
    pub async fn create_many(&self, inputs: Vec<NewProject>) -> DbErrorResult<Vec<Project>> {
        let mut documents: Vec<ProjectDocument> =
            inputs.into_iter().rev().map(ProjectDocument::new).collect();
        self.db.insert_many(PROJECTS_COLLECTION, &documents).await?;

        documents.reverse();
        Ok(documents.into_iter().map(Project::from).collect())
    }

    pub async fn count(&self) -> DbErrorResult<u64> {
        self.db.count(PROJECTS_COLLECTION).await
    }
}
