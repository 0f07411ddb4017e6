use crate::{Database, Result as DbErrorResult, SPONSORS_COLLECTION, SponsorDocument};

use folio_core::{NewSponsor, Sponsor};

pub struct SponsorRepository {
    db: Database,
}

impl SponsorRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Sponsor>> {
        let documents = self
            .db
            .find_all::<SponsorDocument>(SPONSORS_COLLECTION)
            .await?;

        Ok(documents.into_iter().map(Sponsor::from).collect())
    }

    pub async fn create(&self, input: NewSponsor) -> DbErrorResult<Sponsor> {
        let document = SponsorDocument::new(input);
        self.db.insert_one(SPONSORS_COLLECTION, &document).await?;

        Ok(document.into())
    }
}
