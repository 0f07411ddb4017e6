use crate::{CONTACTS_COLLECTION, ContactDocument, Database, Result as DbErrorResult};

use folio_core::{Contact, NewContact};

pub struct ContactRepository {
    db: Database,
}

impl ContactRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Contact>> {
        let documents = self
            .db
            .find_all::<ContactDocument>(CONTACTS_COLLECTION)
            .await?;

        Ok(documents.into_iter().map(Contact::from).collect())
    }

    pub async fn create(&self, input: NewContact) -> DbErrorResult<Contact> {
        let document = ContactDocument::new(input);
        self.db.insert_one(CONTACTS_COLLECTION, &document).await?;

        Ok(document.into())
    }
}
