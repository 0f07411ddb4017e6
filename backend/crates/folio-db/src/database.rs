//! Process-wide database handle.
//!
//! Established once at startup and handed to the storage layer. When no
//! connection string is configured, or it cannot be parsed, the handle is
//! [`Database::Unavailable`] and the server keeps running in degraded mode.

use crate::{DbError, MemoryDatabase, Result as DbErrorResult};

use std::time::Duration;

use bson::{Document, doc};
use futures::TryStreamExt;
use log::{error, info, warn};
use mongodb::Client;
use mongodb::options::FindOptions;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Upper bound on the startup ping
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on the ping behind health and readiness checks
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    database: mongodb::Database,
}

impl MongoDatabase {
    pub fn name(&self) -> &str {
        self.database.name()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub enum Database {
    Mongo(MongoDatabase),
    Memory(MemoryDatabase),
    Unavailable,
}

/// Reported by `/api/debug` and the readiness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
    Memory,
    Unavailable,
}

impl DatabaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Memory => "memory",
            Self::Unavailable => "unavailable",
        }
    }

    /// Whether requests can currently be served from storage
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Connected | Self::Memory)
    }
}

impl Database {
    /// Connect to MongoDB, or fall back to degraded mode.
    ///
    /// The URI's own database name wins over `default_name`. A failed ping
    /// is logged and the driver handle is kept so it can recover later.
    pub async fn connect(uri: Option<&str>, default_name: &str) -> Self {
        let Some(uri) = uri.map(str::trim).filter(|uri| !uri.is_empty()) else {
            warn!("MONGODB_URI is not set; database operations will be unavailable");
            return Self::Unavailable;
        };

        let client = match Client::with_uri_str(uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to parse MongoDB connection string: {}", e);
                warn!("Continuing without database");
                return Self::Unavailable;
            }
        };

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(default_name));
        let mongo = MongoDatabase { client, database };

        match tokio::time::timeout(CONNECT_TIMEOUT, mongo.ping()).await {
            Ok(Ok(())) => info!("Connected to MongoDB database '{}'", mongo.name()),
            Ok(Err(e)) => warn!(
                "MongoDB ping failed for database '{}': {}",
                mongo.name(),
                e
            ),
            Err(_) => warn!(
                "MongoDB ping timed out after {:?} for database '{}'",
                CONNECT_TIMEOUT,
                mongo.name()
            ),
        }

        Self::Mongo(mongo)
    }

    pub fn in_memory() -> Self {
        Self::Memory(MemoryDatabase::new())
    }

    pub fn unavailable() -> Self {
        Self::Unavailable
    }

    pub async fn status(&self) -> DatabaseStatus {
        match self {
            Self::Mongo(mongo) => match tokio::time::timeout(STATUS_TIMEOUT, mongo.ping()).await {
                Ok(Ok(())) => DatabaseStatus::Connected,
                Ok(Err(e)) => {
                    warn!("MongoDB ping failed: {}", e);
                    DatabaseStatus::Disconnected
                }
                Err(_) => {
                    warn!("MongoDB ping timed out after {:?}", STATUS_TIMEOUT);
                    DatabaseStatus::Disconnected
                }
            },
            Self::Memory(_) => DatabaseStatus::Memory,
            Self::Unavailable => DatabaseStatus::Unavailable,
        }
    }

    /// Shut the driver down; a no-op for the other variants
    pub async fn close(self) {
        if let Self::Mongo(mongo) = self {
            info!("Closing MongoDB connection");
            mongo.client.shutdown().await;
        }
    }

    pub(crate) async fn find_all<D>(&self, collection: &str) -> DbErrorResult<Vec<D>>
    where
        D: DeserializeOwned + Unpin + Send + Sync,
    {
        match self {
            Self::Mongo(mongo) => {
                let options = FindOptions::builder()
                    .sort(doc! { "createdAt": -1, "_id": -1 })
                    .build();
                let cursor = mongo
                    .database
                    .collection::<D>(collection)
                    .find(None, options)
                    .await?;
                let documents: Vec<D> = cursor.try_collect().await?;
                Ok(documents)
            }
            Self::Memory(memory) => memory
                .find_newest_first(collection)
                .await
                .into_iter()
                .map(|document| Ok(bson::from_document::<D>(document)?))
                .collect(),
            Self::Unavailable => Err(unavailable()),
        }
    }

    pub(crate) async fn insert_one<D>(&self, collection: &str, document: &D) -> DbErrorResult<()>
    where
        D: Serialize + Send + Sync,
    {
        match self {
            Self::Mongo(mongo) => {
                mongo
                    .database
                    .collection::<D>(collection)
                    .insert_one(document, None)
                    .await?;
                Ok(())
            }
            Self::Memory(memory) => {
                memory
                    .insert_many(collection, vec![bson::to_document(document)?])
                    .await;
                Ok(())
            }
            Self::Unavailable => Err(unavailable()),
        }
    }

    pub(crate) async fn insert_many<D>(
        &self,
        collection: &str,
        documents: &[D],
    ) -> DbErrorResult<()>
    where
        D: Serialize + Send + Sync,
    {
        if documents.is_empty() {
            return Ok(());
        }

        match self {
            Self::Mongo(mongo) => {
                mongo
                    .database
                    .collection::<D>(collection)
                    .insert_many(documents, None)
                    .await?;
                Ok(())
            }
            Self::Memory(memory) => {
                let encoded = documents
                    .iter()
                    .map(|document| bson::to_document(document))
                    .collect::<Result<Vec<Document>, _>>()?;
                memory.insert_many(collection, encoded).await;
                Ok(())
            }
            Self::Unavailable => Err(unavailable()),
        }
    }

    pub(crate) async fn count(&self, collection: &str) -> DbErrorResult<u64> {
        match self {
            Self::Mongo(mongo) => Ok(mongo
                .database
                .collection::<Document>(collection)
                .count_documents(None, None)
                .await?),
            Self::Memory(memory) => Ok(memory.count(collection).await),
            Self::Unavailable => Err(unavailable()),
        }
    }
}

#[track_caller]
fn unavailable() -> DbError {
    DbError::unavailable("no database connection configured")
}
