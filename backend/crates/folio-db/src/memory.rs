//! In-process document store.
//!
//! Holds BSON documents per collection name so records go through the same
//! encoding as they would against MongoDB. Used by tests and local runs
//! without a database server.

use std::collections::HashMap;
use std::sync::Arc;

use bson::Document;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryDatabase {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn insert_many(&self, collection: &str, documents: Vec<Document>) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
    }

    /// Newest `createdAt` first; equal timestamps come back latest insert first
    pub(crate) async fn find_newest_first(&self, collection: &str) -> Vec<Document> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Vec::new();
        };

        let mut found: Vec<Document> = documents.iter().rev().cloned().collect();
        // Stable sort keeps the reversed insertion order for ties
        found.sort_by(|a, b| {
            let a = a.get_datetime("createdAt").ok();
            let b = b.get_datetime("createdAt").ok();
            b.cmp(&a)
        });
        found
    }

    pub(crate) async fn count(&self, collection: &str) -> u64 {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .map_or(0, |documents| documents.len() as u64)
    }
}
