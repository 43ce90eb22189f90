//! In-process document store for tests and local development

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DocumentFilter, DocumentStore, JsonMap, StoredDocument};
use crate::error::AppResult;

/// Collections keyed by name; documents kept in insertion order.
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<IndexMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, data: JsonMap) -> AppResult<Uuid> {
        let now = Utc::now();
        let document = StoredDocument {
            id: Uuid::new_v4(),
            data,
            created_at: now,
            updated_at: now,
        };
        let id = document.id;

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
    ) -> AppResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        let documents: Vec<StoredDocument> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(&document.data))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn list_collections(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
