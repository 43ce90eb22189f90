//! Create and list reader data through the document store

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Collection, Record},
    repository::{DocumentFilter, DocumentStore},
};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct UserDataService {
    store: Arc<dyn DocumentStore>,
}

impl UserDataService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validate a record and store it in its collection
    pub async fn create<T: Collection>(&self, record: &T) -> AppResult<Uuid> {
        record.validate()?;

        let data = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(AppError::Internal(format!(
                    "{} did not serialize to an object",
                    T::NAME
                )))
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        };

        let id = self.store.create_document(T::NAME, data).await?;
        tracing::info!("Created {} document {}", T::NAME, id);
        Ok(id)
    }

    /// Records of `T` matching `filter`, oldest first
    pub async fn list<T: Collection>(&self, filter: &DocumentFilter) -> AppResult<Vec<Record<T>>> {
        self.store
            .get_documents(T::NAME, filter)
            .await?
            .into_iter()
            .map(|document| document.project())
            .collect()
    }

    /// Most recently created record of `T` matching `filter`
    pub async fn latest<T: Collection>(&self, filter: &DocumentFilter) -> AppResult<Record<T>> {
        self.list(filter)
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("No {} found", T::NAME)))
    }

    /// Collection names currently present in the store
    pub async fn collections(&self) -> AppResult<Vec<String>> {
        self.store.list_collections().await
    }
}

/// Owner filter used by every listing
pub fn owned_by(user_id: &str) -> DocumentFilter {
    DocumentFilter::new().where_eq("user_id", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Highlight, ReadingProgress},
        repository::{memory::MemoryStore, MockDocumentStore},
    };

    fn highlight(user_id: &str, reference: &str) -> Highlight {
        Highlight {
            user_id: user_id.into(),
            reference: reference.into(),
            translation: "ESV".into(),
            color: "yellow".into(),
            note: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let service = UserDataService::new(Arc::new(MemoryStore::new()));
        let id = service.create(&highlight("u1", "John 3:16")).await.unwrap();
        service.create(&highlight("u2", "John 3:16")).await.unwrap();

        let records = service.list::<Highlight>(&owned_by("u1")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id.to_string());
        assert_eq!(records[0].data, highlight("u1", "John 3:16"));
    }

    #[tokio::test]
    async fn test_invalid_record_is_not_stored() {
        let mut store = MockDocumentStore::new();
        store.expect_create_document().never();
        let service = UserDataService::new(Arc::new(store));

        let result = service.create(&highlight("u1", "")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_out_of_range_percentage() {
        let service = UserDataService::new(Arc::new(MemoryStore::new()));
        let progress = ReadingProgress {
            user_id: "u1".into(),
            plan_id: None,
            reference: "John 3:16".into(),
            percentage: 120.0,
        };
        let result = service.create(&progress).await;
        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("percentage")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_returns_newest() {
        let service = UserDataService::new(Arc::new(MemoryStore::new()));
        service.create(&highlight("u1", "John 3:16")).await.unwrap();
        let newest = service.create(&highlight("u1", "Psalm 23:1")).await.unwrap();

        let record = service.latest::<Highlight>(&owned_by("u1")).await.unwrap();
        assert_eq!(record.id, newest.to_string());

        let missing = service.latest::<Highlight>(&owned_by("nobody")).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get_documents()
            .returning(|_, _| Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut)));
        let service = UserDataService::new(Arc::new(store));

        let result = service.list::<Highlight>(&owned_by("u1")).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
