//! Document store gateway
//!
//! User data lives in schema-less documents grouped by collection name. The
//! [`DocumentStore`] trait is the only seam the services see; Postgres backs
//! it in production and [`memory::MemoryStore`] in tests and local runs.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Collection, Record},
};

pub type JsonMap = Map<String, Value>;

/// A document as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub data: JsonMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Project into the client-facing record shape.
    ///
    /// The id becomes a string and any field `T` does not declare is dropped.
    pub fn project<T: Collection>(self) -> AppResult<Record<T>> {
        let data = serde_json::from_value(Value::Object(self.data)).map_err(|e| {
            AppError::Internal(format!("Malformed {} document {}: {}", T::NAME, self.id, e))
        })?;

        Ok(Record {
            id: self.id.to_string(),
            data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Exact-match filter on top-level document fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter(JsonMap);

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`
    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Require `field` to equal `value` when a value is given
    pub fn where_eq_opt(self, field: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.where_eq(field, value),
            None => self,
        }
    }

    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }

    /// Whether a document's fields satisfy every condition
    pub fn matches(&self, data: &JsonMap) -> bool {
        self.0.iter().all(|(field, value)| data.get(field) == Some(value))
    }
}

/// Storage operations available to the services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append a document to `collection` and return its new id
    async fn create_document(&self, collection: &str, data: JsonMap) -> AppResult<Uuid>;

    /// Documents of `collection` matching `filter`, in insertion order
    async fn get_documents(
        &self,
        collection: &str,
        filter: &DocumentFilter,
    ) -> AppResult<Vec<StoredDocument>>;

    /// Names of collections holding at least one document
    async fn list_collections(&self) -> AppResult<Vec<String>>;
}
