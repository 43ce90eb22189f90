//! Data models for the Bible server

pub mod annotation;
pub mod plan;
pub mod profile;
pub mod query;
pub mod study;
pub mod verse;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Re-export commonly used types
pub use annotation::{Bookmark, Highlight, Note, VersePlaylist};
pub use plan::{Plan, ReadingProgress};
pub use profile::UserProfile;

/// A record shape stored in its own document collection
pub trait Collection: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    /// Collection name in the document store
    const NAME: &'static str;
}

/// A stored record as returned to clients.
///
/// The store identifier is rendered as a plain string and timestamps as
/// RFC 3339 strings; no other storage field is exposed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    HighlightRecord = Record<Highlight>,
    BookmarkRecord = Record<Bookmark>,
    NoteRecord = Record<Note>,
    VersePlaylistRecord = Record<VersePlaylist>,
    UserProfileRecord = Record<UserProfile>,
    PlanRecord = Record<Plan>,
    ReadingProgressRecord = Record<ReadingProgress>
)]
pub struct Record<T> {
    /// Document store identifier
    pub id: String,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response to a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned by the document store
    pub id: String,
}
