//! Reader annotations: highlights, bookmarks, notes and verse playlists

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Collection;

fn default_color() -> String {
    "yellow".to_string()
}

/// Highlighted verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Highlight {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    /// Bible reference like "John 3:16"
    #[validate(length(min = 1, message = "must not be empty"))]
    pub reference: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub translation: String,
    #[serde(default = "default_color")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub color: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl Collection for Highlight {
    const NAME: &'static str = "highlight";
}

/// Bookmarked verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Bookmark {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub reference: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub translation: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Collection for Bookmark {
    const NAME: &'static str = "bookmark";
}

/// Free-text note attached to a verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Note {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub reference: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub translation: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

impl Collection for Note {
    const NAME: &'static str = "note";
}

/// Ordered list of references grouped under a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct VersePlaylist {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl Collection for VersePlaylist {
    const NAME: &'static str = "verseplaylist";
}
