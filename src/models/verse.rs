//! Verse lookup, search and audio types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for a single verse
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerseQuery {
    /// Bible reference like "John 3:16"
    pub reference: String,
    /// Translation (defaults to the configured one)
    pub translation: Option<String>,
}

/// A single verse
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Verse {
    pub reference: String,
    pub translation: String,
    pub text: String,
}

/// Query parameters for a parallel lookup
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParallelQuery {
    pub reference: String,
    /// Comma-separated translations, e.g. "ESV,NIV"
    pub translations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ParallelItem {
    pub translation: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParallelResponse {
    pub reference: String,
    pub items: Vec<ParallelItem>,
}

/// Search request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SearchQuery {
    /// Text to look for, case-insensitive
    pub q: String,
    pub translation: Option<String>,
    /// Accepted for compatibility; the sample set is English only
    pub language: Option<String>,
    /// Maximum number of hits
    pub limit: Option<usize>,
}

/// Search driven by a speech transcript
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VoiceSearchQuery {
    pub transcript: String,
    pub translation: Option<String>,
}

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchHit {
    pub reference: String,
    pub translation: String,
    /// First 160 characters of the verse
    pub snippet: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AudioQuery {
    pub reference: String,
    pub translation: Option<String>,
}

/// Audio link and word timings for a verse
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AudioResponse {
    pub reference: String,
    pub translation: String,
    pub audio_url: String,
    /// Word start offsets in seconds
    pub timings: Vec<f64>,
}
