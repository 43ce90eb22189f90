//! Study tools and AI helper payloads

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReferenceQuery {
    pub reference: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationQuery {
    pub user_id: String,
    /// Book or theme the suggestions are based on (defaults to "Psalms")
    pub based_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Recommendation {
    pub reference: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CrossReferences {
    pub reference: String,
    pub cross_references: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Commentary {
    pub reference: String,
    pub commentary: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Places {
    pub reference: String,
    pub places: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Timeline {
    pub reference: String,
    pub events: Vec<String>,
}

/// Input shared by the AI helpers
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct AiRequest {
    pub reference: Option<String>,
    pub chapter: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Explanation {
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Summary {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Devotional {
    pub devotional: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Prayer {
    pub prayer: String,
}
