//! Reading plans and progress through them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Collection;

/// Reading plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Plan {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
    /// Day label to references, in plan order
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub schedule: Option<IndexMap<String, Vec<String>>>,
}

impl Collection for Plan {
    const NAME: &'static str = "plan";
}

/// Progress through a reference, optionally inside a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReadingProgress {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[serde(default)]
    pub plan_id: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub reference: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub percentage: f64,
}

impl Collection for ReadingProgress {
    const NAME: &'static str = "readingprogress";
}
