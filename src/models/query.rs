//! Query parameters for user data listings

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Filter records by owner
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
}

/// Filter notes by owner and, optionally, reference
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NoteQuery {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    pub reference: Option<String>,
}

/// Filter reading progress by owner and, optionally, plan
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgressQuery {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    pub plan_id: Option<String>,
}
