//! Reader profile endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{query::UserQuery, CreatedResponse, Record, UserProfile},
    services::user_data::owned_by,
    AppState,
};

use super::{ValidatedJson, ValidatedQuery};

/// Create a profile
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = "profiles",
    request_body = UserProfile,
    responses(
        (status = 200, description = "Profile created", body = CreatedResponse),
        (status = 422, description = "Invalid profile", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<UserProfile>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// Get the most recently created profile of a user
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "profiles",
    params(UserQuery),
    responses(
        (status = 200, description = "Profile", body = crate::models::UserProfileRecord),
        (status = 404, description = "No profile for this user", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Json<Record<UserProfile>>> {
    let profile = state.services.user_data.latest(&owned_by(&query.user_id)).await?;
    Ok(Json(profile))
}
