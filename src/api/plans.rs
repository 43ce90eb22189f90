//! Reading plan and progress endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{
        query::{ProgressQuery, UserQuery},
        CreatedResponse, Plan, ReadingProgress, Record,
    },
    services::user_data::owned_by,
    AppState,
};

use super::{ValidatedJson, ValidatedQuery};

/// Create a reading plan
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = "plans",
    request_body = Plan,
    responses(
        (status = 200, description = "Plan created", body = CreatedResponse),
        (status = 422, description = "Invalid plan", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_plan(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<Plan>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's reading plans
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = "plans",
    params(UserQuery),
    responses(
        (status = 200, description = "Plans, oldest first", body = Vec<PlanRecord>)
    )
)]
pub async fn list_plans(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Json<Vec<Record<Plan>>>> {
    let plans = state.services.user_data.list(&owned_by(&query.user_id)).await?;
    Ok(Json(plans))
}

/// Record reading progress
#[utoipa::path(
    post,
    path = "/api/progress",
    tag = "plans",
    request_body = ReadingProgress,
    responses(
        (status = 200, description = "Progress recorded", body = CreatedResponse),
        (status = 422, description = "Invalid progress entry", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_progress(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<ReadingProgress>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's progress entries, optionally for one plan
#[utoipa::path(
    get,
    path = "/api/progress",
    tag = "plans",
    params(ProgressQuery),
    responses(
        (status = 200, description = "Progress entries, oldest first", body = Vec<ReadingProgressRecord>)
    )
)]
pub async fn list_progress(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ProgressQuery>,
) -> AppResult<Json<Vec<Record<ReadingProgress>>>> {
    let filter = owned_by(&query.user_id).where_eq_opt("plan_id", query.plan_id);
    let progress = state.services.user_data.list(&filter).await?;
    Ok(Json(progress))
}
