//! AI helper endpoints (templated text)

use axum::{extract::State, Json};

use crate::{
    models::study::{AiRequest, Devotional, Explanation, Prayer, Summary},
    AppState,
};

use super::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/ai/explain",
    tag = "ai",
    request_body = AiRequest,
    responses(
        (status = 200, description = "Explanation", body = Explanation)
    )
)]
pub async fn explain(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AiRequest>,
) -> Json<Explanation> {
    Json(state.services.study.explain(&request))
}

#[utoipa::path(
    post,
    path = "/api/ai/summary",
    tag = "ai",
    request_body = AiRequest,
    responses(
        (status = 200, description = "Summary", body = Summary)
    )
)]
pub async fn summary(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AiRequest>,
) -> Json<Summary> {
    Json(state.services.study.summarize(&request))
}

#[utoipa::path(
    post,
    path = "/api/ai/devotional",
    tag = "ai",
    request_body = AiRequest,
    responses(
        (status = 200, description = "Devotional", body = Devotional)
    )
)]
pub async fn devotional(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AiRequest>,
) -> Json<Devotional> {
    Json(state.services.study.devotional(&request))
}

#[utoipa::path(
    post,
    path = "/api/ai/prayer",
    tag = "ai",
    request_body = AiRequest,
    responses(
        (status = 200, description = "Prayer prompt", body = Prayer)
    )
)]
pub async fn prayer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AiRequest>,
) -> Json<Prayer> {
    Json(state.services.study.prayer(&request))
}
