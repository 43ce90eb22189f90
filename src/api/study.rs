//! Study tool endpoints

use axum::{extract::State, Json};

use crate::{
    models::study::{
        Commentary, CrossReferences, Places, Recommendation, RecommendationQuery, ReferenceQuery,
        Timeline,
    },
    AppState,
};

use super::ValidatedQuery;

/// Suggested verses for a user
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "study",
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Suggestions", body = Vec<Recommendation>)
    )
)]
pub async fn recommendations(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RecommendationQuery>,
) -> Json<Vec<Recommendation>> {
    let based_on = query.based_on.as_deref().unwrap_or("Psalms");
    Json(state.services.study.recommendations(based_on))
}

#[utoipa::path(
    get,
    path = "/api/crossrefs",
    tag = "study",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Cross references", body = CrossReferences)
    )
)]
pub async fn cross_references(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReferenceQuery>,
) -> Json<CrossReferences> {
    Json(state.services.study.cross_references(&query.reference))
}

#[utoipa::path(
    get,
    path = "/api/commentary",
    tag = "study",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Commentary", body = Commentary)
    )
)]
pub async fn commentary(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReferenceQuery>,
) -> Json<Commentary> {
    Json(state.services.study.commentary(&query.reference))
}

#[utoipa::path(
    get,
    path = "/api/maps",
    tag = "study",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Places mentioned", body = Places)
    )
)]
pub async fn maps(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReferenceQuery>,
) -> Json<Places> {
    Json(state.services.study.places(&query.reference))
}

#[utoipa::path(
    get,
    path = "/api/timelines",
    tag = "study",
    params(ReferenceQuery),
    responses(
        (status = 200, description = "Related events", body = Timeline)
    )
)]
pub async fn timelines(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReferenceQuery>,
) -> Json<Timeline> {
    Json(state.services.study.timeline(&query.reference))
}
