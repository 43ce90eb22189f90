//! API handlers for the Bible server REST endpoints

pub mod ai;
pub mod annotations;
pub mod health;
pub mod openapi;
pub mod plans;
pub mod profiles;
pub mod study;
pub mod verses;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

/// JSON body extractor that runs `validator` checks.
///
/// Malformed bodies and failed checks both become [`AppError::Validation`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor that runs `validator` checks
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Bible text
        .route("/translations", get(verses::list_translations))
        .route("/languages", get(verses::list_languages))
        .route("/verse", get(verses::get_verse))
        .route("/parallel", get(verses::get_parallel))
        .route("/search", post(verses::search))
        .route("/voice-search", post(verses::voice_search))
        .route("/audio", get(verses::get_audio))
        // Reader annotations
        .route(
            "/highlights",
            get(annotations::list_highlights).post(annotations::create_highlight),
        )
        .route(
            "/bookmarks",
            get(annotations::list_bookmarks).post(annotations::create_bookmark),
        )
        .route(
            "/notes",
            get(annotations::list_notes).post(annotations::create_note),
        )
        .route(
            "/playlists",
            get(annotations::list_playlists).post(annotations::create_playlist),
        )
        // Profiles and reading plans
        .route(
            "/profiles",
            get(profiles::get_profile).post(profiles::create_profile),
        )
        .route("/plans", get(plans::list_plans).post(plans::create_plan))
        .route(
            "/progress",
            get(plans::list_progress).post(plans::create_progress),
        )
        // Study tools
        .route("/recommendations", get(study::recommendations))
        .route("/crossrefs", get(study::cross_references))
        .route("/commentary", get(study::commentary))
        .route("/maps", get(study::maps))
        .route("/timelines", get(study::timelines))
        // AI helpers
        .route("/ai/explain", post(ai::explain))
        .route("/ai/summary", post(ai::summary))
        .route("/ai/devotional", post(ai::devotional))
        .route("/ai/prayer", post(ai::prayer));

    Router::new()
        .route("/", get(health::root))
        .route("/test", get(health::store_status))
        .nest("/api", api)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
