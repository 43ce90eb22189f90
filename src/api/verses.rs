//! Bible text endpoints: lookup, parallel, search and audio

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::verse::{
        AudioQuery, AudioResponse, ParallelQuery, ParallelResponse, SearchHit, SearchQuery, Verse,
        VerseQuery, VoiceSearchQuery,
    },
    AppState,
};

use super::{ValidatedJson, ValidatedQuery};

/// List available translations
#[utoipa::path(
    get,
    path = "/api/translations",
    tag = "bible",
    responses(
        (status = 200, description = "Translation codes", body = Vec<String>)
    )
)]
pub async fn list_translations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.scripture.translations())
}

/// List available languages
#[utoipa::path(
    get,
    path = "/api/languages",
    tag = "bible",
    responses(
        (status = 200, description = "Language codes", body = Vec<String>)
    )
)]
pub async fn list_languages(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.scripture.languages())
}

/// Get a single verse
#[utoipa::path(
    get,
    path = "/api/verse",
    tag = "bible",
    params(VerseQuery),
    responses(
        (status = 200, description = "Verse text", body = Verse),
        (status = 404, description = "Verse not in dataset", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_verse(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<VerseQuery>,
) -> AppResult<Json<Verse>> {
    let verse = state
        .services
        .scripture
        .verse(&query.reference, query.translation.as_deref())?;
    Ok(Json(verse))
}

/// Get one reference in several translations
#[utoipa::path(
    get,
    path = "/api/parallel",
    tag = "bible",
    params(ParallelQuery),
    responses(
        (status = 200, description = "Texts per translation", body = ParallelResponse),
        (status = 404, description = "Reference missing from every translation", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_parallel(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ParallelQuery>,
) -> AppResult<Json<ParallelResponse>> {
    let parallel = state
        .services
        .scripture
        .parallel(&query.reference, query.translations.as_deref())?;
    Ok(Json(parallel))
}

/// Substring search over verse text
#[utoipa::path(
    post,
    path = "/api/search",
    tag = "bible",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Matching verses", body = Vec<SearchHit>)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(query): ValidatedJson<SearchQuery>,
) -> Json<Vec<SearchHit>> {
    Json(state.services.scripture.search(&query))
}

/// Search using a speech transcript
#[utoipa::path(
    post,
    path = "/api/voice-search",
    tag = "bible",
    request_body = VoiceSearchQuery,
    responses(
        (status = 200, description = "Matching verses", body = Vec<SearchHit>)
    )
)]
pub async fn voice_search(
    State(state): State<AppState>,
    ValidatedJson(query): ValidatedJson<VoiceSearchQuery>,
) -> Json<Vec<SearchHit>> {
    Json(state.services.scripture.voice_search(&query))
}

/// Audio link and word timings for a verse
#[utoipa::path(
    get,
    path = "/api/audio",
    tag = "bible",
    params(AudioQuery),
    responses(
        (status = 200, description = "Audio details", body = AudioResponse)
    )
)]
pub async fn get_audio(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AudioQuery>,
) -> Json<AudioResponse> {
    Json(
        state
            .services
            .scripture
            .audio(&query.reference, query.translation.as_deref()),
    )
}
