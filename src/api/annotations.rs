//! Highlight, bookmark, note and playlist endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{
        query::{NoteQuery, UserQuery},
        Bookmark, CreatedResponse, Highlight, Note, Record, VersePlaylist,
    },
    services::user_data::owned_by,
    AppState,
};

use super::{ValidatedJson, ValidatedQuery};

/// Create a highlight
#[utoipa::path(
    post,
    path = "/api/highlights",
    tag = "annotations",
    request_body = Highlight,
    responses(
        (status = 200, description = "Highlight created", body = CreatedResponse),
        (status = 422, description = "Invalid highlight", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_highlight(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<Highlight>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's highlights
#[utoipa::path(
    get,
    path = "/api/highlights",
    tag = "annotations",
    params(UserQuery),
    responses(
        (status = 200, description = "Highlights, oldest first", body = Vec<HighlightRecord>)
    )
)]
pub async fn list_highlights(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Json<Vec<Record<Highlight>>>> {
    let highlights = state.services.user_data.list(&owned_by(&query.user_id)).await?;
    Ok(Json(highlights))
}

/// Create a bookmark
#[utoipa::path(
    post,
    path = "/api/bookmarks",
    tag = "annotations",
    request_body = Bookmark,
    responses(
        (status = 200, description = "Bookmark created", body = CreatedResponse),
        (status = 422, description = "Invalid bookmark", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<Bookmark>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's bookmarks
#[utoipa::path(
    get,
    path = "/api/bookmarks",
    tag = "annotations",
    params(UserQuery),
    responses(
        (status = 200, description = "Bookmarks, oldest first", body = Vec<BookmarkRecord>)
    )
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Json<Vec<Record<Bookmark>>>> {
    let bookmarks = state.services.user_data.list(&owned_by(&query.user_id)).await?;
    Ok(Json(bookmarks))
}

/// Create a note
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "annotations",
    request_body = Note,
    responses(
        (status = 200, description = "Note created", body = CreatedResponse),
        (status = 422, description = "Invalid note", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<Note>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's notes, optionally for one reference
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "annotations",
    params(NoteQuery),
    responses(
        (status = 200, description = "Notes, oldest first", body = Vec<NoteRecord>)
    )
)]
pub async fn list_notes(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<NoteQuery>,
) -> AppResult<Json<Vec<Record<Note>>>> {
    let filter = owned_by(&query.user_id)
        .where_eq_opt("reference", query.reference.filter(|r| !r.is_empty()));
    let notes = state.services.user_data.list(&filter).await?;
    Ok(Json(notes))
}

/// Create a verse playlist
#[utoipa::path(
    post,
    path = "/api/playlists",
    tag = "annotations",
    request_body = VersePlaylist,
    responses(
        (status = 200, description = "Playlist created", body = CreatedResponse),
        (status = 422, description = "Invalid playlist", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_playlist(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<VersePlaylist>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.user_data.create(&data).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List a user's playlists
#[utoipa::path(
    get,
    path = "/api/playlists",
    tag = "annotations",
    params(UserQuery),
    responses(
        (status = 200, description = "Playlists, oldest first", body = Vec<VersePlaylistRecord>)
    )
)]
pub async fn list_playlists(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> AppResult<Json<Vec<Record<VersePlaylist>>>> {
    let playlists = state.services.user_data.list(&owned_by(&query.user_id)).await?;
    Ok(Json(playlists))
}
