//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{ai, annotations, health, plans, profiles, study, verses};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bible API",
        version = "0.1.0",
        description = "Bible text lookup, search and reader annotations"
    ),
    paths(
        // Health
        health::root,
        health::store_status,
        // Bible text
        verses::list_translations,
        verses::list_languages,
        verses::get_verse,
        verses::get_parallel,
        verses::search,
        verses::voice_search,
        verses::get_audio,
        // Annotations
        annotations::create_highlight,
        annotations::list_highlights,
        annotations::create_bookmark,
        annotations::list_bookmarks,
        annotations::create_note,
        annotations::list_notes,
        annotations::create_playlist,
        annotations::list_playlists,
        // Profiles and plans
        profiles::create_profile,
        profiles::get_profile,
        plans::create_plan,
        plans::list_plans,
        plans::create_progress,
        plans::list_progress,
        // Study
        study::recommendations,
        study::cross_references,
        study::commentary,
        study::maps,
        study::timelines,
        // AI
        ai::explain,
        ai::summary,
        ai::devotional,
        ai::prayer,
    ),
    components(
        schemas(
            // Bible text
            crate::models::verse::Verse,
            crate::models::verse::ParallelItem,
            crate::models::verse::ParallelResponse,
            crate::models::verse::SearchQuery,
            crate::models::verse::VoiceSearchQuery,
            crate::models::verse::SearchHit,
            crate::models::verse::AudioResponse,
            // User data
            crate::models::Highlight,
            crate::models::Bookmark,
            crate::models::Note,
            crate::models::VersePlaylist,
            crate::models::UserProfile,
            crate::models::Plan,
            crate::models::ReadingProgress,
            crate::models::CreatedResponse,
            crate::models::HighlightRecord,
            crate::models::BookmarkRecord,
            crate::models::NoteRecord,
            crate::models::VersePlaylistRecord,
            crate::models::UserProfileRecord,
            crate::models::PlanRecord,
            crate::models::ReadingProgressRecord,
            // Study
            crate::models::study::Recommendation,
            crate::models::study::CrossReferences,
            crate::models::study::Commentary,
            crate::models::study::Places,
            crate::models::study::Timeline,
            crate::models::study::AiRequest,
            crate::models::study::Explanation,
            crate::models::study::Summary,
            crate::models::study::Devotional,
            crate::models::study::Prayer,
            // Health
            health::ServiceStatus,
            health::StoreStatus,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and store status"),
        (name = "bible", description = "Verse lookup and search"),
        (name = "annotations", description = "Highlights, bookmarks, notes and playlists"),
        (name = "profiles", description = "Reader profiles"),
        (name = "plans", description = "Reading plans and progress"),
        (name = "study", description = "Study tools"),
        (name = "ai", description = "AI helpers")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/test", "/api/verse", "/api/notes", "/api/ai/prayer"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_record_schemas_carry_store_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let record = &doc["components"]["schemas"]["HighlightRecord"]["allOf"];
        let parts = record.as_array().expect("record schema is allOf");
        assert!(parts
            .iter()
            .any(|part| part["$ref"] == "#/components/schemas/Highlight"));
        let fields = parts
            .iter()
            .find(|part| part.get("properties").is_some())
            .expect("record schema has own properties");
        for field in ["id", "created_at", "updated_at"] {
            assert!(fields["properties"].get(field).is_some(), "missing {}", field);
        }

        let listed = &doc["paths"]["/api/highlights"]["get"]["responses"]["200"]["content"]
            ["application/json"]["schema"]["items"]["$ref"];
        assert_eq!(listed, "#/components/schemas/HighlightRecord");
    }
}
