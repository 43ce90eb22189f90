//! Liveness and store status endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ServiceStatus {
    pub service: String,
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Document store connectivity report
#[derive(Serialize, ToSchema)]
pub struct StoreStatus {
    pub backend: String,
    /// `connected` or `not_connected`
    pub database: String,
    /// Collections holding at least one document
    pub collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_error: Option<String>,
}

/// Liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatus)
    )
)]
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: "Bible Backend".to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Store connectivity check; failures are reported in the body, never raised
#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Store status", body = StoreStatus)
    )
)]
pub async fn store_status(State(state): State<AppState>) -> Json<StoreStatus> {
    let (database, collections, database_error) =
        match state.services.user_data.collections().await {
            Ok(collections) => ("connected", collections, None),
            Err(e) => {
                tracing::warn!("Document store check failed: {}", e);
                ("not_connected", Vec::new(), Some(e.to_string()))
            }
        };

    Json(StoreStatus {
        backend: "running".to_string(),
        database: database.to_string(),
        collections,
        database_error,
    })
}
