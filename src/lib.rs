//! Bible Server
//!
//! REST JSON API for Bible verse lookup and search, plus reader highlights,
//! bookmarks, notes, playlists and reading plans kept in a document store.

use std::sync::Arc;

pub mod api;
pub mod bible;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::DocumentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store, config.bible)),
        }
    }
}
