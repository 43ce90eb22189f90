//! Business logic services

pub mod scripture;
pub mod study;
pub mod user_data;

use std::sync::Arc;

use crate::{bible, config::BibleConfig, repository::DocumentStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub scripture: scripture::ScriptureService,
    pub user_data: user_data::UserDataService,
    pub study: study::StudyService,
}

impl Services {
    /// Create all services over the given document store
    pub fn new(store: Arc<dyn DocumentStore>, bible_config: BibleConfig) -> Self {
        Self {
            scripture: scripture::ScriptureService::new(bible::sample(), bible_config),
            user_data: user_data::UserDataService::new(store),
            study: study::StudyService::new(),
        }
    }
}
