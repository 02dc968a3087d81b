use crate::api::PropertiesApi;
use crate::config::AppConfig;
use std::sync::Arc;

/// Shared, read-only handles every request needs.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PropertiesApi>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(api: Arc<dyn PropertiesApi>, config: AppConfig) -> Self {
        Self { api, config }
    }
}
