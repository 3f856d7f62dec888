use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::services::RecommendationSettings;

/// Shared application state
///
/// The catalog is frozen after startup, so handlers share it without a lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub settings: RecommendationSettings,
}

impl AppState {
    pub fn new(catalog: CatalogStore, settings: RecommendationSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings,
        }
    }
}
