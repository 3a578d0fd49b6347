use std::sync::Arc;

use shared_config::AppConfig;

use crate::store::MemoryStore;

/// Shared by every cell router.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<MemoryStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: MemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Fresh seeded store, default configuration.
    pub fn seeded() -> Self {
        Self::new(AppConfig::default(), MemoryStore::seeded())
    }
}
