use std::sync::Arc;

use tracing::debug;

use shared_config::AppConfig;

use crate::models::{HealthCheckResponse, HealthStatus};

pub struct HealthMonitorService {
    config: Arc<AppConfig>,
}

impl HealthMonitorService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// The process answering is the whole check; there are no backing services.
    pub fn check(&self) -> HealthCheckResponse {
        debug!("Health check");
        HealthCheckResponse {
            status: HealthStatus::Ok,
            timestamp: chrono::Utc::now(),
            server: self.config.server_name.clone(),
        }
    }
}
