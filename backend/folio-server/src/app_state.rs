use folio_config::{ApiConfig, CorsConfig};
use folio_db::Storage;
use folio_mailer::Notifier;

use std::sync::Arc;

/// Shared application state for the REST handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    /// Contact notifications; `None` when no mailer is configured
    pub notifier: Option<Arc<dyn Notifier>>,
    pub api_config: ApiConfig,
    pub cors_config: CorsConfig,
    /// Deployment name reported by `/api/debug`
    pub environment: String,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            notifier: None,
            api_config: ApiConfig::default(),
            cors_config: CorsConfig::default(),
            environment: String::from("development"),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_api_config(mut self, api_config: ApiConfig) -> Self {
        self.api_config = api_config;
        self
    }

    pub fn with_cors_config(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}
