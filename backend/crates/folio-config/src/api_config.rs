use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Expose `POST /api/seed`
    pub seed_enabled: bool,
}
