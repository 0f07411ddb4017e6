use crate::DEFAULT_DATABASE_NAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string; unset means degraded mode
    pub uri: Option<String>,
    /// Used when the connection string names no database
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: None,
            name: String::from(DEFAULT_DATABASE_NAME),
        }
    }
}

impl DatabaseConfig {
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.trim().is_empty())
    }
}
