use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGINS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact `scheme://host[:port]` origins whose requests get CORS headers
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if !is_valid_origin(origin) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{}' must look like scheme://host[:port]",
                    origin
                )));
            }
        }

        Ok(())
    }
}

fn is_valid_origin(origin: &str) -> bool {
    let Some((scheme, authority)) = origin.split_once("://") else {
        return false;
    };

    if scheme != "http" && scheme != "https" {
        return false;
    }

    if authority.is_empty()
        || authority.contains('/')
        || authority.chars().any(char::is_whitespace)
    {
        return false;
    }

    match authority.rsplit_once(':') {
        // Bracketed IPv6 hosts carry colons of their own
        Some((host, port)) if !authority.ends_with(']') => {
            !host.is_empty() && port.parse::<u16>().is_ok()
        }
        _ => true,
    }
}
