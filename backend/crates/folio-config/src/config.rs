use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, CorsConfig, DEFAULT_CONFIG_FILENAME,
    DatabaseConfig, LoggingConfig, MailerConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_FILE_VAR: &str = "FOLIO_CONFIG_FILE";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub mailer: MailerConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FOLIO_CONFIG_FILE if set (must exist), else ./folio.toml if present
    /// 2. Defaults for anything the file leaves out
    /// 3. Environment variable overrides
    ///
    /// The result is unchecked; run `validate()` before use.
    pub fn load() -> ConfigErrorResult<Self> {
        let (config_path, explicit) = Self::config_path()?;

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else if explicit {
            return Err(ConfigError::config(format!(
                "{} points at {}, which does not exist",
                CONFIG_FILE_VAR,
                config_path.display()
            )));
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config file location and whether it was named explicitly.
    /// Priority: FOLIO_CONFIG_FILE env var > ./folio.toml
    pub fn config_path() -> ConfigErrorResult<(PathBuf, bool)> {
        if let Ok(file) = std::env::var(CONFIG_FILE_VAR) {
            return Ok((PathBuf::from(file), true));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok((cwd.join(DEFAULT_CONFIG_FILENAME), false))
    }

    /// Check every section, stopping at the first problem.
    /// A missing database URI is not an error; the server runs degraded.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cors.validate()?;
        self.mailer.validate()?;

        if self.database.name.trim().is_empty() {
            return Err(ConfigError::config("database.name must not be empty"));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective settings. Credentials and the connection string are masked.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        info!(
            "  database: {} (default name '{}')",
            if self.database.uri().is_some() {
                "uri configured"
            } else {
                "no uri, degraded mode"
            },
            self.database.name
        );
        info!("  cors: {}", self.cors.allowed_origins.join(", "));

        if self.mailer.is_enabled() {
            info!(
                "  mailer: enabled ({} -> {})",
                self.mailer.sender_email, self.mailer.notify_email
            );
        } else {
            info!("  mailer: disabled");
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  api: seed {}",
            if self.api.seed_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HOST", &mut self.server.host);
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("APP_ENV", &mut self.server.environment);

        // Database
        Self::apply_env_option_string("MONGODB_URI", &mut self.database.uri);
        Self::apply_env_string("MONGODB_DATABASE", &mut self.database.name);

        // CORS
        Self::apply_env_list("ALLOWED_ORIGINS", &mut self.cors.allowed_origins);

        // Mailer
        Self::apply_env_option_string("SMTP_HOST", &mut self.mailer.smtp_host);
        Self::apply_env_string("SMTP_USERNAME", &mut self.mailer.smtp_username);
        Self::apply_env_string("SMTP_PASSWORD", &mut self.mailer.smtp_password);
        Self::apply_env_string("MAIL_SENDER_NAME", &mut self.mailer.sender_name);
        Self::apply_env_string("MAIL_SENDER_EMAIL", &mut self.mailer.sender_email);
        Self::apply_env_string("MAIL_NOTIFY_EMAIL", &mut self.mailer.notify_email);

        // Logging
        Self::apply_env_parse("LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LOG_FILE", &mut self.logging.file);

        // API
        Self::apply_env_bool("SEED_ENABLED", &mut self.api.seed_enabled);
    }

    /// Replace `target` when `var_name` is set
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// `"true"` or `"1"` is true; any other value is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave `target` untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// A set variable always yields `Some`, even when empty
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated; blank entries are dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
