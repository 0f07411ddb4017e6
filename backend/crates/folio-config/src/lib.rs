mod api_config;
mod config;
mod cors_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mailer_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mailer_config::MailerConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_DATABASE_NAME: &str = "portfolio";
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://prashanth-port-folio.vercel.app",
    "http://localhost:5173",
    "http://localhost:3000",
];
const DEFAULT_SENDER_NAME: &str = "Portfolio";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_CONFIG_FILENAME: &str = "folio.toml";
