//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub mail: MailConfig,
}

/// Post-created notification settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Recipient of the notice; `None` disables it.
    pub admin_email: Option<String>,
    pub from: String,
    /// HTTP mail relay; `None` logs messages instead.
    pub webhook_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            mail: MailConfig::from_env(),
        }
    }
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            admin_email: non_blank_var("ADMIN_EMAIL"),
            from: non_blank_var("MAIL_FROM").unwrap_or_else(|| "no-reply@example.com".to_string()),
            webhook_url: non_blank_var("MAIL_WEBHOOK_URL"),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
