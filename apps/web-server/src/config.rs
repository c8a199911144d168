//! Application configuration loaded from environment variables.

use std::env;

use inkwell_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut config = DatabaseConfig::new(url);
                if let Some(max) = parse(&lookup, "DB_MAX_CONNECTIONS") {
                    config.max_connections = max;
                }
                if let Some(min) = parse(&lookup, "DB_MIN_CONNECTIONS") {
                    config.min_connections = min;
                }
                config.auto_migrate = flag(&lookup, "DB_AUTO_MIGRATE").unwrap_or(false);
                config
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT").unwrap_or(8080),
            database,
            telemetry: TelemetryConfig {
                json_logs: lookup("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
                service_name: lookup("OTEL_SERVICE_NAME")
                    .or_else(|| lookup("SERVICE_NAME"))
                    .unwrap_or_else(|| "inkwell".to_string()),
                debug: flag(&lookup, "APP_DEBUG").unwrap_or(false),
            },
        }
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn flag<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
}
