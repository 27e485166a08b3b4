use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub health: HealthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    /// Delete every user and exercise when the server starts
    #[arg(long, env = "TRACKER_RESET_ON_BOOT", default_value_t = false)]
    pub reset_on_boot: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[arg(long = "database-url", env = "TRACKER_DATABASE_URL")]
    pub url: String,

    /// Maximum number of pooled connections
    #[arg(long = "db-max-connections", env = "TRACKER_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    /// Minimum number of idle pooled connections
    #[arg(long = "db-min-connections", env = "TRACKER_DB_MIN_CONNECTIONS", default_value_t = 1)]
    pub min_connections: u32,

    /// How long to wait for a free connection before failing
    #[arg(long = "db-acquire-timeout-secs", env = "TRACKER_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "TRACKER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "TRACKER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Port for the management (health) server
    #[arg(long, env = "TRACKER_MGMT_PORT", default_value_t = 9090)]
    pub mgmt_port: u16,

    /// Maximum time a single request may take
    #[arg(long, env = "TRACKER_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// How long to wait for in-flight work on shutdown
    #[arg(long, env = "TRACKER_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,

    /// Directory served under /public
    #[arg(long, env = "TRACKER_STATIC_DIR", default_value = "public")]
    pub static_dir: String,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the readiness database check
    #[arg(long = "health-db-timeout-ms", env = "TRACKER_HEALTH_DB_TIMEOUT_MS", default_value_t = 2000)]
    pub db_timeout_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "TRACKER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces and metrics are exported only when set
    #[arg(long, env = "TRACKER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["exercise-tracker", "--database-url", "postgres://localhost/db"]).unwrap();
        assert_eq!(config.database.url, "postgres://localhost/db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.mgmt_port, 9090);
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
        assert!(config.telemetry.otlp_endpoint.is_none());
        assert!(!config.reset_on_boot);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "exercise-tracker",
            "--database-url",
            "postgres://localhost/db",
            "--port",
            "8080",
            "--log-format",
            "json",
            "--reset-on-boot",
        ])
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert!(config.reset_on_boot);
    }
}
