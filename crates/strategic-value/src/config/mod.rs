use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::decision::ScoringConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scoring = ScoringSettings {
            max_cost: scoring_ceiling("APP_MAX_COST", ScoringConfig::DEFAULT_MAX_COST)?,
            max_time_months: scoring_ceiling(
                "APP_MAX_TIME_MONTHS",
                ScoringConfig::DEFAULT_MAX_TIME_MONTHS,
            )?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Normalization ceilings for the scoring engine.
///
/// The single source of truth for MAX_COST and MAX_TIME: the engine receives
/// these through [`ScoringSettings::scoring_config`], never as per-endpoint
/// literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringSettings {
    pub max_cost: f64,
    pub max_time_months: f64,
}

impl ScoringSettings {
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            max_cost: self.max_cost,
            max_time_months: self.max_time_months,
        }
    }
}

fn scoring_ceiling(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let value = match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidScoringCeiling { name })?,
        Err(_) => default,
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidScoringCeiling { name });
    }

    Ok(value)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("{name} must be a positive number")]
    InvalidScoringCeiling { name: &'static str },
}
