use crate::financing::{AgeLimits, CatalogSource, PricingConstants, QuoteSettings};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

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
    pub quoting: QuotingConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            quoting: QuotingConfig::from_env()?,
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Rate catalog location plus fee, tax and eligibility parameters.
#[derive(Debug, Clone)]
pub struct QuotingConfig {
    pub catalog_path: Option<PathBuf>,
    pub settings: QuoteSettings,
}

impl QuotingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = QuoteSettings::default();
        let catalog_path = env::var("QUOTE_CATALOG_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let constants = PricingConstants {
            embedded_fee: amount_var("QUOTE_EMBEDDED_FEE", defaults.constants.embedded_fee)?,
            monthly_insurance: amount_var(
                "QUOTE_MONTHLY_INSURANCE",
                defaults.constants.monthly_insurance,
            )?,
            iof_daily_rate: amount_var("QUOTE_IOF_DAILY_RATE", defaults.constants.iof_daily_rate)?,
            iof_additional_rate: amount_var(
                "QUOTE_IOF_ADDITIONAL_RATE",
                defaults.constants.iof_additional_rate,
            )?,
        };

        let age_limits = AgeLimits {
            light: parsed_var("QUOTE_AGE_LIMIT_LIGHT", defaults.age_limits.light)?,
            motorcycle: parsed_var("QUOTE_AGE_LIMIT_MOTORCYCLE", defaults.age_limits.motorcycle)?,
            truck: parsed_var("QUOTE_AGE_LIMIT_TRUCK", defaults.age_limits.truck)?,
        };

        let minimum_down_payment_ratio = amount_var(
            "QUOTE_MIN_DOWN_PAYMENT_RATIO",
            defaults.minimum_down_payment_ratio,
        )?;

        Ok(Self {
            catalog_path,
            settings: QuoteSettings {
                constants,
                age_limits,
                minimum_down_payment_ratio,
            },
        })
    }

    pub fn catalog_source(&self) -> Result<CatalogSource, crate::financing::CatalogError> {
        match &self.catalog_path {
            Some(path) => CatalogSource::from_path(path),
            None => Ok(CatalogSource::Standard),
        }
    }
}

fn parsed_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { key, value })
        }
        _ => Ok(default),
    }
}

fn amount_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let amount = parsed_var(key, default)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ConfigError::InvalidNumber {
            key,
            value: amount.to_string(),
        });
    }
    Ok(amount)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative number (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
