use std::env;
use std::fmt;

use crate::scoring::hai::HaiWeights;
use crate::scoring::trust::{
    ScoreWeightsUpdate, TrustEngineConfig, DEFAULT_DECAY_RATE, DEFAULT_MIN_ACTIVITY_THRESHOLD,
};

/// Distinguishes runtime behavior for different stages of deployment.
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

/// Top-level configuration for the scorer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("AMANA_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("AMANA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let hai_weights = optional_var("AMANA_HAI_WEIGHTS")
            .map(|raw| parse_weight_list("AMANA_HAI_WEIGHTS", &raw))
            .transpose()?
            .map(
                |[compliance, asset_backing, economic_value, validator_participation]| HaiWeights {
                    compliance,
                    asset_backing,
                    economic_value,
                    validator_participation,
                },
            );
        let trust_weights = optional_var("AMANA_TRUST_WEIGHTS")
            .map(|raw| parse_weight_list("AMANA_TRUST_WEIGHTS", &raw))
            .transpose()?
            .map(
                |[compliance, performance, reliability, reputation]| ScoreWeightsUpdate {
                    compliance: Some(compliance),
                    performance: Some(performance),
                    reliability: Some(reliability),
                    reputation: Some(reputation),
                },
            );

        let decay_rate = optional_var("AMANA_TRUST_DECAY_RATE")
            .map(|raw| parse_number("AMANA_TRUST_DECAY_RATE", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_DECAY_RATE);
        let min_activity_threshold = optional_var("AMANA_TRUST_MIN_ACTIVITY")
            .map(|raw| parse_number("AMANA_TRUST_MIN_ACTIVITY", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_MIN_ACTIVITY_THRESHOLD);

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                hai_weights,
                trust: TrustEngineConfig {
                    weights: trust_weights.unwrap_or_default(),
                    decay_rate,
                    min_activity_threshold,
                },
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Scorer settings. Weight sums are checked when the scorers are built.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    /// `None` selects the default HAI weights.
    pub hai_weights: Option<HaiWeights>,
    pub trust: TrustEngineConfig,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        key: &'static str,
        value: String,
    },
    InvalidWeightList {
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer, got '{value}'")
            }
            ConfigError::InvalidWeightList { key, value } => write!(
                f,
                "{key} must be four comma-separated basis-point values, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

fn parse_weight_list(key: &'static str, raw: &str) -> Result<[u16; 4], ConfigError> {
    let invalid = || ConfigError::InvalidWeightList {
        key,
        value: raw.to_string(),
    };

    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<u16>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    <[u16; 4]>::try_from(values).map_err(|_| invalid())
}
