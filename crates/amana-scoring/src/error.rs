use crate::config::ConfigError;
use crate::scoring::WeightsError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Weights(WeightsError),
    Input(serde_json::Error),
}

impl AppError {
    /// True when the caller can fix the failure by changing what they passed in.
    pub fn is_caller_error(&self) -> bool {
        match self {
            AppError::Weights(_) | AppError::Input(_) => true,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Weights(err) => write!(f, "invalid weights: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Weights(err) => Some(err),
            AppError::Input(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<WeightsError> for AppError {
    fn from(value: WeightsError) -> Self {
        Self::Weights(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WeightSet;
    use std::error::Error;

    #[test]
    fn weights_and_input_are_caller_errors() {
        let weights = AppError::from(WeightsError::InvalidSum {
            set: WeightSet::Hai,
            total: 9_000,
        });
        let input = AppError::from(
            serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json"),
        );
        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        assert!(weights.is_caller_error());
        assert!(input.is_caller_error());
        assert!(!io.is_caller_error());
    }

    #[test]
    fn display_prefixes_the_failing_layer() {
        let err = AppError::from(WeightsError::InvalidSum {
            set: WeightSet::Trust,
            total: 11_500,
        });

        assert_eq!(
            err.to_string(),
            "invalid weights: trust score weights must sum to 10000 basis points, found 11500"
        );
        assert!(err.source().is_some());
    }
}
