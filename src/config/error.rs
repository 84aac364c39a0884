//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialisation failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Effect thresholds must satisfy 0 <= noise_floor < minor_below < moderate_below < major_below <= 1")]
    InvalidThresholds,

    #[error("Provider timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Invalid sampling for {purpose}: {reason}")]
    InvalidSampling { purpose: String, reason: &'static str },

    #[error("Knob {name} has a non-finite value")]
    InvalidKnob { name: String },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
