//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("max_output_tokens must be positive")]
    InvalidMaxOutputTokens,

    #[error("fallback_confidence must be between 0.0 and 1.0, got {0}")]
    InvalidFallbackConfidence(f64),

    #[error("{0} must be at least 1")]
    MustBePositive(&'static str),

    #[error("Invalid checklist id: {0}")]
    InvalidChecklistId(String),

    #[error("Checklist service URL must start with http:// or https://")]
    InvalidServiceUrl,
}
