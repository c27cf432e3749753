//! Application configuration module
//!
//! Configuration is loaded from environment variables with the
//! `EVIDENCE_ANALYZER` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use evidence_analyzer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod analysis;
mod checklist;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use analysis::AnalysisConfig;
pub use checklist::{ChecklistConfig, ChecklistSource};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini/OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Excerpt sizes, fallback confidence, concurrency
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Checklist catalog source
    #[serde(default)]
    pub checklist: ChecklistConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables such as
    /// `EVIDENCE_ANALYZER__SERVER__PORT=8080` (`server.port = 8080`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVIDENCE_ANALYZER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.analysis.validate()?;
        self.checklist.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
