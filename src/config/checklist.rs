//! Checklist catalog configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where checklists come from
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistConfig {
    #[serde(default)]
    pub source: ChecklistSource,

    /// Base URL of the checklist service, used when `source` is `remote`
    #[serde(default = "default_service_url")]
    pub service_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Checklist catalog backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistSource {
    #[default]
    Builtin,
    Remote,
}

impl ChecklistConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate checklist configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source == ChecklistSource::Remote {
            if !(self.service_url.starts_with("http://")
                || self.service_url.starts_with("https://"))
            {
                return Err(ValidationError::InvalidServiceUrl);
            }
            if self.timeout_secs == 0 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            source: ChecklistSource::default(),
            service_url: default_service_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_service_url() -> String {
    "http://checklist-service:8001".to_string()
}

fn default_timeout() -> u64 {
    10
}
