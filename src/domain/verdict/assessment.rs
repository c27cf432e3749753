//! Assessment - a model-derived value tagged with its provenance.

use serde::{Deserialize, Serialize};

/// Either a value the model actually produced, or a substituted default.
///
/// Degraded values keep the pipeline terminating when the model is
/// unreachable or replies with garbage, while letting callers and reports
/// tell them apart from real verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment<T> {
    /// The model replied and the reply parsed.
    Assessed { value: T },
    /// The model call failed; `value` is the configured fallback.
    Degraded { value: T, reason: String },
}

impl<T> Assessment<T> {
    pub fn assessed(value: T) -> Self {
        Assessment::Assessed { value }
    }

    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Assessment::Degraded {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Assessment::Assessed { value } | Assessment::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Assessment::Assessed { value } | Assessment::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Assessment::Degraded { .. })
    }

    /// Why the fallback was used, if it was.
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            Assessment::Assessed { .. } => None,
            Assessment::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Splits into the value and the optional degradation reason.
    pub fn into_parts(self) -> (T, Option<String>) {
        match self {
            Assessment::Assessed { value } => (value, None),
            Assessment::Degraded { value, reason } => (value, Some(reason)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Assessment<U> {
        match self {
            Assessment::Assessed { value } => Assessment::Assessed { value: f(value) },
            Assessment::Degraded { value, reason } => Assessment::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}
