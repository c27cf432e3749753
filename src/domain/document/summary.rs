//! Initial AI analysis of an uploaded document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Confidence;

/// What the model found in a document on upload.
///
/// Field names follow the JSON shape the summary prompt demands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_type: String,
    #[serde(default)]
    pub security_controls: Vec<String>,
    #[serde(default)]
    pub compliance_areas: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub completeness_score: Confidence,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl DocumentSummary {
    /// Summary used when the model could not be consulted.
    pub fn unknown() -> Self {
        Self {
            document_type: "unknown".to_string(),
            security_controls: Vec::new(),
            compliance_areas: Vec::new(),
            completeness_score: Confidence::ZERO,
            key_points: Vec::new(),
        }
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Confidence, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(Confidence::new(raw))
}
