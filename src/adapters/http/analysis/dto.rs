//! HTTP DTOs (Data Transfer Objects) for analysis endpoints.
//!
//! These types define the JSON request/response structure of the analysis
//! API and keep the wire format independent from domain types.

use serde::{Deserialize, Serialize};

use crate::application::{
    DocumentListing, DocumentMapping, EvaluateMatchResult, GapAnalysis, MultiDocumentMapping,
    UploadDocumentResult,
};
use crate::domain::checklist::Gap;
use crate::domain::document::DocumentSummary;
use crate::domain::foundation::{Confidence, ControlId, DomainError};
use crate::domain::mapping::{AggregatedResult, MappingResult, MappingSummary, SourceDocument};
use crate::domain::verdict::{Assessment, MatchVerdict, MissingElements};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to assess one free-form requirement against a document.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub document_id: String,
    pub requirement: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Request to map one document against a checklist.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingRequest {
    pub document_id: String,
    /// Falls back to the configured default checklist when absent.
    #[serde(default)]
    pub checklist_id: Option<String>,
}

/// Request to map several documents against a checklist.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiMappingRequest {
    #[serde(default)]
    pub document_ids: Vec<String>,
    #[serde(default)]
    pub checklist_id: Option<String>,
}

/// Query string for gap endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GapQuery {
    pub checklist_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Service liveness.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub ai_provider: String,
}

/// Document summary with its provenance flattened in.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: DocumentSummary,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
}

impl From<Assessment<DocumentSummary>> for SummaryResponse {
    fn from(analysis: Assessment<DocumentSummary>) -> Self {
        let (summary, degraded_reason) = analysis.into_parts();
        Self {
            summary,
            degraded: degraded_reason.is_some(),
            degraded_reason,
        }
    }
}

/// Response for a document upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    pub analysis: SummaryResponse,
}

impl From<UploadDocumentResult> for UploadResponse {
    fn from(result: UploadDocumentResult) -> Self {
        Self {
            document_id: result.document_id.to_string(),
            filename: result.filename,
            analysis: result.analysis.into(),
        }
    }
}

/// A single verdict.
#[derive(Debug, Clone, Serialize)]
pub struct MatchVerdictResponse {
    pub matches: bool,
    pub confidence: Confidence,
    pub relevant_sections: Vec<String>,
    pub reasoning: String,
    pub missing_elements: MissingElements,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
}

impl From<Assessment<MatchVerdict>> for MatchVerdictResponse {
    fn from(verdict: Assessment<MatchVerdict>) -> Self {
        let (value, degraded_reason) = verdict.into_parts();
        Self {
            matches: value.matches,
            confidence: value.confidence,
            relevant_sections: value.relevant_sections,
            reasoning: value.reasoning,
            missing_elements: value.missing_elements,
            degraded: degraded_reason.is_some(),
            degraded_reason,
        }
    }
}

/// Response for a single requirement assessment.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub document_id: String,
    pub requirement: String,
    pub match_result: MatchVerdictResponse,
}

impl From<EvaluateMatchResult> for MatchResponse {
    fn from(result: EvaluateMatchResult) -> Self {
        Self {
            document_id: result.document_id.to_string(),
            requirement: result.requirement,
            match_result: result.verdict.into(),
        }
    }
}

/// Mapping totals shared by the single and multi-document responses.
#[derive(Debug, Clone, Serialize)]
pub struct MappingTotals {
    pub total_controls: usize,
    pub matched_controls: usize,
    pub unmatched_controls: usize,
    pub degraded_verdicts: usize,
    pub compliance_rate: f64,
}

impl From<MappingSummary> for MappingTotals {
    fn from(summary: MappingSummary) -> Self {
        Self {
            total_controls: summary.total_controls,
            matched_controls: summary.matched_controls,
            unmatched_controls: summary.unmatched_controls,
            degraded_verdicts: summary.degraded_verdicts,
            compliance_rate: summary.compliance_rate,
        }
    }
}

/// Response for a single-document mapping.
#[derive(Debug, Clone, Serialize)]
pub struct MappingResponse {
    pub document_id: String,
    pub filename: String,
    pub checklist_id: String,
    pub checklist_name: String,
    #[serde(flatten)]
    pub totals: MappingTotals,
    pub mapping_results: Vec<MappingResult>,
    pub report_content: String,
    pub analyzed_at: String,
}

impl From<DocumentMapping> for MappingResponse {
    fn from(mapping: DocumentMapping) -> Self {
        Self {
            document_id: mapping.source.id.to_string(),
            filename: mapping.source.filename,
            checklist_id: mapping.checklist_id.to_string(),
            checklist_name: mapping.checklist_name,
            totals: mapping.summary.into(),
            mapping_results: mapping.results,
            report_content: mapping.report,
            analyzed_at: mapping.analyzed_at.to_rfc3339(),
        }
    }
}

/// Response for a multi-document mapping.
#[derive(Debug, Clone, Serialize)]
pub struct MultiMappingResponse {
    pub checklist_id: String,
    pub checklist_name: String,
    pub source_documents: Vec<SourceDocument>,
    #[serde(flatten)]
    pub totals: MappingTotals,
    pub evaluated_pairs: usize,
    pub aggregated_results: Vec<AggregatedResult>,
    pub unevaluated_controls: Vec<ControlId>,
    pub report_content: String,
    pub analyzed_at: String,
}

impl From<MultiDocumentMapping> for MultiMappingResponse {
    fn from(mapping: MultiDocumentMapping) -> Self {
        Self {
            checklist_id: mapping.checklist_id.to_string(),
            checklist_name: mapping.checklist_name,
            source_documents: mapping.sources,
            totals: mapping.summary.into(),
            evaluated_pairs: mapping.evaluated_pairs,
            aggregated_results: mapping.aggregation.results,
            unevaluated_controls: mapping.aggregation.unevaluated_controls,
            report_content: mapping.report,
            analyzed_at: mapping.analyzed_at.to_rfc3339(),
        }
    }
}

/// Response for a gap query.
#[derive(Debug, Clone, Serialize)]
pub struct GapAnalysisResponse {
    pub checklist_id: String,
    pub total_gaps: usize,
    pub gaps: Vec<Gap>,
    pub analyzed_at: String,
}

impl From<GapAnalysis> for GapAnalysisResponse {
    fn from(analysis: GapAnalysis) -> Self {
        Self {
            checklist_id: analysis.checklist_id.to_string(),
            total_gaps: analysis.gaps.len(),
            gaps: analysis.gaps,
            analyzed_at: analysis.analyzed_at.to_rfc3339(),
        }
    }
}

/// One row of the document listing.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentItem {
    pub id: String,
    pub filename: String,
    pub uploaded_at: String,
    pub has_analysis: bool,
    pub analysis: SummaryResponse,
}

impl From<DocumentListing> for DocumentItem {
    fn from(listing: DocumentListing) -> Self {
        Self {
            id: listing.id.to_string(),
            filename: listing.filename,
            uploaded_at: listing.uploaded_at.to_rfc3339(),
            has_analysis: listing.has_analysis,
            analysis: listing.analysis.into(),
        }
    }
}

/// Response for the document listing.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentItem>,
    pub total_count: usize,
}

/// Response for a deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub document_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DocumentId, ErrorCode};

    #[test]
    fn mapping_request_checklist_is_optional() {
        let json = r#"{"document_id": "abc"}"#;
        let req: MappingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.document_id, "abc");
        assert!(req.checklist_id.is_none());
    }

    #[test]
    fn match_request_hints_default_to_empty() {
        let json = r#"{"document_id": "abc", "requirement": "Access reviews"}"#;
        let req: MatchRequest = serde_json::from_str(json).unwrap();
        assert!(req.hints.is_empty());
    }

    #[test]
    fn degraded_summary_flattens_with_reason() {
        let response: SummaryResponse =
            Assessment::degraded(DocumentSummary::unknown(), "provider unavailable").into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["document_type"], "unknown");
        assert_eq!(json["degraded"], true);
        assert_eq!(json["degraded_reason"], "provider unavailable");
    }

    #[test]
    fn assessed_verdict_omits_reason() {
        let verdict = MatchVerdict::fallback(Confidence::new(0.85));
        let response: MatchVerdictResponse = Assessment::assessed(verdict).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["degraded"], false);
        assert!(json.get("degraded_reason").is_none());
    }

    #[test]
    fn error_response_carries_domain_details() {
        let id = DocumentId::new();
        let err = DomainError::new(ErrorCode::DocumentNotFound, "Document not found")
            .with_detail("document_id", id.to_string());
        let response = ErrorResponse::from(err);
        assert_eq!(response.code, "DOCUMENT_NOT_FOUND");
        assert_eq!(
            response.details.unwrap()["document_id"],
            serde_json::Value::String(id.to_string())
        );
    }

    #[test]
    fn error_response_not_found_format() {
        let err = ErrorResponse::not_found("Document", "abc-123");
        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.message.contains("abc-123"));
    }
}
