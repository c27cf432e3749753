//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::{
    AnalysisError, AnalysisOptions, DeleteDocumentCommand, DeleteDocumentHandler,
    EvaluateMatchCommand, EvaluateMatchHandler, GetGapAnalysisHandler, GetGapAnalysisQuery,
    ListDocumentsHandler, MapDocumentCommand, MapDocumentHandler, MapDocumentsCommand,
    MapDocumentsHandler, MatchEvaluator, UploadDocumentCommand, UploadDocumentHandler,
};
use crate::domain::foundation::{ChecklistId, DocumentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{ChecklistCatalog, DocumentStore, VerdictClient};

use super::dto::{
    DeleteResponse, DocumentListResponse, ErrorResponse, GapAnalysisResponse, GapQuery,
    HealthResponse, MappingRequest, MappingResponse, MatchRequest, MatchResponse,
    MultiMappingRequest, MultiMappingResponse, UploadResponse,
};

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "document";

const SERVICE_NAME: &str = "evidence-analyzer";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub store: Arc<dyn DocumentStore>,
    pub catalog: Arc<dyn ChecklistCatalog>,
    pub verdicts: Arc<dyn VerdictClient>,
    pub options: AnalysisOptions,
    /// Provider name reported by the health endpoint.
    pub ai_provider: String,
}

impl AnalysisAppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        catalog: Arc<dyn ChecklistCatalog>,
        verdicts: Arc<dyn VerdictClient>,
        options: AnalysisOptions,
        ai_provider: impl Into<String>,
    ) -> Self {
        Self {
            store,
            catalog,
            verdicts,
            options,
            ai_provider: ai_provider.into(),
        }
    }

    fn evaluator(&self) -> MatchEvaluator {
        MatchEvaluator::new(self.verdicts.clone(), self.options.match_excerpt_chars)
    }

    pub fn upload_document_handler(&self) -> UploadDocumentHandler {
        UploadDocumentHandler::new(
            self.store.clone(),
            self.verdicts.clone(),
            self.options.summary_excerpt_chars,
        )
    }

    pub fn list_documents_handler(&self) -> ListDocumentsHandler {
        ListDocumentsHandler::new(self.store.clone())
    }

    pub fn delete_document_handler(&self) -> DeleteDocumentHandler {
        DeleteDocumentHandler::new(self.store.clone())
    }

    pub fn evaluate_match_handler(&self) -> EvaluateMatchHandler {
        EvaluateMatchHandler::new(self.store.clone(), self.evaluator())
    }

    pub fn map_document_handler(&self) -> MapDocumentHandler {
        MapDocumentHandler::new(
            self.store.clone(),
            self.catalog.clone(),
            self.evaluator(),
            self.options.clone(),
        )
    }

    pub fn map_documents_handler(&self) -> MapDocumentsHandler {
        MapDocumentsHandler::new(
            self.store.clone(),
            self.catalog.clone(),
            self.evaluator(),
            self.options.clone(),
        )
    }

    pub fn gap_analysis_handler(&self) -> GetGapAnalysisHandler {
        GetGapAnalysisHandler::new(self.catalog.clone(), self.options.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<AnalysisAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
        ai_provider: state.ai_provider.clone(),
    })
}

/// GET /analyze/documents
pub async fn list_documents(
    State(state): State<AnalysisAppState>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let listings = state.list_documents_handler().handle().await?;
    let documents: Vec<_> = listings.into_iter().map(Into::into).collect();
    Ok(Json(DocumentListResponse {
        total_count: documents.len(),
        documents,
    }))
}

/// GET /analyze/gaps?checklist_id=
pub async fn get_gaps(
    State(state): State<AnalysisAppState>,
    Query(query): Query<GapQuery>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let query = GetGapAnalysisQuery {
        checklist_id: parse_checklist_id(query.checklist_id)?,
    };
    let analysis = state.gap_analysis_handler().handle(query).await?;
    Ok(Json(GapAnalysisResponse::from(analysis)))
}

/// GET /analyze/gaps/report?checklist_id=
pub async fn get_gap_report(
    State(state): State<AnalysisAppState>,
    Query(query): Query<GapQuery>,
) -> Result<Response, AnalysisApiError> {
    let query = GetGapAnalysisQuery {
        checklist_id: parse_checklist_id(query.checklist_id)?,
    };
    let analysis = state.gap_analysis_handler().handle(query).await?;
    let filename = format!(
        "gap-analysis-report-{}.txt",
        analysis.analyzed_at.date_stamp()
    );
    Ok(text_attachment(&filename, analysis.render_report()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /analyze/document - multipart upload
pub async fn upload_document(
    State(state): State<AnalysisAppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalysisApiError::BadRequest(format!("Malformed upload: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AnalysisApiError::BadRequest("No file selected".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AnalysisApiError::BadRequest(format!("Malformed upload: {}", e)))?;
        upload = Some(UploadDocumentCommand {
            filename,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let cmd = upload.ok_or_else(|| AnalysisApiError::BadRequest("No file provided".to_string()))?;
    let result = state.upload_document_handler().handle(cmd).await?;
    Ok(Json(UploadResponse::from(result)))
}

/// POST /analyze/match
pub async fn evaluate_match(
    State(state): State<AnalysisAppState>,
    Json(request): Json<MatchRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = EvaluateMatchCommand {
        document_id: parse_document_id(&request.document_id)?,
        requirement: request.requirement,
        hints: request.hints,
    };
    let result = state.evaluate_match_handler().handle(cmd).await?;
    Ok(Json(MatchResponse::from(result)))
}

/// POST /analyze/mapping
pub async fn map_document(
    State(state): State<AnalysisAppState>,
    Json(request): Json<MappingRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = MapDocumentCommand {
        document_id: parse_document_id(&request.document_id)?,
        checklist_id: parse_checklist_id(request.checklist_id)?,
    };
    let mapping = state.map_document_handler().handle(cmd).await?;
    Ok(Json(MappingResponse::from(mapping)))
}

/// POST /analyze/mapping/multi
pub async fn map_documents(
    State(state): State<AnalysisAppState>,
    Json(request): Json<MultiMappingRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = multi_command(request)?;
    let mapping = state.map_documents_handler().handle(cmd).await?;
    Ok(Json(MultiMappingResponse::from(mapping)))
}

/// POST /analyze/mapping/multi/report
pub async fn map_documents_report(
    State(state): State<AnalysisAppState>,
    Json(request): Json<MultiMappingRequest>,
) -> Result<Response, AnalysisApiError> {
    let cmd = multi_command(request)?;
    let mapping = state.map_documents_handler().handle(cmd).await?;
    let filename = format!(
        "multi-document-mapping-report-{}.txt",
        mapping.analyzed_at.date_stamp()
    );
    Ok(text_attachment(&filename, mapping.report))
}

/// DELETE /analyze/documents/:id
pub async fn delete_document(
    State(state): State<AnalysisAppState>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let cmd = DeleteDocumentCommand {
        document_id: parse_document_id(&document_id)?,
    };
    let deleted = state.delete_document_handler().handle(cmd).await?;
    Ok(Json(DeleteResponse {
        message: "Document deleted successfully".to_string(),
        document_id: deleted.to_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Request Parsing
// ════════════════════════════════════════════════════════════════════════════════

fn multi_command(request: MultiMappingRequest) -> Result<MapDocumentsCommand, AnalysisApiError> {
    let document_ids = request
        .document_ids
        .iter()
        .map(|id| parse_document_id(id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MapDocumentsCommand {
        document_ids,
        checklist_id: parse_checklist_id(request.checklist_id)?,
    })
}

/// Ids are UUIDs, so a malformed one can never name a stored document.
fn parse_document_id(raw: &str) -> Result<DocumentId, AnalysisApiError> {
    raw.trim()
        .parse()
        .map_err(|_| AnalysisApiError::UnknownDocument(raw.to_string()))
}

/// Blank ids select the default checklist.
fn parse_checklist_id(raw: Option<String>) -> Result<Option<ChecklistId>, AnalysisApiError> {
    match raw {
        Some(id) if !id.trim().is_empty() => Ok(Some(
            ChecklistId::new(id.trim()).map_err(AnalysisError::from)?,
        )),
        _ => Ok(None),
    }
}

fn text_attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum AnalysisApiError {
    Analysis(AnalysisError),
    BadRequest(String),
    /// Document id that failed to parse.
    UnknownDocument(String),
}

impl From<AnalysisError> for AnalysisApiError {
    fn from(err: AnalysisError) -> Self {
        AnalysisApiError::Analysis(err)
    }
}

/// HTTP status for an application error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::DocumentNotFound | ErrorCode::ChecklistNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidEncoding
        | ErrorCode::EmptyChecklist
        | ErrorCode::NoDocumentsSelected => StatusCode::BAD_REQUEST,
        ErrorCode::CatalogUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AnalysisApiError::Analysis(err) => {
                let status = status_for(err.code());
                if status.is_server_error() {
                    tracing::error!(error = %err, "analysis request failed");
                }
                (status, ErrorResponse::from(DomainError::from(err)))
            }
            AnalysisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalysisApiError::UnknownDocument(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Document", &id))
            }
        };

        (status, Json(error)).into_response()
    }
}
