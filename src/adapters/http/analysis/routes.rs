//! Route configuration for analysis endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    delete_document, evaluate_match, get_gap_report, get_gaps, health, list_documents,
    map_document, map_documents, map_documents_report, upload_document, AnalysisAppState,
};

/// Creates the analysis router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness and configured AI provider
/// - `POST /analyze/document` - Upload a document (multipart field `document`)
/// - `POST /analyze/match` - Assess one requirement against a document
/// - `POST /analyze/mapping` - Map one document against a checklist
/// - `POST /analyze/mapping/multi` - Map several documents, best match per control
/// - `POST /analyze/mapping/multi/report` - Same, as a text attachment
/// - `GET /analyze/gaps` - Outstanding gaps
/// - `GET /analyze/gaps/report` - Gap report as a text attachment
/// - `GET /analyze/documents` - List uploaded documents
/// - `DELETE /analyze/documents/:id` - Remove a document and its summary
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/analyze/document", post(upload_document))
        .route("/analyze/match", post(evaluate_match))
        .route("/analyze/mapping", post(map_document))
        .route("/analyze/mapping/multi", post(map_documents))
        .route("/analyze/mapping/multi/report", post(map_documents_report))
        .route("/analyze/gaps", get(get_gaps))
        .route("/analyze/gaps/report", get(get_gap_report))
        .route("/analyze/documents", get(list_documents))
        .route("/analyze/documents/:id", delete(delete_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{LlmVerdictClient, MockAIProvider, VerdictClientConfig};
    use crate::adapters::checklist::BuiltinChecklistCatalog;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::application::AnalysisOptions;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AnalysisAppState {
        AnalysisAppState::new(
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(BuiltinChecklistCatalog::new()),
            Arc::new(LlmVerdictClient::new(
                Arc::new(MockAIProvider::new()),
                VerdictClientConfig::default(),
            )),
            AnalysisOptions::default(),
            "mock",
        )
    }

    #[tokio::test]
    async fn analysis_router_mounts_health() {
        let app = analysis_router().with_state(state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_of_unknown_document_is_not_found() {
        let app = analysis_router().with_state(state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/analyze/documents/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
