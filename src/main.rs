//! Evidence Analyzer HTTP server.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use evidence_analyzer::adapters::ai::{
    GeminiConfig, GeminiProvider, LlmVerdictClient, OpenAIConfig, OpenAIProvider,
    VerdictClientConfig,
};
use evidence_analyzer::adapters::checklist::{BuiltinChecklistCatalog, HttpChecklistCatalog};
use evidence_analyzer::adapters::http::{app_router, AnalysisAppState};
use evidence_analyzer::adapters::storage::InMemoryDocumentStore;
use evidence_analyzer::config::{
    AiConfig, AiProvider, AppConfig, ChecklistConfig, ChecklistSource, LogFormat, ServerConfig,
};
use evidence_analyzer::domain::foundation::Confidence;
use evidence_analyzer::ports::{AIProvider, ChecklistCatalog};
use secrecy::ExposeSecret;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    match server.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

fn build_provider(ai: &AiConfig) -> Result<Arc<dyn AIProvider>, String> {
    let api_key = ai
        .api_key
        .as_ref()
        .map(|key| key.expose_secret().clone())
        .ok_or_else(|| "AI API key is not configured".to_string())?;

    let provider: Arc<dyn AIProvider> = match ai.provider {
        AiProvider::Gemini => {
            let mut config = GeminiConfig::new(api_key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                config = config.with_model(model.clone());
            }
            if let Some(url) = &ai.base_url {
                config = config.with_base_url(url.clone());
            }
            Arc::new(GeminiProvider::new(config).map_err(|e| e.to_string())?)
        }
        AiProvider::OpenAI => {
            let mut config = OpenAIConfig::new(api_key).with_timeout(ai.timeout());
            if let Some(model) = &ai.model {
                config = config.with_model(model.clone());
            }
            if let Some(url) = &ai.base_url {
                config = config.with_base_url(url.clone());
            }
            Arc::new(OpenAIProvider::new(config).map_err(|e| e.to_string())?)
        }
    };
    Ok(provider)
}

fn build_catalog(checklist: &ChecklistConfig) -> Result<Arc<dyn ChecklistCatalog>, String> {
    match checklist.source {
        ChecklistSource::Builtin => Ok(Arc::new(BuiltinChecklistCatalog::new())),
        ChecklistSource::Remote => {
            let catalog = HttpChecklistCatalog::new(&checklist.service_url, checklist.timeout())
                .map_err(|e| e.to_string())?;
            Ok(Arc::new(catalog))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // The subscriber depends on the config, so stderr is all there is.
            eprintln!("evidence-analyzer: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "evidence-analyzer stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), String> {
    config.validate().map_err(|e| e.to_string())?;

    let options = config.analysis.to_options().map_err(|e| e.to_string())?;
    let provider = build_provider(&config.ai)?;
    let verdicts = Arc::new(LlmVerdictClient::new(
        provider,
        VerdictClientConfig {
            temperature: config.ai.temperature,
            max_output_tokens: config.ai.max_output_tokens,
            fallback_confidence: Confidence::new(config.analysis.fallback_confidence),
        },
    ));
    let catalog = build_catalog(&config.checklist)?;

    let state = AnalysisAppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        catalog,
        verdicts,
        options,
        config.ai.provider.name(),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr().map_err(|e| e.to_string())?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {} failed: {}", addr, e))?;
    info!(
        %addr,
        provider = config.ai.provider.name(),
        checklist_source = ?config.checklist.source,
        "evidence-analyzer listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| format!("server failed: {}", e))
}
