//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Gemini's `generateContent` endpoint takes a single content block, so the
//! system prompt is prepended to the user text rather than sent separately.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http_errors::{check_status, map_send_error};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

const DEFAULT_TOP_K: u32 = 40;
const DEFAULT_TOP_P: f32 = 0.95;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-flash-latest").
    pub model: String,
    /// Base URL (default: https://generativelanguage.googleapis.com).
    pub base_url: String,
    pub timeout: Duration,
    pub top_k: u32,
    pub top_p: f32,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-flash-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let user_text = request.user_prompt();
        let text = match request.system_prompt {
            Some(ref system) => format!("{}\n\n{}", system, user_text),
            None => user_text,
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
                max_output_tokens: request.max_tokens,
            },
        }
    }
}

fn into_completion(
    gemini_response: GeminiResponse,
    model: &str,
) -> Result<CompletionResponse, AIError> {
    let candidate = gemini_response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No candidates in response"))?;

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };
    if finish_reason == FinishReason::ContentFilter {
        return Err(AIError::content_filtered("candidate blocked for safety"));
    }

    let text = candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AIError::parse("Candidate has no text part"))?;

    let usage = gemini_response
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: text,
        usage,
        model: model.to_string(),
        finish_reason,
    })
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let body = self.to_gemini_request(&request);

        tracing::debug!(
            model = %self.config.model,
            purpose = %request.metadata.purpose,
            trace_id = %request.metadata.trace_id,
            "sending generateContent"
        );

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;

        let response = check_status(response).await?;
        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(gemini_response, &self.config.model)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    top_k: u32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}
