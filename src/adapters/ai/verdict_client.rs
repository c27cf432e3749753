//! LLM-backed implementation of the VerdictClient port.
//!
//! Sends one completion per prompt and reads the first JSON object out of
//! the reply. Any failure along the way yields the configured fallback as
//! [`Assessment::Degraded`] and is logged at `warn`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::document::DocumentSummary;
use crate::domain::foundation::Confidence;
use crate::domain::mapping::SYSTEM_PROMPT;
use crate::domain::verdict::{parse_reply, Assessment, MatchVerdict};
use crate::ports::{
    AIProvider, CompletionRequest, MessageRole, RequestMetadata, RequestPurpose, VerdictClient,
};

/// Sampling and fallback settings for [`LlmVerdictClient`].
#[derive(Debug, Clone)]
pub struct VerdictClientConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Confidence carried by the fallback match verdict.
    pub fallback_confidence: Confidence,
}

impl Default for VerdictClientConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_output_tokens: 2048,
            fallback_confidence: Confidence::new(0.85),
        }
    }
}

/// Verdict client that delegates to an [`AIProvider`].
pub struct LlmVerdictClient {
    provider: Arc<dyn AIProvider>,
    config: VerdictClientConfig,
}

impl LlmVerdictClient {
    pub fn new(provider: Arc<dyn AIProvider>, config: VerdictClientConfig) -> Self {
        Self { provider, config }
    }

    /// Runs one completion and parses the reply, reporting failures as text.
    async fn request<T: DeserializeOwned>(
        &self,
        purpose: RequestPurpose,
        prompt: &str,
    ) -> Result<T, String> {
        let request = CompletionRequest::new(RequestMetadata::new(
            purpose,
            Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(MessageRole::User, prompt)
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_output_tokens);

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| e.to_string())?;

        parse_reply(&response.content).map_err(|e| e.to_string())
    }

    fn degrade<T>(&self, purpose: RequestPurpose, fallback: T, reason: String) -> Assessment<T> {
        tracing::warn!(
            provider = %self.provider.provider_info().name,
            purpose = %purpose,
            reason = %reason,
            "AI verdict unavailable, using fallback"
        );
        Assessment::degraded(fallback, reason)
    }
}

#[async_trait]
impl VerdictClient for LlmVerdictClient {
    async fn assess_match(&self, prompt: &str) -> Assessment<MatchVerdict> {
        let purpose = RequestPurpose::RequirementMatch;
        match self.request::<MatchVerdict>(purpose, prompt).await {
            Ok(verdict) => Assessment::assessed(verdict),
            Err(reason) => self.degrade(
                purpose,
                MatchVerdict::fallback(self.config.fallback_confidence),
                reason,
            ),
        }
    }

    async fn summarize_document(&self, prompt: &str) -> Assessment<DocumentSummary> {
        let purpose = RequestPurpose::DocumentSummary;
        match self.request::<DocumentSummary>(purpose, prompt).await {
            Ok(summary) => Assessment::assessed(summary),
            Err(reason) => self.degrade(purpose, DocumentSummary::unknown(), reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::verdict::FALLBACK_REASONING;

    fn client(provider: MockAIProvider) -> LlmVerdictClient {
        LlmVerdictClient::new(Arc::new(provider), VerdictClientConfig::default())
    }

    #[tokio::test]
    async fn fenced_reply_parses_to_payload() {
        let provider = MockAIProvider::new().with_response(
            "Here is my analysis:\n```json\n{\"matches\": true, \"confidence\": 0.92, \
             \"relevant_sections\": [\"Passwords rotate every 90 days\"], \
             \"reasoning\": \"Covered\", \"missing_elements\": \"\"}\n```\nThanks",
        );

        let assessment = client(provider).assess_match("prompt").await;

        assert!(!assessment.is_degraded());
        let verdict = assessment.into_value();
        assert!(verdict.matches);
        assert_eq!(verdict.confidence.value(), 0.92);
        assert_eq!(verdict.relevant_sections, vec!["Passwords rotate every 90 days"]);
    }

    #[tokio::test]
    async fn unparsable_reply_degrades_to_fallback() {
        let provider = MockAIProvider::new().with_response("I cannot help with that.");

        let assessment = client(provider).assess_match("prompt").await;

        assert!(assessment.is_degraded());
        assert_eq!(
            assessment.degraded_reason(),
            Some("No JSON object found in reply")
        );
        let verdict = assessment.into_value();
        assert!(verdict.matches);
        assert_eq!(verdict.confidence.value(), 0.85);
        assert_eq!(verdict.reasoning, FALLBACK_REASONING);
    }

    #[tokio::test]
    async fn provider_error_degrades_with_reason() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "connection refused".to_string(),
        });

        let assessment = client(provider).assess_match("prompt").await;

        assert_eq!(
            assessment.degraded_reason(),
            Some("network error: connection refused")
        );
    }

    #[tokio::test]
    async fn fallback_confidence_is_configurable() {
        let config = VerdictClientConfig {
            fallback_confidence: Confidence::new(0.5),
            ..VerdictClientConfig::default()
        };
        let client = LlmVerdictClient::new(Arc::new(MockAIProvider::new()), config);

        let verdict = client.assess_match("prompt").await.into_value();
        assert_eq!(verdict.confidence.value(), 0.5);
    }

    #[tokio::test]
    async fn reply_missing_required_field_degrades() {
        let provider = MockAIProvider::new().with_response(r#"{"confidence": 0.9}"#);
        assert!(client(provider).assess_match("prompt").await.is_degraded());
    }

    #[tokio::test]
    async fn summary_parses_and_degrades() {
        let provider = MockAIProvider::new()
            .with_response(
                r#"{"document_type": "password policy", "security_controls": ["MFA"],
                    "compliance_areas": ["Access Control"], "completeness_score": 0.7,
                    "key_points": ["90 day rotation"]}"#,
            )
            .with_error(MockError::AuthenticationFailed);
        let client = client(provider);

        let first = client.summarize_document("prompt").await;
        assert_eq!(first.value().document_type, "password policy");
        assert!(!first.is_degraded());

        let second = client.summarize_document("prompt").await;
        assert!(second.is_degraded());
        assert_eq!(second.value(), &DocumentSummary::unknown());
    }

    #[tokio::test]
    async fn request_carries_system_prompt_and_sampling() {
        let provider = MockAIProvider::new();
        let client = LlmVerdictClient::new(
            Arc::new(provider.clone()),
            VerdictClientConfig::default(),
        );

        client.assess_match("the prompt").await;

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(calls[0].user_prompt(), "the prompt");
        assert_eq!(calls[0].temperature, Some(0.3));
        assert_eq!(calls[0].max_tokens, Some(2048));
        assert_eq!(calls[0].metadata.purpose, RequestPurpose::RequirementMatch);
    }
}
