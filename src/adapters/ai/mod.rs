//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port, plus the verdict client that
//! turns raw completions into structured verdicts.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default backend)
//! - `OpenAIProvider` - OpenAI chat models
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmVerdictClient` - VerdictClient over any AIProvider, with fallback

mod gemini_provider;
mod http_errors;
mod mock_provider;
mod openai_provider;
mod verdict_client;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use verdict_client::{LlmVerdictClient, VerdictClientConfig};
