//! Completion provider abstraction.
//!
//! Handlers only see [`TextProvider`], so the Gemini backend can be swapped
//! for the mock in tests or another vendor later.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    /// Cut off at the provider's output token limit.
    Length,
    ContentFilter,
}

/// Text produced by a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    pub finish_reason: FinishReason,
}

/// Generation parameters for a completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationParams {
    /// Ask the provider to emit `application/json`.
    pub json_output: bool,
}

/// A prompt ready to send: one or more text parts in a single user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub parts: Vec<String>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(parts: Vec<String>) -> Self {
        Self {
            parts,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// All parts joined, mostly useful for logging and assertions.
    pub fn full_text(&self) -> String {
        self.parts.join("\n")
    }
}

/// Trait for text/JSON generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a single completion.
    async fn generate(&self, request: &CompletionRequest)
        -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
