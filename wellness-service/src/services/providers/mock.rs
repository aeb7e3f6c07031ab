//! Mock provider implementation for testing.

use super::{CompletionRequest, FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock text provider that records every request it receives.
///
/// Replies are served in turn (wrapping around), so repeated identical
/// requests can observe different outputs.
pub struct MockTextProvider {
    replies: Vec<String>,
    failure: Option<String>,
    finish_reason: FinishReason,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockTextProvider {
    /// Always answer with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::replying_in_turn(vec![reply.into()])
    }

    /// Answer with each of `replies` in order, wrapping around.
    pub fn replying_in_turn(replies: Vec<String>) -> Self {
        Self {
            replies,
            failure: None,
            finish_reason: FinishReason::Complete,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with an [`ProviderError::ApiError`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            replies: Vec::new(),
            failure: Some(message.into()),
            finish_reason: FinishReason::Complete,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Report `finish_reason` on every successful reply.
    pub fn finishing_with(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = finish_reason;
        self
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        request: &CompletionRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(message) = &self.failure {
            return Err(ProviderError::ApiError(message.clone()));
        }

        if self.replies.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        let text = self.replies[call % self.replies.len()].clone();

        Ok(ProviderResponse {
            input_tokens: request.full_text().len() as i32 / 4,
            output_tokens: text.len() as i32 / 4,
            text,
            finish_reason: self.finish_reason,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.failure {
            Some(message) => Err(ProviderError::NotConfigured(message.clone())),
            None => Ok(()),
        }
    }
}
