//! Prompt → provider → shaper pipeline for each companion intent.
//!
//! The companion holds no per-request state. Fallback decisions belong to
//! the HTTP handlers, which see the [`WellnessError`] returned here.

use std::sync::Arc;

use super::crisis::{CrisisAssessment, CrisisPolicy};
use super::prompts;
use super::providers::{
    CompletionRequest, FinishReason, ProviderError, ProviderResponse, TextProvider,
};
use super::shaper;
use crate::error::WellnessError;
use crate::models::{JournalReflection, Tips};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Model text, passed through verbatim.
    Reply(String),
    /// The crisis policy flagged the message; the provider was not called.
    CrisisRedirect(String),
}

impl ChatOutcome {
    pub fn into_reply(self) -> String {
        match self {
            ChatOutcome::Reply(text) | ChatOutcome::CrisisRedirect(text) => text,
        }
    }
}

#[derive(Clone)]
pub struct Companion {
    provider: Arc<dyn TextProvider>,
    crisis_policy: Arc<dyn CrisisPolicy>,
}

impl Companion {
    pub fn new(provider: Arc<dyn TextProvider>, crisis_policy: Arc<dyn CrisisPolicy>) -> Self {
        Self {
            provider,
            crisis_policy,
        }
    }

    /// Reflect on an already-normalized journal entry.
    pub async fn reflect_on_entry(&self, entry: &str) -> Result<JournalReflection, WellnessError> {
        let response = self.generate("journal", &prompts::journal_prompt(entry)).await?;

        tracing::debug!(
            entry_len = entry.len(),
            output_tokens = response.output_tokens,
            "Journal reflection generated"
        );

        Ok(shaper::parse_journal_reply(&response.text))
    }

    /// Answer an already-normalized chat message, screening it first.
    pub async fn chat(&self, message: &str) -> Result<ChatOutcome, WellnessError> {
        if let CrisisAssessment::Flagged { term } = self.crisis_policy.assess(message) {
            tracing::warn!(
                term = %term,
                message_len = message.len(),
                "Crisis term detected; skipping provider"
            );
            return Ok(ChatOutcome::CrisisRedirect(
                self.crisis_policy.crisis_reply().to_string(),
            ));
        }

        let response = self.generate("chat", &prompts::chat_prompt(message)).await?;

        tracing::debug!(
            message_len = message.len(),
            output_tokens = response.output_tokens,
            "Chat reply generated"
        );

        Ok(ChatOutcome::Reply(response.text))
    }

    /// Today's tips, as parsed from the provider's JSON.
    pub async fn daily_tips(&self) -> Result<Tips, WellnessError> {
        let response = self.generate("tips", &prompts::tips_prompt()).await?;
        Ok(shaper::parse_tips(&response.text)?)
    }

    /// Truncated replies are still used; the shaper fills what is missing.
    async fn generate(
        &self,
        intent: &'static str,
        request: &CompletionRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        let response = self.provider.generate(request).await?;

        if response.finish_reason == FinishReason::Length {
            tracing::warn!(
                intent,
                output_tokens = response.output_tokens,
                "Provider reply hit the output token limit"
            );
        }

        Ok(response)
    }

    pub async fn provider_health(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::crisis::{SubstringCrisisPolicy, CRISIS_REPLY};
    use crate::services::providers::mock::MockTextProvider;

    fn companion(provider: Arc<MockTextProvider>) -> Companion {
        Companion::new(provider, Arc::new(SubstringCrisisPolicy::default()))
    }

    #[tokio::test]
    async fn crisis_message_never_reaches_provider() {
        let provider = Arc::new(MockTextProvider::replying("should not be used"));
        let outcome = companion(provider.clone())
            .chat("Sometimes I want to end it all")
            .await
            .unwrap();

        assert_eq!(outcome, ChatOutcome::CrisisRedirect(CRISIS_REPLY.to_string()));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn chat_reply_is_verbatim() {
        let raw = "  Hello friend!\n\nTry a short walk.  ";
        let provider = Arc::new(MockTextProvider::replying(raw));
        let outcome = companion(provider.clone()).chat("I feel low").await.unwrap();

        assert_eq!(outcome, ChatOutcome::Reply(raw.to_string()));
        assert_eq!(provider.call_count(), 1);
        assert!(provider.requests()[0].parts[0].ends_with("User: I feel low"));
    }

    #[tokio::test]
    async fn journal_provider_error_propagates() {
        let provider = Arc::new(MockTextProvider::failing("upstream down"));
        let err = companion(provider)
            .reflect_on_entry("hello")
            .await
            .unwrap_err();

        assert!(matches!(err, WellnessError::Provider(_)));
        assert_eq!(err.to_string(), "API error: upstream down");
    }

    #[tokio::test]
    async fn tips_parse_error_is_reported() {
        let provider = Arc::new(MockTextProvider::replying("not json"));
        let err = companion(provider).daily_tips().await.unwrap_err();
        assert!(matches!(err, WellnessError::Parse(_)));
    }

    #[tokio::test]
    async fn truncated_journal_reply_is_still_shaped() {
        let provider = Arc::new(
            MockTextProvider::replying("Reflection: You had a long day.\nEncouragement: You")
                .finishing_with(FinishReason::Length),
        );
        let reflection = companion(provider).reflect_on_entry("hello").await.unwrap();

        assert_eq!(reflection.reflection, "You had a long day.");
        assert_eq!(reflection.encouragement, "You");
        assert_eq!(reflection.prompt, "");
        assert_eq!(reflection.tip, "");
    }

    #[tokio::test]
    async fn truncated_tips_json_is_a_parse_error() {
        let provider = Arc::new(
            MockTextProvider::replying(r#"{"mindfulness":"Breathe"#)
                .finishing_with(FinishReason::Length),
        );
        let err = companion(provider).daily_tips().await.unwrap_err();
        assert!(matches!(err, WellnessError::Parse(_)));
    }

    #[test]
    fn both_outcomes_yield_their_text() {
        assert_eq!(ChatOutcome::Reply("a".to_string()).into_reply(), "a");
        assert_eq!(
            ChatOutcome::CrisisRedirect("b".to_string()).into_reply(),
            "b"
        );
    }
}
