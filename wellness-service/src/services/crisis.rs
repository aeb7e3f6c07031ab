//! Crisis screening for chat messages.
//!
//! Screening runs before any provider call. A flagged message is answered
//! with a fixed redirect to human help and never reaches the provider.

/// Substrings that flag a message, matched against the lowercased text.
pub const DEFAULT_CRISIS_TERMS: [&str; 6] =
    ["suicid", "kill", "die", "end it", "hurt myself", "harm"];

/// Fixed reply sent instead of a model completion when a message is flagged.
pub const CRISIS_REPLY: &str = "I\u{2019}m really sorry you\u{2019}re feeling this way. \
I\u{2019}m not a mental health professional, but you deserve immediate care. \
Please reach out to someone you trust and consider contacting local emergency \
services if you may be in danger.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrisisAssessment {
    Clear,
    Flagged { term: String },
}

impl CrisisAssessment {
    pub fn is_flagged(&self) -> bool {
        matches!(self, CrisisAssessment::Flagged { .. })
    }
}

/// Pluggable screening policy for chat input.
pub trait CrisisPolicy: Send + Sync {
    fn assess(&self, message: &str) -> CrisisAssessment;

    /// Reply served for a flagged message.
    fn crisis_reply(&self) -> &str {
        CRISIS_REPLY
    }
}

/// Case-insensitive substring match against a fixed term list.
///
/// Blunt on purpose: "diet" trips "die", and paraphrased distress slips
/// through. Swap in a different [`CrisisPolicy`] to do better.
#[derive(Debug, Clone)]
pub struct SubstringCrisisPolicy {
    terms: Vec<String>,
}

impl SubstringCrisisPolicy {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for SubstringCrisisPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CRISIS_TERMS)
    }
}

impl CrisisPolicy for SubstringCrisisPolicy {
    fn assess(&self, message: &str) -> CrisisAssessment {
        let lowered = message.to_lowercase();
        self.terms
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(|term| CrisisAssessment::Flagged { term: term.clone() })
            .unwrap_or(CrisisAssessment::Clear)
    }
}
