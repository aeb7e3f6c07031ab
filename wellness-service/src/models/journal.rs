use serde::{Deserialize, Serialize};

use super::PROVIDER_ERROR_MESSAGE;

/// Body of `POST /api/journal`. A missing or `null` entry counts as empty.
#[derive(Debug, Default, Deserialize)]
pub struct JournalRequest {
    #[serde(default)]
    pub entry: Option<String>,
}

/// The four-part companion reply to a journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalReflection {
    pub reflection: String,
    pub encouragement: String,
    pub prompt: String,
    pub tip: String,
}

impl JournalReflection {
    /// Pre-authored reply served when the provider is unavailable.
    pub fn fallback() -> Self {
        Self {
            reflection: "You expressed yourself honestly.".to_string(),
            encouragement: "It\u{2019}s brave to write down your feelings.".to_string(),
            prompt: "What helped you cope today?".to_string(),
            tip: "Take a short walk to clear your mind.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JournalResponse {
    Reflected {
        entry: String,
        ai_response: JournalReflection,
    },
    Fallback {
        error: String,
        details: String,
        entry: String,
        ai_response: JournalReflection,
    },
    Rejected {
        error: String,
    },
}

impl JournalResponse {
    pub fn fallback(entry: String, details: String) -> Self {
        JournalResponse::Fallback {
            error: PROVIDER_ERROR_MESSAGE.to_string(),
            details,
            entry,
            ai_response: JournalReflection::fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_entry_deserializes_as_none() {
        let request: JournalRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.entry.is_none());

        let request: JournalRequest = serde_json::from_value(json!({ "entry": null })).unwrap();
        assert!(request.entry.is_none());
    }

    #[test]
    fn fallback_response_carries_entry_and_static_reply() {
        let body = serde_json::to_value(JournalResponse::fallback(
            "rough day".to_string(),
            "Network error: timed out".to_string(),
        ))
        .unwrap();

        assert_eq!(body["error"], "Gemini API error");
        assert_eq!(body["details"], "Network error: timed out");
        assert_eq!(body["entry"], "rough day");
        assert_eq!(body["ai_response"]["prompt"], "What helped you cope today?");
    }

    #[test]
    fn rejected_response_has_only_error() {
        let body = serde_json::to_value(JournalResponse::Rejected {
            error: "Journal entry required".to_string(),
        })
        .unwrap();

        assert_eq!(body, json!({ "error": "Journal entry required" }));
    }
}
