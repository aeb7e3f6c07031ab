use serde::{Deserialize, Serialize};

use super::PROVIDER_ERROR_MESSAGE;

/// Body of `POST /api/chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Failed { error: String, details: String },
    Rejected { error: String },
}

impl ChatResponse {
    /// Provider failure. Unlike journal and tips, chat carries no fallback reply.
    pub fn failed(details: String) -> Self {
        ChatResponse::Failed {
            error: PROVIDER_ERROR_MESSAGE.to_string(),
            details,
        }
    }
}
