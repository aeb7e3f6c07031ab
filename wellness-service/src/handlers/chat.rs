use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

use super::decode_body;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::normalizer::{require_text, MESSAGE_REQUIRED};
use crate::startup::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request: ChatRequest = decode_body(&body)?;
    let message = match require_text(request.message.as_deref(), MESSAGE_REQUIRED) {
        Ok(message) => message,
        Err(e) => {
            return Ok(Json(ChatResponse::Rejected {
                error: e.to_string(),
            }))
        }
    };

    let response = match state.companion.chat(&message).await {
        Ok(outcome) => ChatResponse::Reply {
            reply: outcome.into_reply(),
        },
        // No supportive fallback text here, unlike journal and tips.
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            ChatResponse::failed(e.to_string())
        }
    };

    Ok(Json(response))
}
