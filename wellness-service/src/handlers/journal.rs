use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

use super::decode_body;
use crate::models::{JournalRequest, JournalResponse};
use crate::services::normalizer::{require_text, JOURNAL_ENTRY_REQUIRED};
use crate::startup::AppState;

#[tracing::instrument(skip(state, body))]
pub async fn journal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JournalResponse>, AppError> {
    let request: JournalRequest = decode_body(&body)?;
    let entry = match require_text(request.entry.as_deref(), JOURNAL_ENTRY_REQUIRED) {
        Ok(entry) => entry,
        Err(e) => {
            return Ok(Json(JournalResponse::Rejected {
                error: e.to_string(),
            }))
        }
    };

    let response = match state.companion.reflect_on_entry(&entry).await {
        Ok(ai_response) => JournalResponse::Reflected { entry, ai_response },
        Err(e) => {
            tracing::error!(error = %e, "Journal reflection failed, serving fallback");
            JournalResponse::fallback(entry, e.to_string())
        }
    };

    Ok(Json(response))
}
