use axum::{extract::State, Json};

use crate::models::Tips;
use crate::startup::AppState;

/// Always answers with four tips; any failure is hidden behind the defaults.
#[tracing::instrument(skip(state))]
pub async fn tips(State(state): State<AppState>) -> Json<Tips> {
    let tips = state.companion.daily_tips().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Tips generation failed, serving defaults");
        Tips::default()
    });

    Json(tips)
}
