use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionRequest {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Serialize)]
pub struct TestConnectionResponse {
    pub ok: bool,
}

/// POST /api/v1/ai/test
/// Connection probe for the settings surface: exercises the full key and
/// model fallback chain with a trivial prompt.
pub async fn handle_test_connection(
    State(state): State<AppState>,
    Json(req): Json<TestConnectionRequest>,
) -> Result<Json<TestConnectionResponse>, AppError> {
    state.ai.test_connection(req.api_key.as_deref()).await?;
    Ok(Json(TestConnectionResponse { ok: true }))
}
