use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
/// `api_key_configured` is informational; a missing key only fails evaluations.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "job-aligner",
        "model": MODEL,
        "api_key_configured": state.config.google_api_key.is_some()
    }))
}
