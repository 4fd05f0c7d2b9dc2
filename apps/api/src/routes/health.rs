use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and which generator backs the plan and kit routes.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "generator": state.generator.name(),
        "generationMode": state.config.generation_mode.as_str(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
