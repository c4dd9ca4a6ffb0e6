//! Health and Metadata API Handlers
//!
//! Liveness endpoint plus descriptive application metadata, unrelated to
//! execution state.

use axum::{Json, extract::State};
use drydock_core::dto::info::AppInfo;
use serde_json::{Value, json};

use crate::api::AppState;

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api/info
/// Application metadata
pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(AppInfo {
        application_name: "Drydock".to_string(),
        version: state.config.app_version.clone(),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        description: "Simulated CI/CD pipeline tracker with staged progress reporting"
            .to_string(),
    })
}

/// GET /
/// Welcome payload with the endpoint map
pub async fn welcome(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Welcome to Drydock!",
        "version": state.config.app_version,
        "environment": state.config.environment,
        "endpoints": [
            "/health - Health check",
            "/api/info - Application metadata",
            "/api/pipeline/status - Current run status",
            "/api/pipeline/trigger - Trigger a new run",
            "/api/pipeline/history - Recent terminal runs",
            "/api/pipeline/stages - Stage-level view of the current run",
        ],
    }))
}
