//! API Module
//!
//! HTTP API layer for the pipeline tracker.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod pipeline;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::service::tracker::ExecutionTracker;

/// Shared state injected into request handlers
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<ExecutionTracker>,
    pub config: Arc<Config>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome and health
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .route("/api/info", get(health::app_info))
        // Pipeline endpoints
        .route("/api/pipeline/status", get(pipeline::pipeline_status))
        .route("/api/pipeline/trigger", post(pipeline::trigger_pipeline))
        .route("/api/pipeline/history", get(pipeline::pipeline_history))
        .route("/api/pipeline/stages", get(pipeline::stage_report))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
