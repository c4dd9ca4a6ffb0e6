//! Pipeline API Handlers
//!
//! HTTP endpoints for triggering and observing pipeline runs.

use axum::{Json, extract::State};

use drydock_core::domain::run::Run;
use drydock_core::dto::run::{PipelineStatus, StageReport, TriggerReceipt};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::tracker::TriggerError;

/// GET /api/pipeline/status
/// Current run snapshot, or an idle payload when nothing is active
pub async fn pipeline_status(State(state): State<AppState>) -> Json<PipelineStatus> {
    tracing::debug!("Reporting pipeline status");

    match state.tracker.current_run() {
        Some(run) => Json(PipelineStatus::Active(run)),
        None => Json(PipelineStatus::idle()),
    }
}

/// POST /api/pipeline/trigger
/// Trigger a new pipeline run
pub async fn trigger_pipeline(State(state): State<AppState>) -> ApiResult<Json<TriggerReceipt>> {
    tracing::info!("Pipeline trigger requested");

    let run = state.tracker.trigger().map_err(|e| match e {
        TriggerError::AlreadyRunning => {
            ApiError::Conflict("A pipeline run is already in progress".to_string())
        }
    })?;

    Ok(Json(TriggerReceipt::for_run(&run)))
}

/// GET /api/pipeline/history
/// Recent terminal runs, newest first
pub async fn pipeline_history(State(state): State<AppState>) -> Json<Vec<Run>> {
    tracing::debug!("Listing run history");

    Json(state.tracker.history())
}

/// GET /api/pipeline/stages
/// Stage statuses of the current run
pub async fn stage_report(State(state): State<AppState>) -> Json<StageReport> {
    tracing::debug!("Reporting stage statuses");

    match state.tracker.current_run() {
        Some(run) => Json(StageReport::from(run)),
        None => Json(StageReport::idle()),
    }
}
