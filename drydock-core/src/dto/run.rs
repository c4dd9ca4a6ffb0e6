//! Run DTOs for the status, trigger and stages endpoints

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::run::{Run, StageStatus};
use crate::domain::stage::StageName;

/// Response to a successful trigger request
#[derive(Debug, Clone, Serialize)]
pub struct TriggerReceipt {
    pub success: bool,
    pub message: String,
    pub run_id: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl TriggerReceipt {
    pub fn for_run(run: &Run) -> Self {
        Self {
            success: true,
            message: "Pipeline run triggered".to_string(),
            run_id: run.id.clone(),
            started_at: run.started_at,
        }
    }
}

/// Status payload: the live run when one is active, an idle marker otherwise
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PipelineStatus {
    Active(Run),
    Idle { status: String, message: String },
}

impl PipelineStatus {
    pub fn idle() -> Self {
        Self::Idle {
            status: "IDLE".to_string(),
            message: "No pipeline run is currently active".to_string(),
        }
    }
}

/// Stage-level view of the current run
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StageReport {
    Active {
        current_stage: Option<StageName>,
        stages: BTreeMap<StageName, StageStatus>,
    },
    Idle {
        message: String,
    },
}

impl StageReport {
    pub fn idle() -> Self {
        Self::Idle {
            message: "No active pipeline run".to_string(),
        }
    }
}

impl From<Run> for StageReport {
    fn from(run: Run) -> Self {
        Self::Active {
            current_stage: run.current_stage,
            stages: run.stage_statuses,
        }
    }
}
