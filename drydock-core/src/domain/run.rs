//! Pipeline run domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::stage::{self, StageName};

/// Overall state of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Pending,
    Running,
    Success,
    Failed,
}

/// State of a single stage within a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageState {
    #[default]
    Pending,
    Running,
    Complete,
    Failed,
}

/// Per-stage observation within a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStatus {
    pub state: StageState,
    /// 0-100
    pub progress_percent: u8,
}

/// Pipeline run record
///
/// Created by a trigger, mutated only by the advancement engine, and
/// retired into history once it reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub overall: RunState,
    /// Last stage touched by the advancement engine
    pub current_stage: Option<StageName>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
    pub duration_ms: Option<u64>,
    /// One entry per catalog stage, fixed key set for the run's lifetime
    pub stage_statuses: BTreeMap<StageName, StageStatus>,
}

impl Run {
    /// Creates a pending run with a fresh short identifier and every
    /// catalog stage at pending/0.
    pub fn new() -> Self {
        let stage_statuses = stage::stages()
            .iter()
            .map(|s| (s.name, StageStatus::default()))
            .collect();

        Self {
            id: Uuid::new_v4().to_string()[..8].to_string(),
            overall: RunState::Pending,
            current_stage: None,
            started_at: chrono::Utc::now(),
            ended_at: None,
            duration_ms: None,
            stage_statuses,
        }
    }

    /// Whether this run is still being advanced.
    pub fn is_active(&self) -> bool {
        self.overall == RunState::Running
    }

    /// Marks the run as running and stamps its start time.
    pub fn start(&mut self) {
        self.overall = RunState::Running;
        self.started_at = chrono::Utc::now();
    }

    /// Updates one stage's status. Never grows the key set.
    pub fn set_stage(&mut self, name: StageName, state: StageState, progress_percent: u8) {
        if let Some(status) = self.stage_statuses.get_mut(&name) {
            status.state = state;
            status.progress_percent = progress_percent;
        }
    }

    /// Marks a stage as finished.
    pub fn complete_stage(&mut self, name: StageName) {
        self.set_stage(name, StageState::Complete, 100);
    }

    /// Marks the in-flight stage as failed, keeping its last observed
    /// progress. Stages that already completed are left untouched.
    pub fn fail_current_stage(&mut self) {
        if let Some(name) = self.current_stage {
            if let Some(status) = self.stage_statuses.get_mut(&name) {
                if status.state == StageState::Running {
                    status.state = StageState::Failed;
                }
            }
        }
    }

    /// Moves the run to a terminal state, stamping its end time and
    /// total duration. Called exactly once per run.
    pub fn finish(&mut self, terminal: RunState, duration_ms: u64) {
        self.overall = terminal;
        self.ended_at = Some(chrono::Utc::now());
        self.duration_ms = Some(duration_ms);
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::new()
    }
}
