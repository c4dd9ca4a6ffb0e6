//! Pipeline execution tracker
//!
//! Owns the current-run slot and the bounded run history, and drives
//! stage advancement for the active run in a background task. Triggering
//! never waits for the run; readers never wait for advancement.

use std::sync::{Arc, Mutex};
use tokio::time::{self, Instant};
use tracing::{debug, error, info};

use drydock_core::domain::run::{Run, RunState, StageState};
use drydock_core::domain::stage;

/// Maximum number of terminal runs retained in history
const HISTORY_CAPACITY: usize = 10;

/// Number of progress ticks each stage is divided into
const TICKS_PER_STAGE: u32 = 10;

/// Service error type
#[derive(Debug, PartialEq, Eq)]
pub enum TriggerError {
    AlreadyRunning,
}

/// Internal fault during background advancement.
///
/// Caught inside the advancement task and converted into a failed run,
/// never propagated to callers.
#[derive(Debug)]
enum AdvancementError {
    RunDisplaced(String),
}

struct TrackerState {
    current: Option<Run>,
    history: Vec<Run>,
}

impl TrackerState {
    /// Retires the named current run into history with the given terminal
    /// state. A failed run's in-flight stage is marked failed at its last
    /// observed progress.
    fn retire(&mut self, run_id: &str, terminal: RunState, duration_ms: u64) {
        let mut run = match self.current.take() {
            Some(run) if run.id == run_id => run,
            other => {
                self.current = other;
                return;
            }
        };

        if terminal == RunState::Failed {
            run.fail_current_stage();
        }
        run.finish(terminal, duration_ms);

        self.history.insert(0, run);
        self.history.truncate(HISTORY_CAPACITY);
    }
}

/// Tracks pipeline runs: at most one active run plus a capped history.
///
/// All state lives behind one mutex; every critical section is a field
/// update or a clone, and the advancement task sleeps outside the lock.
pub struct ExecutionTracker {
    state: Arc<Mutex<TrackerState>>,
}

impl ExecutionTracker {
    /// Creates a tracker with no active run and empty history
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TrackerState {
                current: None,
                history: Vec::new(),
            })),
        }
    }

    /// Triggers a new pipeline run.
    ///
    /// Atomically checks that no run is active and installs the new run
    /// as current, then hands it to a background advancement task. The
    /// returned snapshot is the run's state at installation; callers do
    /// not wait for completion. Fails with `AlreadyRunning` (and no state
    /// change) when a run is already active.
    pub fn trigger(&self) -> Result<Run, TriggerError> {
        let run = {
            let mut state = self.state.lock().unwrap();
            if state.current.as_ref().is_some_and(Run::is_active) {
                return Err(TriggerError::AlreadyRunning);
            }

            let mut run = Run::new();
            run.start();
            state.current = Some(run.clone());
            run
        };

        info!("Pipeline run {} triggered", run.id);

        let state = Arc::clone(&self.state);
        let run_id = run.id.clone();
        tokio::spawn(async move {
            advance_run(state, run_id).await;
        });

        Ok(run)
    }

    /// Returns a snapshot of the active run, if any. Never blocks behind
    /// an in-progress tick.
    pub fn current_run(&self) -> Option<Run> {
        self.state.lock().unwrap().current.clone()
    }

    /// Returns a snapshot of the terminal runs, newest first, at most
    /// [`HISTORY_CAPACITY`] entries.
    pub fn history(&self) -> Vec<Run> {
        self.state.lock().unwrap().history.clone()
    }
}

impl Default for ExecutionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one run through every catalog stage, then retires it.
async fn advance_run(state: Arc<Mutex<TrackerState>>, run_id: String) {
    let started = Instant::now();

    let terminal = match walk_stages(&state, &run_id).await {
        Ok(()) => {
            info!("Pipeline run {} completed successfully", run_id);
            RunState::Success
        }
        Err(AdvancementError::RunDisplaced(id)) => {
            error!("Pipeline run {} displaced during advancement", id);
            RunState::Failed
        }
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    state.lock().unwrap().retire(&run_id, terminal, duration_ms);
}

/// Walks the stage catalog in order, one stage at a time.
///
/// Each stage runs as [`TICKS_PER_STAGE`] equal sleeps of a tenth of its
/// nominal duration, publishing progress after every tick. The next stage
/// starts only after the previous one is marked complete.
async fn walk_stages(
    state: &Mutex<TrackerState>,
    run_id: &str,
) -> Result<(), AdvancementError> {
    for entry in stage::stages() {
        debug!("Run {}: starting stage {}", run_id, entry.display_name);

        update_run(state, run_id, |run| {
            run.current_stage = Some(entry.name);
            run.set_stage(entry.name, StageState::Running, 0);
        })?;

        let tick = stage::nominal_duration(entry.name) / TICKS_PER_STAGE;
        for i in 1..=TICKS_PER_STAGE {
            time::sleep(tick).await;
            let progress = (i * 100 / TICKS_PER_STAGE) as u8;
            update_run(state, run_id, |run| {
                run.set_stage(entry.name, StageState::Running, progress);
            })?;
        }

        update_run(state, run_id, |run| run.complete_stage(entry.name))?;
    }

    Ok(())
}

/// Applies a mutation to the run being advanced, failing if it is no
/// longer the installed current run.
fn update_run(
    state: &Mutex<TrackerState>,
    run_id: &str,
    f: impl FnOnce(&mut Run),
) -> Result<(), AdvancementError> {
    let mut guard = state.lock().unwrap();
    match guard.current.as_mut() {
        Some(run) if run.id == run_id => {
            f(run);
            Ok(())
        }
        _ => Err(AdvancementError::RunDisplaced(run_id.to_string())),
    }
}
