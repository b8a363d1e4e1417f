//! Sweep execution.
//!
//! Each grid cell is a fresh controller + engine pair fed clones of the
//! shared demand schedules, so cells are fully independent.  With the
//! `parallel` feature the cells run on Rayon's thread pool; results come
//! back in grid order either way.

use tidal_control::{LaneController, NoopObserver, RunSummary};
use tidal_flow::FlowSchedule;
use tidal_output::total_time_loss;
use tidal_sim::{EngineConfig, SegmentEngine};

use crate::error::SweepError;
use crate::grid::{ParamGrid, RunSpec};

// ── SweepOutcome ──────────────────────────────────────────────────────────────

/// The result of one grid cell.
#[derive(Clone, Debug)]
pub struct SweepOutcome {
    pub run_code: String,
    pub summary: RunSummary,
    /// Completed trips over the run.
    pub trips: usize,
    /// Summed vehicular time loss, the quantity sweeps compare.
    pub total_time_loss: u64,
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// Run one specification against fresh copies of the demand schedules.
pub fn run_spec(
    spec: &RunSpec,
    left: &FlowSchedule,
    right: &FlowSchedule,
    engine_config: EngineConfig,
) -> Result<SweepOutcome, SweepError> {
    let mut engine = SegmentEngine::new(engine_config, left.clone(), right.clone())?;
    let mut controller = LaneController::new(spec.config.clone())?;
    let summary = controller.run(&mut engine, &mut NoopObserver)?;

    let trips = engine.into_trips();
    Ok(SweepOutcome {
        run_code: spec.run_code(),
        summary,
        trips: trips.len(),
        total_time_loss: total_time_loss(&trips),
    })
}

/// Run every cell of `grid`, in grid order.
///
/// Fails on the first cell that errors; a sweep with a broken configuration
/// is not worth completing.
pub fn run_grid(
    grid: &ParamGrid,
    left: &FlowSchedule,
    right: &FlowSchedule,
    engine_config: EngineConfig,
) -> Result<Vec<SweepOutcome>, SweepError> {
    let specs = grid.specs();

    #[cfg(not(feature = "parallel"))]
    {
        specs
            .iter()
            .map(|spec| run_spec(spec, left, right, engine_config))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        specs
            .par_iter()
            .map(|spec| run_spec(spec, left, right, engine_config))
            .collect()
    }
}

/// Run the baseline and both control references.
pub fn run_references(
    left: &FlowSchedule,
    right: &FlowSchedule,
    engine_config: EngineConfig,
) -> Result<Vec<SweepOutcome>, SweepError> {
    let mut specs = vec![crate::grid::baseline_spec()];
    specs.extend(crate::grid::control_specs());
    specs
        .iter()
        .map(|spec| run_spec(spec, left, right, engine_config))
        .collect()
}
