//! Plain data row types written by output backends.

use tidal_control::{ReversalEvent, RunSummary};
use tidal_sim::TripRecord;

/// One completed traversal of the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub vehicle_id: u32,
    pub direction: &'static str,
    pub depart_tick: u64,
    pub entry_tick: u64,
    pub exit_tick: u64,
    pub time_loss_ticks: u64,
}

impl From<&TripRecord> for TripRow {
    fn from(trip: &TripRecord) -> Self {
        Self {
            vehicle_id: trip.vehicle.0,
            direction: trip.direction.as_str(),
            depart_tick: trip.depart_tick.0,
            entry_tick: trip.entry_tick.0,
            exit_tick: trip.exit_tick.0,
            time_loss_ticks: trip.time_loss_ticks,
        }
    }
}

/// One completed lane reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReversalRow {
    pub trigger_tick: u64,
    pub gained_by: &'static str,
    pub drain_ticks: u64,
}

impl From<&ReversalEvent> for ReversalRow {
    fn from(event: &ReversalEvent) -> Self {
        Self {
            trigger_tick: event.trigger_tick.0,
            gained_by: event.gained_by.as_str(),
            drain_ticks: event.drain_ticks,
        }
    }
}

/// End-of-run statistics for one run of the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummaryRow {
    /// Run label, e.g. `P10-T0.5` or `Baseline`.
    pub run_code: String,
    pub final_tick: u64,
    pub reversals: u32,
    pub total_drain_ticks: u64,
    /// Empty in the output for a run with no reversals.
    pub mean_drain_ticks: Option<f64>,
}

impl RunSummaryRow {
    pub fn new(run_code: impl Into<String>, summary: &RunSummary) -> Self {
        Self {
            run_code: run_code.into(),
            final_tick: summary.final_tick.0,
            reversals: summary.reversals,
            total_drain_ticks: summary.total_drain_ticks,
            mean_drain_ticks: summary.mean_drain_ticks(),
        }
    }
}
