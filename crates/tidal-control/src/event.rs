//! Reversal records and the end-of-run summary.

use std::fmt;

use tidal_core::{Direction, Tick};

// ── ReversalEvent ─────────────────────────────────────────────────────────────

/// One completed reversal, appended to the controller's ordered event log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReversalEvent {
    /// Tick at which the decision fired and the losing lane was closed.
    pub trigger_tick: Tick,

    /// The direction that gained the shared lane.
    pub gained_by: Direction,

    /// Ticks spent waiting for the closing lane to empty.
    pub drain_ticks: u64,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// End-of-run statistics, emitted once per run for downstream aggregation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Tick count at which demand was exhausted.
    pub final_tick: Tick,

    /// Completed reversals over the run.
    pub reversals: u32,

    /// Drain ticks summed over all reversals.
    pub total_drain_ticks: u64,
}

impl RunSummary {
    /// Mean drain duration per reversal, or `None` for a run with no
    /// reversals.
    pub fn mean_drain_ticks(&self) -> Option<f64> {
        if self.reversals == 0 {
            None
        } else {
            Some(self.total_drain_ticks as f64 / self.reversals as f64)
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "final tick {}, {} reversals, {} drain ticks total",
            self.final_tick, self.reversals, self.total_drain_ticks
        )?;
        if let Some(mean) = self.mean_drain_ticks() {
            write!(f, " ({mean:.1} mean)")?;
        }
        Ok(())
    }
}
