//! Control observer trait for progress reporting and data collection.

use tidal_core::{Direction, Tick};

use crate::event::{ReversalEvent, RunSummary};

/// Callbacks invoked by [`LaneController::run`][crate::LaneController::run]
/// at key points in the control loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — reversal printer
///
/// ```rust,ignore
/// struct ReversalPrinter;
///
/// impl ControlObserver for ReversalPrinter {
///     fn on_reversal_complete(&mut self, event: &ReversalEvent) {
///         println!("{}: shared lane to {} after {} drain ticks",
///             event.trigger_tick, event.gained_by, event.drain_ticks);
///     }
/// }
/// ```
pub trait ControlObserver {
    /// Called after each main-loop tick has been stepped.  Ticks consumed by
    /// a drain-wait are reported through the completed event instead.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called when a decision has fired, immediately after the closing lane
    /// has been shut to new entrants.
    fn on_reversal_start(&mut self, _tick: Tick, _gaining: Direction) {}

    /// Called once the drain has finished and the lane has been re-granted.
    fn on_reversal_complete(&mut self, _event: &ReversalEvent) {}

    /// Called once after demand is exhausted.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`ControlObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl ControlObserver for NoopObserver {}
