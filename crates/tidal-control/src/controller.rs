//! The `LaneController` and its tick loop.

use tidal_core::{Direction, RunConfig, Tick};
use tidal_road::{LaneLayout, RoadControl, SimStepper};

use crate::allocation::LaneAllocation;
use crate::decision;
use crate::error::{ControlError, ControlResult};
use crate::event::{ReversalEvent, RunSummary};
use crate::observer::ControlObserver;
use crate::window::SamplingWindow;

/// The reversible-lane control loop.
///
/// Owns the lane-allocation state, the sampling window, and the reversal
/// log; drives any road that implements [`SimStepper`] + [`RoadControl`] in
/// strict lock-step — one decision evaluation (or skip) per tick, then
/// exactly one stepper advance.  Single-threaded by construction: nothing
/// here is shared, and the drain-wait inside a reversal blocks the decision
/// logic (not the simulation) until the closing lane is empty.
pub struct LaneController {
    config: RunConfig,
    layout: LaneLayout,
    allocation: LaneAllocation,
    window: SamplingWindow,
    tick: Tick,
    events: Vec<ReversalEvent>,
}

impl LaneController {
    /// Validate `config` and set up the initial allocation.
    pub fn new(config: RunConfig) -> ControlResult<Self> {
        config.validate()?;
        let allocation = LaneAllocation::initial(&config);
        let window = SamplingWindow::new(config.period);
        Ok(Self {
            config,
            layout: LaneLayout::default(),
            allocation,
            window,
            tick: Tick::ZERO,
            events: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The current lane allocation.
    pub fn allocation(&self) -> LaneAllocation {
        self.allocation
    }

    /// Ticks stepped so far (main loop and drain-waits combined).
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Completed reversals, in trigger order.
    pub fn events(&self) -> &[ReversalEvent] {
        &self.events
    }

    /// The end-of-run summary for the ticks stepped so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            final_tick: self.tick,
            reversals: self.events.len() as u32,
            total_drain_ticks: self.events.iter().map(|e| e.drain_ticks).sum(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the control loop until the road reports no pending demand.
    ///
    /// Per tick: sample approach densities into the window (unless lane
    /// changing is disabled), evaluate the decision rule when the window
    /// fills, then advance the stepper.  A triggered reversal runs its
    /// drain-wait inline before the loop resumes.
    pub fn run<T, O>(&mut self, road: &mut T, observer: &mut O) -> ControlResult<RunSummary>
    where
        T: SimStepper + RoadControl,
        O: ControlObserver,
    {
        self.apply_initial_access(road);

        while road.has_pending_demand() {
            if !self.config.disable_lane_changing {
                let left = road.approach_vehicle_count(Direction::Left);
                let right = road.approach_vehicle_count(Direction::Right);
                self.window.record(left, right);

                if self.window.is_full() {
                    if let Some(gaining) =
                        decision::evaluate(&self.window, self.config.threshold, self.allocation)
                    {
                        let event = self.reverse_toward(road, gaining, observer)?;
                        observer.on_reversal_complete(&event);
                        self.events.push(event);
                    }
                    self.window.reset();
                }
            }

            road.advance_one_tick();
            self.tick = self.tick + 1;
            observer.on_tick_end(self.tick);
        }

        let summary = self.summary();
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Lane access setup ─────────────────────────────────────────────────

    /// Open the fixed outer lanes to both directions and set the shared
    /// lane per the initial allocation.
    fn apply_initial_access<T: RoadControl>(&self, road: &mut T) {
        let shared = self.layout.shared_lane();
        for lane in self.layout.lanes() {
            for direction in Direction::BOTH {
                road.set_lane_access(direction, lane, true);
            }
        }
        match self.allocation.wide_direction() {
            Some(wide) => road.set_lane_access(wide.opposite(), shared, false),
            // Balanced baseline: both shared slots stay open.
            None => {}
        }
    }

    // ── Reversal procedure ────────────────────────────────────────────────

    /// Hand the shared lane to `gaining`: close the opposite direction's
    /// shared lane, drain it, flip the allocation, and re-grant.
    ///
    /// The drain-wait guarantees no vehicle is ever left travelling in a
    /// lane whose direction has just been reassigned.  It has no bound
    /// unless `drain_timeout_ticks` is set: a permanently blocked lane
    /// drains forever.
    pub(crate) fn reverse_toward<T, O>(
        &mut self,
        road: &mut T,
        gaining: Direction,
        observer: &mut O,
    ) -> ControlResult<ReversalEvent>
    where
        T: SimStepper + RoadControl,
        O: ControlObserver,
    {
        let losing = gaining.opposite();
        let shared = self.layout.shared_lane();

        // The allocation must say `losing` holds the shared lane.  Anything
        // else means the control state has diverged from the road; abort
        // rather than reassign a lane that was never ours to take.
        if self.allocation.wide_direction() != Some(losing) {
            return Err(ControlError::AllocationDesync {
                allocation: self.allocation,
                requested: gaining,
            });
        }

        let trigger_tick = self.tick;
        road.set_lane_access(losing, shared, false);
        observer.on_reversal_start(trigger_tick, gaining);

        // Drain-wait: step the simulation until the closing lane is empty.
        while road.lane_vehicle_count(losing, shared) > 0 {
            if let Some(limit) = self.config.drain_timeout_ticks {
                if self.tick - trigger_tick >= limit {
                    return Err(ControlError::DrainTimeout { direction: losing, limit });
                }
            }
            road.advance_one_tick();
            self.tick = self.tick + 1;
        }

        self.allocation = self.allocation.reversed_toward(gaining)?;
        road.set_lane_access(gaining, shared, true);

        Ok(ReversalEvent {
            trigger_tick,
            gained_by: gaining,
            drain_ticks: self.tick - trigger_tick,
        })
    }
}
