//! The two capability traits the lane controller drives.
//!
//! The controller never sees a concrete engine: it advances time through
//! [`SimStepper`] and reads/writes road state through [`RoadControl`].  Any
//! type implementing both — the in-process engine in `tidal-sim`, a bridge
//! to an external microscopic simulator, or a scripted test fake — can sit
//! behind the control loop unchanged.

use tidal_core::{Direction, LaneIndex};

/// Advances simulated time and reports remaining demand.
pub trait SimStepper {
    /// Advance simulated time by one fixed quantum.
    fn advance_one_tick(&mut self);

    /// `true` while any further vehicles remain to be simulated — either
    /// still scheduled for injection or currently on the road.  The control
    /// loop terminates when this returns `false`.
    fn has_pending_demand(&self) -> bool;
}

/// Per-approach observation and per-lane permission control.
pub trait RoadControl {
    /// Number of vehicles on the given direction's feeder approach this tick.
    fn approach_vehicle_count(&self, direction: Direction) -> u32;

    /// Number of vehicles currently occupying one specific lane.  Polled
    /// during a reversal's drain-wait.
    fn lane_vehicle_count(&self, direction: Direction, lane: LaneIndex) -> u32;

    /// Open (`allowed = true`) or close a lane to the given direction's
    /// traffic.  Closing stops new entrants only; vehicles already in the
    /// lane keep travelling until they leave it.
    fn set_lane_access(&mut self, direction: Direction, lane: LaneIndex, allowed: bool);
}
