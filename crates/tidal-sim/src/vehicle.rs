//! Vehicle records kept by the segment engine.

use tidal_core::{Direction, Tick, VehicleId};

// ── QueuedVehicle ─────────────────────────────────────────────────────────────

/// A vehicle waiting on a feeder approach for an open lane with capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueuedVehicle {
    pub id: VehicleId,
    pub direction: Direction,
    /// Tick at which the vehicle appeared on the approach.
    pub depart_tick: Tick,
}

// ── ActiveVehicle ─────────────────────────────────────────────────────────────

/// A vehicle currently traversing one lane of the segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActiveVehicle {
    pub id: VehicleId,
    pub direction: Direction,
    pub depart_tick: Tick,
    /// Tick at which the vehicle entered the segment.
    pub entry_tick: Tick,
    /// Tick at which the vehicle will leave the segment.
    pub exit_tick: Tick,
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One completed traversal, appended to the engine's trip log.
///
/// `time_loss_ticks` is the delay against an unimpeded run: queue wait on
/// the approach plus the congestion surcharge inside the segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TripRecord {
    pub vehicle: VehicleId,
    pub direction: Direction,
    pub depart_tick: Tick,
    pub entry_tick: Tick,
    pub exit_tick: Tick,
    pub time_loss_ticks: u64,
}
