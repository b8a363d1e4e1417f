//! The segment engine: a queueing model of one reversible road segment.
//!
//! # Model
//!
//! Each direction has a feeder approach (a FIFO queue) and the lanes of its
//! carriageway.  Per tick, in order:
//!
//! 1. **Exits** — vehicles whose `exit_tick` has arrived leave the segment
//!    and become [`TripRecord`]s.
//! 2. **Injection** — each direction's [`FlowSchedule`] releases new
//!    vehicles onto its approach.
//! 3. **Entry** — queued vehicles enter the least-occupied *open* lane with
//!    spare capacity, bounded by the per-lane entry rate.  Traversal takes
//!    `free_flow_ticks` plus one tick per vehicle already in the chosen
//!    lane (the congestion surcharge).
//!
//! A closed lane admits no entrants but its occupants keep travelling until
//! they exit, which is exactly the drain behaviour a reversal relies on.
//! The engine is fully deterministic: FIFO queues, lowest-index tie-breaks,
//! and integer arithmetic only.

use std::collections::VecDeque;

use tidal_core::{Direction, LaneIndex, Tick, VehicleId};
use tidal_flow::FlowSchedule;
use tidal_road::{AccessState, LaneLayout, RoadControl, SimStepper};

use crate::error::{EngineError, EngineResult};
use crate::vehicle::{ActiveVehicle, QueuedVehicle, TripRecord};

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Physical parameters of the simulated segment.
#[derive(Copy, Clone, Debug)]
pub struct EngineConfig {
    /// Ticks an unimpeded vehicle needs to traverse the segment.
    pub free_flow_ticks: u64,

    /// Vehicles each open lane may admit per tick.
    pub entry_rate_per_lane: u32,

    /// Maximum vehicles simultaneously in one lane.
    pub lane_capacity: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // A ~1.5 km segment at signposted speed, admitting one vehicle per
        // lane per second (≈3600 veh/h/lane saturation flow).
        Self {
            free_flow_ticks: 90,
            entry_rate_per_lane: 1,
            lane_capacity: 120,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.free_flow_ticks == 0 {
            return Err(EngineError::ZeroFreeFlow);
        }
        if self.entry_rate_per_lane == 0 {
            return Err(EngineError::ZeroEntryRate);
        }
        if self.lane_capacity == 0 {
            return Err(EngineError::ZeroLaneCapacity);
        }
        Ok(())
    }
}

// ── SegmentEngine ─────────────────────────────────────────────────────────────

/// One carriageway's state: the approach queue plus per-lane occupants.
struct Carriageway {
    queue: VecDeque<QueuedVehicle>,
    lanes: Vec<Vec<ActiveVehicle>>,
}

impl Carriageway {
    fn new(lane_count: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            lanes: (0..lane_count).map(|_| Vec::new()).collect(),
        }
    }

    fn on_road(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }
}

/// The in-process road implementation driven by the lane controller.
pub struct SegmentEngine {
    config: EngineConfig,
    layout: LaneLayout,
    access: AccessState,
    /// Demand schedules indexed by `Direction::index()`.
    schedules: [FlowSchedule; 2],
    carriageways: [Carriageway; 2],
    tick: Tick,
    next_vehicle: u32,
    trips: Vec<TripRecord>,
}

impl SegmentEngine {
    /// Build an engine for one run.  All lanes start open; the controller
    /// applies the initial allocation before its first tick.
    pub fn new(
        config: EngineConfig,
        left: FlowSchedule,
        right: FlowSchedule,
    ) -> EngineResult<Self> {
        config.validate()?;
        let layout = LaneLayout::default();
        let lanes = layout.lanes_per_direction() as usize;
        Ok(Self {
            config,
            layout,
            access: AccessState::all_open(layout),
            schedules: [left, right],
            carriageways: [Carriageway::new(lanes), Carriageway::new(lanes)],
            tick: Tick::ZERO,
            next_vehicle: 0,
            trips: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Ticks stepped so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Completed traversals, in exit order.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Consume the engine, keeping only its trip log.
    pub fn into_trips(self) -> Vec<TripRecord> {
        self.trips
    }

    /// Vehicles currently anywhere in the model (queued or on the road).
    pub fn vehicles_present(&self) -> usize {
        self.carriageways
            .iter()
            .map(|c| c.queue.len() + c.on_road())
            .sum()
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn process_exits(&mut self) {
        let now = self.tick;
        let free_flow = self.config.free_flow_ticks;
        // Split borrow: trips and carriageways are disjoint fields.
        let trips = &mut self.trips;
        for carriageway in &mut self.carriageways {
            for lane in &mut carriageway.lanes {
                lane.retain(|vehicle| {
                    if vehicle.exit_tick > now {
                        return true;
                    }
                    let unimpeded = vehicle.depart_tick + free_flow;
                    trips.push(TripRecord {
                        vehicle: vehicle.id,
                        direction: vehicle.direction,
                        depart_tick: vehicle.depart_tick,
                        entry_tick: vehicle.entry_tick,
                        exit_tick: now,
                        time_loss_ticks: now.0.saturating_sub(unimpeded.0),
                    });
                    false
                });
            }
        }
    }

    fn inject_demand(&mut self) {
        for direction in Direction::BOTH {
            let released = self.schedules[direction.index()].demand_at(self.tick);
            for _ in 0..released {
                let id = VehicleId(self.next_vehicle);
                self.next_vehicle += 1;
                self.carriageways[direction.index()].queue.push_back(QueuedVehicle {
                    id,
                    direction,
                    depart_tick: self.tick,
                });
            }
        }
    }

    fn admit_from_queues(&mut self) {
        for direction in Direction::BOTH {
            let open: Vec<LaneIndex> = self.access.open_lanes(direction).collect();
            if open.is_empty() {
                continue;
            }
            let budget = open.len() as u32 * self.config.entry_rate_per_lane;
            let carriageway = &mut self.carriageways[direction.index()];

            for _ in 0..budget {
                if carriageway.queue.is_empty() {
                    break;
                }
                // Least-occupied open lane, lowest index on ties.
                let Some(&lane) = open
                    .iter()
                    .filter(|&&l| {
                        carriageway.lanes[l.index()].len() < self.config.lane_capacity as usize
                    })
                    .min_by_key(|&&l| carriageway.lanes[l.index()].len())
                else {
                    break; // every open lane is at capacity
                };

                let Some(queued) = carriageway.queue.pop_front() else {
                    break;
                };
                let occupancy = carriageway.lanes[lane.index()].len() as u64;
                carriageway.lanes[lane.index()].push(ActiveVehicle {
                    id: queued.id,
                    direction,
                    depart_tick: queued.depart_tick,
                    entry_tick: self.tick,
                    exit_tick: self.tick + (self.config.free_flow_ticks + occupancy),
                });
            }
        }
    }
}

// ── Trait implementations ─────────────────────────────────────────────────────

impl SimStepper for SegmentEngine {
    fn advance_one_tick(&mut self) {
        self.process_exits();
        self.inject_demand();
        self.admit_from_queues();
        self.tick = self.tick + 1;
    }

    fn has_pending_demand(&self) -> bool {
        self.vehicles_present() > 0
            || !self.schedules[0].is_exhausted(self.tick)
            || !self.schedules[1].is_exhausted(self.tick)
    }
}

impl RoadControl for SegmentEngine {
    fn approach_vehicle_count(&self, direction: Direction) -> u32 {
        self.carriageways[direction.index()].queue.len() as u32
    }

    fn lane_vehicle_count(&self, direction: Direction, lane: LaneIndex) -> u32 {
        if !self.layout.contains(lane) {
            return 0;
        }
        self.carriageways[direction.index()].lanes[lane.index()].len() as u32
    }

    fn set_lane_access(&mut self, direction: Direction, lane: LaneIndex, allowed: bool) {
        self.access.set(direction, lane, allowed);
    }
}
