//! Integration tests for tidal-control.
//!
//! All controller tests run against `FakeRoad`, a scripted implementation of
//! the `tidal-road` traits: approach counts come from a per-tick script,
//! and a closed shared lane loses `drain_per_tick` occupants per stepped
//! tick.  Deterministic by construction, no engine required.

use tidal_core::{Direction, FavouredDirection, LaneIndex, RunConfig, Tick};
use tidal_road::{AccessState, LaneLayout, RoadControl, SHARED_LANE, SimStepper};

use crate::allocation::{LaneAllocation, TransitionError};
use crate::controller::LaneController;
use crate::decision;
use crate::error::ControlError;
use crate::event::ReversalEvent;
use crate::observer::{ControlObserver, NoopObserver};
use crate::window::SamplingWindow;

// ── FakeRoad ──────────────────────────────────────────────────────────────────

/// One `set_lane_access` call, with the opposing shared-lane occupancy
/// captured at the moment of the change.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccessChange {
    tick: u64,
    direction: Direction,
    lane: LaneIndex,
    allowed: bool,
    opposite_shared_occupancy: u32,
}

struct FakeRoad {
    access: AccessState,
    /// Per-tick (left, right) approach counts; ticks beyond the script read 0.
    approach_script: Vec<(u32, u32)>,
    /// Vehicles occupying each direction's shared lane.
    shared_occupancy: [u32; 2],
    /// Vehicles leaving a closed shared lane per stepped tick.
    drain_per_tick: u32,
    /// Demand is pending until this many ticks have been stepped.
    demand_ticks: u64,
    tick: u64,
    access_log: Vec<AccessChange>,
}

impl FakeRoad {
    fn new(demand_ticks: u64, approach_script: Vec<(u32, u32)>) -> Self {
        Self {
            access: AccessState::all_closed(LaneLayout::default()),
            approach_script,
            shared_occupancy: [0, 0],
            drain_per_tick: 1,
            demand_ticks,
            tick: 0,
            access_log: Vec::new(),
        }
    }

    fn with_shared_occupancy(mut self, direction: Direction, vehicles: u32) -> Self {
        self.shared_occupancy[direction.index()] = vehicles;
        self
    }

    /// Access changes made after the initial lane setup (4 opens + at most
    /// one shared-lane close).
    fn changes_after_setup(&self) -> &[AccessChange] {
        let setup = self
            .access_log
            .iter()
            .take_while(|c| c.tick == 0)
            .count()
            .min(5);
        &self.access_log[setup..]
    }
}

impl SimStepper for FakeRoad {
    fn advance_one_tick(&mut self) {
        for direction in Direction::BOTH {
            if !self.access.is_open(direction, SHARED_LANE) {
                let occ = &mut self.shared_occupancy[direction.index()];
                *occ = occ.saturating_sub(self.drain_per_tick);
            }
        }
        self.tick += 1;
    }

    fn has_pending_demand(&self) -> bool {
        self.tick < self.demand_ticks
    }
}

impl RoadControl for FakeRoad {
    fn approach_vehicle_count(&self, direction: Direction) -> u32 {
        let (left, right) = self
            .approach_script
            .get(self.tick as usize)
            .copied()
            .unwrap_or((0, 0));
        match direction {
            Direction::Left => left,
            Direction::Right => right,
        }
    }

    fn lane_vehicle_count(&self, direction: Direction, lane: LaneIndex) -> u32 {
        if lane == SHARED_LANE {
            self.shared_occupancy[direction.index()]
        } else {
            0
        }
    }

    fn set_lane_access(&mut self, direction: Direction, lane: LaneIndex, allowed: bool) {
        self.access_log.push(AccessChange {
            tick: self.tick,
            direction,
            lane,
            allowed,
            opposite_shared_occupancy: self.shared_occupancy[direction.opposite().index()],
        });
        self.access.set(direction, lane, allowed);
    }
}

// ── Allocation state machine ──────────────────────────────────────────────────

#[cfg(test)]
mod allocation_tests {
    use super::*;

    #[test]
    fn reversible_states_sum_to_three_lanes() {
        for alloc in [LaneAllocation::LeftWide, LaneAllocation::RightWide] {
            let (left, right) = alloc.lane_counts();
            assert_eq!(left + right, 3, "{alloc}");
            assert!(left >= 1 && right >= 1);
        }
    }

    #[test]
    fn balanced_is_four_lanes_open() {
        assert_eq!(LaneAllocation::Balanced.lane_counts(), (2, 2));
        assert!(!LaneAllocation::Balanced.is_reversible());
        assert_eq!(LaneAllocation::Balanced.wide_direction(), None);
    }

    #[test]
    fn valid_transitions_round_trip() {
        let left = LaneAllocation::RightWide
            .reversed_toward(Direction::Left)
            .unwrap();
        assert_eq!(left, LaneAllocation::LeftWide);
        let back = left.reversed_toward(Direction::Right).unwrap();
        assert_eq!(back, LaneAllocation::RightWide);
    }

    #[test]
    fn reversing_toward_the_wide_direction_is_rejected() {
        assert_eq!(
            LaneAllocation::LeftWide.reversed_toward(Direction::Left),
            Err(TransitionError::AlreadyWide(Direction::Left))
        );
        assert_eq!(
            LaneAllocation::RightWide.reversed_toward(Direction::Right),
            Err(TransitionError::AlreadyWide(Direction::Right))
        );
    }

    #[test]
    fn balanced_never_transitions() {
        for gaining in Direction::BOTH {
            assert_eq!(
                LaneAllocation::Balanced.reversed_toward(gaining),
                Err(TransitionError::NotReversible)
            );
        }
    }

    #[test]
    fn initial_allocation_follows_config() {
        assert_eq!(
            LaneAllocation::initial(&RunConfig::adaptive(10, 0.5)),
            LaneAllocation::RightWide
        );
        assert_eq!(
            LaneAllocation::initial(&RunConfig::fixed(FavouredDirection::Left)),
            LaneAllocation::LeftWide
        );
        assert_eq!(
            LaneAllocation::initial(&RunConfig::fixed(FavouredDirection::Baseline)),
            LaneAllocation::Balanced
        );
    }
}

// ── Sampling window ───────────────────────────────────────────────────────────

#[cfg(test)]
mod window_tests {
    use super::*;

    #[test]
    fn fills_after_period_ticks() {
        let mut w = SamplingWindow::new(3);
        w.record(1, 2);
        w.record(1, 2);
        assert!(!w.is_full());
        w.record(1, 2);
        assert!(w.is_full());
        assert_eq!(w.sums(), (3, 6));
    }

    #[test]
    fn means_divide_by_the_full_period() {
        let mut w = SamplingWindow::new(10);
        for _ in 0..10 {
            w.record(10, 4);
        }
        assert_eq!(w.means(), (10.0, 4.0));
    }

    #[test]
    fn reset_clears_everything() {
        let mut w = SamplingWindow::new(2);
        w.record(5, 7);
        w.record(5, 7);
        w.reset();
        assert_eq!(w.sums(), (0, 0));
        assert_eq!(w.ticks(), 0);
        assert!(!w.is_full());
    }
}

// ── Decision rule ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision_tests {
    use super::*;

    fn window(left_per_tick: u32, right_per_tick: u32, period: u64) -> SamplingWindow {
        let mut w = SamplingWindow::new(period);
        for _ in 0..period {
            w.record(left_per_tick, right_per_tick);
        }
        w
    }

    #[test]
    fn left_advantage_triggers_only_when_left_is_narrow() {
        // left_sum = 100, right_sum = 40, period = 10, threshold = 5:
        // mean_left 10 > mean_right 4 + 5 = 9.
        let w = window(10, 4, 10);
        assert_eq!(
            decision::evaluate(&w, 5.0, LaneAllocation::RightWide),
            Some(Direction::Left)
        );
        assert_eq!(decision::evaluate(&w, 5.0, LaneAllocation::LeftWide), None);
        assert_eq!(decision::evaluate(&w, 5.0, LaneAllocation::Balanced), None);
    }

    #[test]
    fn right_advantage_mirrors() {
        let w = window(1, 9, 5);
        assert_eq!(
            decision::evaluate(&w, 3.0, LaneAllocation::LeftWide),
            Some(Direction::Right)
        );
        assert_eq!(decision::evaluate(&w, 3.0, LaneAllocation::RightWide), None);
    }

    #[test]
    fn margin_exactly_at_threshold_does_not_trigger() {
        // mean_left 6, mean_right 2, threshold 4: 6 > 2 + 4 is false.
        let w = window(6, 2, 4);
        assert_eq!(decision::evaluate(&w, 4.0, LaneAllocation::RightWide), None);
    }

    #[test]
    fn balanced_means_never_trigger() {
        let w = window(7, 7, 8);
        for threshold in [0.0, 0.5, 2.0] {
            assert_eq!(decision::evaluate(&w, threshold, LaneAllocation::RightWide), None);
            assert_eq!(decision::evaluate(&w, threshold, LaneAllocation::LeftWide), None);
        }
    }
}

// ── Controller runs ───────────────────────────────────────────────────────────

#[cfg(test)]
mod controller_tests {
    use super::*;

    #[test]
    fn five_tick_left_surge_reverses_to_left_wide() {
        // period = 5, threshold = 0, approaches left=[2,2,2,2,2] right=[0…]:
        // the first full window triggers a reversal handing the shared lane
        // to the left direction.
        let mut road = FakeRoad::new(6, vec![(2, 0); 5])
            .with_shared_occupancy(Direction::Right, 3);
        let mut ctl = LaneController::new(RunConfig::adaptive(5, 0.0)).unwrap();

        let summary = ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert_eq!(ctl.allocation(), LaneAllocation::LeftWide);
        assert_eq!(summary.reversals, 1);
        assert_eq!(summary.total_drain_ticks, 3);
        assert_eq!(
            ctl.events(),
            &[ReversalEvent {
                trigger_tick: Tick(4),
                gained_by: Direction::Left,
                drain_ticks: 3,
            }]
        );
    }

    #[test]
    fn drained_lane_is_empty_when_regranted() {
        let mut road = FakeRoad::new(6, vec![(4, 0); 5])
            .with_shared_occupancy(Direction::Right, 7);
        let mut ctl = LaneController::new(RunConfig::adaptive(5, 0.0)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        // The post-setup log is: close right shared, then grant left shared.
        let changes = road.changes_after_setup();
        assert_eq!(changes.len(), 2);
        assert_eq!((changes[0].direction, changes[0].allowed), (Direction::Right, false));
        let grant = &changes[1];
        assert_eq!((grant.direction, grant.lane, grant.allowed), (Direction::Left, SHARED_LANE, true));
        assert_eq!(
            grant.opposite_shared_occupancy, 0,
            "shared lane must be empty at the moment it is re-granted"
        );
    }

    #[test]
    fn persistent_advantage_reverses_only_once() {
        // Left stays busier for six full windows; after the first reversal
        // the left direction is already wide, so no further event can fire
        // until the advantage flips.
        let mut road = FakeRoad::new(30, vec![(5, 0); 30]);
        let mut ctl = LaneController::new(RunConfig::adaptive(5, 0.0)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert_eq!(ctl.events().len(), 1);
        assert_eq!(ctl.allocation(), LaneAllocation::LeftWide);
    }

    #[test]
    fn alternating_demand_alternates_reversals() {
        // Three-tick windows of left advantage, then right, then left, then
        // right.  Empty shared lanes, so each reversal completes instantly.
        let mut script = Vec::new();
        for block in 0..4 {
            let counts = if block % 2 == 0 { (9, 0) } else { (0, 9) };
            script.extend(std::iter::repeat_n(counts, 3));
        }
        let mut road = FakeRoad::new(12, script);
        let mut ctl = LaneController::new(RunConfig::adaptive(3, 0.0)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        let gained: Vec<Direction> = ctl.events().iter().map(|e| e.gained_by).collect();
        assert_eq!(
            gained,
            vec![Direction::Left, Direction::Right, Direction::Left, Direction::Right],
            "each direction's lane count must round-trip between reversals"
        );
        assert_eq!(ctl.allocation(), LaneAllocation::RightWide);
    }

    #[test]
    fn balanced_demand_never_reverses() {
        // Identical densities each window: zero reversals at any threshold.
        for threshold in [0.0, 1.0, 5.0] {
            let mut road = FakeRoad::new(20, vec![(3, 3); 20]);
            let mut ctl = LaneController::new(RunConfig::adaptive(5, threshold)).unwrap();
            let summary = ctl.run(&mut road, &mut NoopObserver).unwrap();
            assert_eq!(summary.reversals, 0, "threshold {threshold}");
            assert_eq!(ctl.allocation(), LaneAllocation::RightWide);
        }
    }

    #[test]
    fn disabled_lane_changing_never_touches_the_allocation() {
        // Heavy right advantage the whole run; the fixed-left control case
        // must ignore it completely.
        let mut road = FakeRoad::new(25, vec![(0, 9); 25]);
        let mut ctl = LaneController::new(RunConfig::fixed(FavouredDirection::Left)).unwrap();
        let summary = ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert_eq!(ctl.allocation(), LaneAllocation::LeftWide);
        assert_eq!(summary.reversals, 0);
        // Initial setup only: 4 opens plus the right shared-lane close.
        assert_eq!(road.access_log.len(), 5);
        assert!(road.changes_after_setup().is_empty());
    }

    #[test]
    fn baseline_opens_everything_and_never_closes() {
        let mut road = FakeRoad::new(10, vec![(9, 0); 10]);
        let mut ctl = LaneController::new(RunConfig::fixed(FavouredDirection::Baseline)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert_eq!(ctl.allocation(), LaneAllocation::Balanced);
        assert_eq!(road.access_log.len(), 4);
        assert!(road.access_log.iter().all(|c| c.allowed));
    }

    #[test]
    fn lane_sum_invariant_holds_across_a_run() {
        let mut script = Vec::new();
        for block in 0..6 {
            let counts = if block % 2 == 0 { (8, 0) } else { (0, 8) };
            script.extend(std::iter::repeat_n(counts, 4));
        }
        let mut road = FakeRoad::new(24, script);
        let mut ctl = LaneController::new(RunConfig::adaptive(4, 0.0)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert!(ctl.events().len() >= 2);
        let (left, right) = ctl.allocation().lane_counts();
        assert_eq!(left + right, 3);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        assert!(matches!(
            LaneController::new(RunConfig::adaptive(0, 0.0)),
            Err(ControlError::Config(_))
        ));
        assert!(matches!(
            LaneController::new(RunConfig::adaptive(10, -0.5)),
            Err(ControlError::Config(_))
        ));
    }
}

// ── Reversal safety ───────────────────────────────────────────────────────────

#[cfg(test)]
mod reversal_tests {
    use super::*;

    #[test]
    fn desynchronized_allocation_is_fatal() {
        // The controller tracks RightWide; a reversal toward Right would
        // close the *left* shared lane, which the allocation says Left does
        // not hold.  That mismatch must abort, not proceed.
        let mut road = FakeRoad::new(10, vec![(0, 0); 10]);
        let mut ctl = LaneController::new(RunConfig::adaptive(5, 0.0)).unwrap();

        let err = ctl
            .reverse_toward(&mut road, Direction::Right, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, ControlError::AllocationDesync { .. }));
        // No lane access was touched on the failed path.
        assert!(road.access_log.is_empty());
    }

    #[test]
    fn drain_timeout_aborts_when_configured() {
        let mut road = FakeRoad::new(3, vec![(9, 0); 3])
            .with_shared_occupancy(Direction::Right, 100);
        let mut config = RunConfig::adaptive(1, 0.0);
        config.drain_timeout_ticks = Some(4);
        let mut ctl = LaneController::new(config).unwrap();

        let err = ctl.run(&mut road, &mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            ControlError::DrainTimeout { direction: Direction::Right, limit: 4 }
        ));
    }

    #[test]
    fn unbounded_drain_waits_for_the_last_vehicle() {
        // 40 vehicles at 1 vehicle/tick: the drain-wait spans 40 ticks and
        // the event records all of them.
        let mut road = FakeRoad::new(4, vec![(9, 0); 4])
            .with_shared_occupancy(Direction::Right, 40);
        let mut ctl = LaneController::new(RunConfig::adaptive(2, 0.0)).unwrap();
        ctl.run(&mut road, &mut NoopObserver).unwrap();

        assert_eq!(ctl.events().len(), 1);
        assert_eq!(ctl.events()[0].drain_ticks, 40);
    }
}

// ── Observer callbacks ────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        ticks: usize,
        starts: usize,
        completes: usize,
        run_ends: usize,
    }

    impl ControlObserver for CountingObserver {
        fn on_tick_end(&mut self, _tick: Tick) {
            self.ticks += 1;
        }
        fn on_reversal_start(&mut self, _tick: Tick, _gaining: Direction) {
            self.starts += 1;
        }
        fn on_reversal_complete(&mut self, _event: &ReversalEvent) {
            self.completes += 1;
        }
        fn on_run_end(&mut self, _summary: &crate::RunSummary) {
            self.run_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_in_matched_pairs() {
        let mut road = FakeRoad::new(10, vec![(6, 0); 10])
            .with_shared_occupancy(Direction::Right, 2);
        let mut ctl = LaneController::new(RunConfig::adaptive(5, 0.0)).unwrap();
        let mut obs = CountingObserver::default();
        ctl.run(&mut road, &mut obs).unwrap();

        assert_eq!(obs.starts, 1);
        assert_eq!(obs.completes, 1);
        assert_eq!(obs.run_ends, 1);
        // Main-loop ticks only; the 2 drain ticks are inside the event.
        assert_eq!(obs.ticks as u64 + ctl.events()[0].drain_ticks, ctl.tick().0);
    }
}
