//! Flow schedules: per-direction injection demand over a run.
//!
//! A `FlowSchedule` is an ordered list of non-overlapping `FlowPeriod`s,
//! each releasing a fixed number of vehicles over a tick range.  Vehicles
//! are spread across a period's ticks with integer interpolation so every
//! period injects exactly its recorded volume — no rounding drift across a
//! day of 15-minute intervals.

use tidal_core::Tick;

// ── FlowPeriod ────────────────────────────────────────────────────────────────

/// One demand interval: `vehicles` released over `[begin, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlowPeriod {
    pub begin: Tick,
    /// Exclusive upper bound.
    pub end: Tick,
    pub vehicles: u32,
}

impl FlowPeriod {
    /// Ticks covered by the period.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vehicles released at tick offset `o` within the period.
    ///
    /// Uses the cumulative-quota difference
    /// `floor((o+1)·v / len) − floor(o·v / len)`, which sums to exactly
    /// `vehicles` over the period.
    fn release_at_offset(&self, offset: u64) -> u32 {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        let v = self.vehicles as u64;
        (((offset + 1) * v / len) - (offset * v / len)) as u32
    }
}

// ── FlowSchedule ──────────────────────────────────────────────────────────────

/// An ordered demand schedule for one direction.
#[derive(Clone, Debug, Default)]
pub struct FlowSchedule {
    /// Periods sorted ascending by `begin`.
    periods: Vec<FlowPeriod>,
}

impl FlowSchedule {
    /// Build a schedule, sorting periods by begin tick and dropping empty
    /// ones.
    pub fn new(mut periods: Vec<FlowPeriod>) -> Self {
        periods.retain(|p| !p.is_empty());
        periods.sort_unstable_by_key(|p| p.begin);
        Self { periods }
    }

    /// A schedule that never releases anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read-only slice of all periods (sorted by begin tick).
    pub fn periods(&self) -> &[FlowPeriod] {
        &self.periods
    }

    /// Vehicles to inject at `tick`.
    pub fn demand_at(&self, tick: Tick) -> u32 {
        // partition_point returns the first period with begin > tick; the
        // candidate containing tick, if any, is the one before it.
        let idx = self.periods.partition_point(|p| p.begin <= tick);
        if idx == 0 {
            return 0;
        }
        let period = &self.periods[idx - 1];
        if tick >= period.end {
            return 0;
        }
        period.release_at_offset(tick - period.begin)
    }

    /// First tick at which no further demand exists (exclusive end of the
    /// last period), or `Tick::ZERO` for an empty schedule.
    pub fn end_tick(&self) -> Tick {
        self.periods
            .iter()
            .map(|p| p.end)
            .max()
            .unwrap_or(Tick::ZERO)
    }

    /// `true` once `tick` is past every period.
    pub fn is_exhausted(&self, tick: Tick) -> bool {
        tick >= self.end_tick()
    }

    /// Total vehicles over the whole schedule.
    pub fn total_vehicles(&self) -> u64 {
        self.periods.iter().map(|p| p.vehicles as u64).sum()
    }
}
