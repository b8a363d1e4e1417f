//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  One
//! tick is one fixed simulation quantum — for the road-segment engines in
//! this workspace, one simulated second, which keeps flow-schedule
//! arithmetic exact (traffic-count exports index their intervals in whole
//! seconds from midnight).
//!
//! Using an integer tick as the canonical time unit means all window and
//! drain arithmetic is exact (no floating-point drift) and comparisons are
//! O(1).

use std::fmt;

/// Seconds covered by one traffic-count reporting interval (15 minutes).
pub const SECS_PER_INTERVAL: u64 = 900;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 1 tick/second a u64 lasts ~585
/// billion years, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Break the tick into (hour, minute, second) components from run start.
    /// Useful for human-readable logging without a datetime library.
    pub fn hms(self) -> (u64, u32, u32) {
        let hours = self.0 / 3_600;
        let minutes = ((self.0 % 3_600) / 60) as u32;
        let seconds = (self.0 % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
