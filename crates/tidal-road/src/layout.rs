//! Physical lane layout of the reversible segment.
//!
//! The segment carries three usable lanes: one fixed outer lane per
//! direction plus one shared inner lane whose direction of travel can be
//! switched.  Physically the inner lane is a pair of co-located lane slots,
//! one per carriageway, of which at most one is open at a time (both open
//! only in the non-reversible baseline mode).
//!
//! Lanes are indexed per direction from the outer (kerbside) lane inward:
//! index 0 is the fixed lane, index 1 the shared one.

use std::fmt;

use tidal_core::{Direction, LaneIndex};

/// Lane slots per carriageway (fixed outer + shared inner).
pub const LANES_PER_DIRECTION: u8 = 2;

/// The lane slot whose direction of travel is reassignable.
pub const SHARED_LANE: LaneIndex = LaneIndex(1);

// ── LaneLayout ────────────────────────────────────────────────────────────────

/// Describes the lane geometry of one reversible segment.
///
/// Currently fixed at the three-lane layout above; carrying it as a value
/// keeps lane arithmetic in one place and lets engines size their per-lane
/// storage from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneLayout {
    lanes_per_direction: u8,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self { lanes_per_direction: LANES_PER_DIRECTION }
    }
}

impl LaneLayout {
    /// Lane slots on each carriageway.
    #[inline]
    pub fn lanes_per_direction(self) -> u8 {
        self.lanes_per_direction
    }

    /// The innermost lane slot — the reversible one.
    #[inline]
    pub fn shared_lane(self) -> LaneIndex {
        LaneIndex(self.lanes_per_direction - 1)
    }

    /// All lane indices of one carriageway, outer to inner.
    pub fn lanes(self) -> impl Iterator<Item = LaneIndex> {
        (0..self.lanes_per_direction).map(LaneIndex)
    }

    /// `true` if `lane` exists in this layout.
    #[inline]
    pub fn contains(self, lane: LaneIndex) -> bool {
        lane.0 < self.lanes_per_direction
    }
}

// ── Lane naming ───────────────────────────────────────────────────────────────

/// A (direction, lane) pair formatted the way segment engines and logs name
/// lanes: `left_0`, `right_1`, …
pub struct LaneName(pub Direction, pub LaneIndex);

impl fmt::Display for LaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.0.as_str(), self.1.0)
    }
}
