//! The hysteresis-threshold decision rule.
//!
//! A reversal fires only when one direction's mean approach density exceeds
//! the other's by strictly more than `threshold` vehicles per tick AND that
//! direction is currently running on its single fixed lane.  The threshold
//! is the hysteresis margin: near-balanced demand triggers nothing, so the
//! shared lane does not oscillate.
//!
//! Evaluation order is asymmetric — the left-favouring check runs first.
//! With a non-negative threshold both margins can never clear at once, but
//! the order is still part of the tuned behaviour and is kept fixed.

use tidal_core::Direction;

use crate::allocation::LaneAllocation;
use crate::window::SamplingWindow;

/// Decide whether a reversal should fire, and toward which direction.
///
/// Returns the direction that should *gain* the shared lane, or `None`.
/// The lane-count guards make misuse structurally impossible: a direction
/// already holding two lanes is never selected, and the balanced baseline
/// (both counts 2) never reverses.
pub fn evaluate(
    window: &SamplingWindow,
    threshold: f64,
    allocation: LaneAllocation,
) -> Option<Direction> {
    let (mean_left, mean_right) = window.means();

    if mean_left > mean_right + threshold && allocation.lane_count(Direction::Left) == 1 {
        return Some(Direction::Left);
    }
    if mean_right > mean_left + threshold && allocation.lane_count(Direction::Right) == 1 {
        return Some(Direction::Right);
    }
    None
}
