//! Trip-log aggregation.
//!
//! The numbers an experiment sweep compares across runs: summed and mean
//! vehicular time loss, optionally split by direction.

use tidal_core::Direction;
use tidal_sim::TripRecord;

/// Summed time loss over all completed trips, in ticks.
pub fn total_time_loss(trips: &[TripRecord]) -> u64 {
    trips.iter().map(|t| t.time_loss_ticks).sum()
}

/// Mean time loss per completed trip, or `None` for an empty log.
pub fn mean_time_loss(trips: &[TripRecord]) -> Option<f64> {
    if trips.is_empty() {
        None
    } else {
        Some(total_time_loss(trips) as f64 / trips.len() as f64)
    }
}

/// Summed time loss as `(left, right)`.
pub fn time_loss_by_direction(trips: &[TripRecord]) -> (u64, u64) {
    let mut totals = [0u64; 2];
    for trip in trips {
        totals[trip.direction.index()] += trip.time_loss_ticks;
    }
    (totals[Direction::Left.index()], totals[Direction::Right.index()])
}
