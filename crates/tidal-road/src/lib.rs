//! `tidal-road` — the boundary between the lane controller and whatever
//! simulates the road.
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`traits`] | `SimStepper`, `RoadControl`                      |
//! | [`layout`] | `LaneLayout`, `SHARED_LANE`, lane naming         |
//! | [`access`] | `AccessState` open/closed bookkeeping            |
//!
//! The controller in `tidal-control` depends only on this crate's traits;
//! `tidal-sim` provides the in-process implementation.

pub mod access;
pub mod layout;
pub mod traits;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use access::AccessState;
pub use layout::{LANES_PER_DIRECTION, LaneLayout, LaneName, SHARED_LANE};
pub use traits::{RoadControl, SimStepper};
