//! `tidal-core` — foundational types for the `tidal` reversible-lane
//! framework.
//!
//! This crate is a dependency of every other `tidal-*` crate.  It
//! intentionally has no `tidal-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `LaneIndex`                          |
//! | [`direction`] | `Direction` enum                                  |
//! | [`time`]      | `Tick`, interval constants                        |
//! | [`config`]    | `RunConfig`, `FavouredDirection`                  |
//! | [`rng`]       | `FlowRng` (seeded demand generation)              |
//! | [`error`]     | `ConfigError`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FavouredDirection, RunConfig};
pub use direction::Direction;
pub use error::ConfigError;
pub use ids::{LaneIndex, VehicleId};
pub use rng::FlowRng;
pub use time::{SECS_PER_INTERVAL, Tick};
