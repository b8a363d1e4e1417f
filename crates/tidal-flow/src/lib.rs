//! `tidal-flow` — demand schedules for the tidal framework.
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`schedule`]  | `FlowPeriod`, `FlowSchedule`                  |
//! | [`loader`]    | traffic-count CSV → `FlowSchedule`            |
//! | [`synthetic`] | seeded synthetic tidal-day generation         |
//! | [`error`]     | `FlowError`                                   |

pub mod error;
pub mod loader;
pub mod schedule;
pub mod synthetic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlowError, FlowResult};
pub use loader::{load_flows_csv, load_flows_reader};
pub use schedule::{FlowPeriod, FlowSchedule};
pub use synthetic::{TidalDayProfile, tidal_day};
