//! `tidal-control` — the reversible-lane control core.
//!
//! Everything in this crate is engine-agnostic: the controller talks to the
//! road exclusively through the `tidal-road` traits, so the same loop runs
//! against the in-process engine in `tidal-sim` or a scripted test fake.
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`allocation`] | `LaneAllocation` typed state machine            |
//! | [`window`]     | `SamplingWindow` density accumulator            |
//! | [`decision`]   | hysteresis-threshold decision rule              |
//! | [`controller`] | `LaneController` tick loop + reversal procedure |
//! | [`event`]      | `ReversalEvent`, `RunSummary`                   |
//! | [`observer`]   | `ControlObserver` callbacks                     |
//! | [`error`]      | `ControlError`                                  |

pub mod allocation;
pub mod controller;
pub mod decision;
pub mod error;
pub mod event;
pub mod observer;
pub mod window;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use allocation::{LaneAllocation, TransitionError};
pub use controller::LaneController;
pub use error::{ControlError, ControlResult};
pub use event::{ReversalEvent, RunSummary};
pub use observer::{ControlObserver, NoopObserver};
pub use window::SamplingWindow;
