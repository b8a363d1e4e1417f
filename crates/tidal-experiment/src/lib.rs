//! `tidal-experiment` — parameter sweeps over the lane controller.
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`grid`]   | `ParamGrid`, `RunSpec`, run codes              |
//! | [`runner`] | `run_spec`, `run_grid`, reference runs         |
//! | [`error`]  | `SweepError`                                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                         |
//! |------------|------------------------------------------------|
//! | `parallel` | Grid cells run on Rayon's thread pool.         |

pub mod error;
pub mod grid;
pub mod runner;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SweepError, SweepResult};
pub use grid::{ParamGrid, RunSpec, baseline_spec, control_specs};
pub use runner::{SweepOutcome, run_grid, run_references, run_spec};
