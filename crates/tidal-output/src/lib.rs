//! `tidal-output` — run output writers for the tidal framework.
//!
//! Two backends are provided:
//!
//! | Feature  | Backend | Files created                                   |
//! |----------|---------|-------------------------------------------------|
//! | *(none)* | CSV     | `trips.csv`, `reversals.csv`, `run_summary.csv` |
//! | `sqlite` | SQLite  | `tidal.db`                                      |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`ControlOutputObserver`], which implements
//! `tidal_control::ControlObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tidal_output::{ControlOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ControlOutputObserver::new(writer, "P10-T0.5");
//! controller.run(&mut engine, &mut obs)?;
//! obs.finalize(engine.trips())?;
//! ```

pub mod aggregate;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use aggregate::{mean_time_loss, time_loss_by_direction, total_time_loss};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ControlOutputObserver;
pub use row::{ReversalRow, RunSummaryRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
