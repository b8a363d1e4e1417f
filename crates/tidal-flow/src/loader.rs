//! Traffic-count CSV loader.
//!
//! # CSV format
//!
//! One row per 15-minute reporting interval, as exported by roadside count
//! sites.  Multi-day exports are supported; the loader picks out one day.
//!
//! ```csv
//! date,interval,avg_speed,volume
//! 26/07/2019,27,68,352
//! 26/07/2019,28,64,410
//! 26/07/2019,29,,
//! 27/07/2019,28,70,380
//! ```
//!
//! | Column      | Meaning                                                |
//! |-------------|--------------------------------------------------------|
//! | `date`      | Day label; rows not matching the requested day are     |
//! |             | ignored                                                |
//! | `interval`  | 15-minute slot index within the day (0–95)             |
//! | `avg_speed` | Mean observed speed; informational, may be empty       |
//! | `volume`    | Vehicles counted in the interval; empty = sensor gap,  |
//! |             | row skipped                                            |
//!
//! Interval `i` becomes a [`FlowPeriod`] covering ticks
//! `[i·900, (i+1)·900)` — one tick per simulated second.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tidal_core::{SECS_PER_INTERVAL, Tick};

use crate::error::FlowError;
use crate::schedule::{FlowPeriod, FlowSchedule};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FlowRecord {
    date: String,
    interval: u32,
    #[allow(dead_code)]
    avg_speed: Option<u32>,
    volume: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load one day's demand from a traffic-count CSV file.
///
/// Rows whose `date` does not match `day` are ignored, as are rows with a
/// missing `volume` (sensor gaps).  Returns an error if the day has no
/// usable rows at all — usually a sign of a wrong day label.
pub fn load_flows_csv(path: &Path, day: &str) -> Result<FlowSchedule, FlowError> {
    let file = std::fs::File::open(path).map_err(FlowError::Io)?;
    load_flows_reader(file, day)
}

/// Like [`load_flows_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_flows_reader<R: Read>(reader: R, day: &str) -> Result<FlowSchedule, FlowError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut periods: Vec<FlowPeriod> = Vec::new();

    for result in csv_reader.deserialize::<FlowRecord>() {
        let row = result.map_err(|e| FlowError::Parse(e.to_string()))?;
        if row.date.trim() != day {
            continue;
        }
        let Some(volume) = row.volume else {
            // Sensor gap: the interval simply contributes no demand.
            continue;
        };
        let begin = row.interval as u64 * SECS_PER_INTERVAL;
        periods.push(FlowPeriod {
            begin: Tick(begin),
            end: Tick(begin + SECS_PER_INTERVAL),
            vehicles: volume,
        });
    }

    if periods.is_empty() {
        return Err(FlowError::NoRows { day: day.to_owned() });
    }
    Ok(FlowSchedule::new(periods))
}
