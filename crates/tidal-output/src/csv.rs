//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trips.csv`
//! - `reversals.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ReversalRow, RunSummaryRow, TripRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    trips: Writer<File>,
    reversals: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "vehicle_id",
            "direction",
            "depart_tick",
            "entry_tick",
            "exit_tick",
            "time_loss_ticks",
        ])?;

        let mut reversals = Writer::from_path(dir.join("reversals.csv"))?;
        reversals.write_record(["trigger_tick", "gained_by", "drain_ticks"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "run_code",
            "final_tick",
            "reversals",
            "total_drain_ticks",
            "mean_drain_ticks",
        ])?;

        Ok(Self { trips, reversals, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.vehicle_id.to_string(),
                row.direction.to_string(),
                row.depart_tick.to_string(),
                row.entry_tick.to_string(),
                row.exit_tick.to_string(),
                row.time_loss_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_reversal(&mut self, row: &ReversalRow) -> OutputResult<()> {
        self.reversals.write_record(&[
            row.trigger_tick.to_string(),
            row.gained_by.to_string(),
            row.drain_ticks.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.run_code.clone(),
            row.final_tick.to_string(),
            row.reversals.to_string(),
            row.total_drain_ticks.to_string(),
            row.mean_drain_ticks.map(|m| format!("{m:.2}")).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.reversals.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
