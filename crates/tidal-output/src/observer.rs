//! `ControlOutputObserver<W>` — bridges `ControlObserver` to an `OutputWriter`.

use tidal_control::{ControlObserver, ReversalEvent, RunSummary};
use tidal_sim::TripRecord;

use crate::row::{ReversalRow, RunSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ControlObserver`] that writes reversal records and the run summary to
/// any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `ControlObserver`
/// methods have no return value.  After the run, hand the engine's trip log
/// to [`finalize`][Self::finalize], which writes the trips, flushes the
/// backend, and surfaces the first stored error if any write failed.
pub struct ControlOutputObserver<W: OutputWriter> {
    writer: W,
    run_code: String,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ControlOutputObserver<W> {
    /// Create an observer backed by `writer`, labelling the summary row with
    /// `run_code`.
    pub fn new(writer: W, run_code: impl Into<String>) -> Self {
        Self {
            writer,
            run_code: run_code.into(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes so far succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write the trip log, flush the backend, and return the inner writer.
    ///
    /// Fails with the first error stored during the run, if any.
    pub fn finalize(mut self, trips: &[TripRecord]) -> Result<W, OutputError> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        let rows: Vec<TripRow> = trips.iter().map(TripRow::from).collect();
        self.writer.write_trips(&rows)?;
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ControlObserver for ControlOutputObserver<W> {
    fn on_reversal_complete(&mut self, event: &ReversalEvent) {
        let row = ReversalRow::from(event);
        let result = self.writer.write_reversal(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let row = RunSummaryRow::new(self.run_code.clone(), summary);
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }
}
