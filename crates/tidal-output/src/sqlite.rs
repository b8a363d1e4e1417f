//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `tidal.db` file in the configured output directory with
//! three tables: `trips`, `reversals`, and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, ReversalRow, RunSummaryRow, TripRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `tidal.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("tidal.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trips (
                 vehicle_id      INTEGER NOT NULL,
                 direction       TEXT    NOT NULL,
                 depart_tick     INTEGER NOT NULL,
                 entry_tick      INTEGER NOT NULL,
                 exit_tick       INTEGER NOT NULL,
                 time_loss_ticks INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS reversals (
                 trigger_tick INTEGER NOT NULL,
                 gained_by    TEXT    NOT NULL,
                 drain_ticks  INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 run_code          TEXT PRIMARY KEY,
                 final_tick        INTEGER NOT NULL,
                 reversals         INTEGER NOT NULL,
                 total_drain_ticks INTEGER NOT NULL,
                 mean_drain_ticks  REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (vehicle_id, direction, depart_tick, entry_tick, exit_tick, time_loss_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.vehicle_id,
                    row.direction,
                    row.depart_tick,
                    row.entry_tick,
                    row.exit_tick,
                    row.time_loss_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_reversal(&mut self, row: &ReversalRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO reversals (trigger_tick, gained_by, drain_ticks) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.trigger_tick, row.gained_by, row.drain_ticks],
        )?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (run_code, final_tick, reversals, total_drain_ticks, mean_drain_ticks) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.run_code,
                row.final_tick,
                row.reversals,
                row.total_drain_ticks,
                row.mean_drain_ticks,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
