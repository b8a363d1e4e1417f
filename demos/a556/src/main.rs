//! a556 — one simulated day on a reversible-lane corridor.
//!
//! Generates a synthetic commuter day (morning peak one way, evening peak
//! the other), runs the adaptive lane controller against the in-process
//! segment engine, and writes trips, reversals, and the run summary to
//! `output/a556/`.  Finishes with a time-loss comparison against the fixed
//! reference runs.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use tidal_control::{LaneController, ReversalEvent};
use tidal_core::RunConfig;
use tidal_experiment::{RunSpec, run_references, run_spec};
use tidal_flow::{TidalDayProfile, tidal_day};
use tidal_output::{ControlOutputObserver, CsvWriter, mean_time_loss, total_time_loss};
use tidal_sim::{EngineConfig, SegmentEngine};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const PERIOD: u64 = 300; // evaluate every 5 simulated minutes
const THRESHOLD: f64 = 2.0; // mean queue advantage, vehicles per tick

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== a556 — tidal reversible-lane control ===");
    println!("Seed: {SEED}  |  Period: {PERIOD} ticks  |  Threshold: {THRESHOLD}");
    println!();

    // 1. Demand: one synthetic tidal day.
    let profile = TidalDayProfile::default();
    let (left, right) = tidal_day(SEED, &profile);
    println!(
        "Demand: {} vehicles left, {} vehicles right over {} ticks",
        left.total_vehicles(),
        right.total_vehicles(),
        left.end_tick().0
    );

    // 2. Engine and controller.
    let engine_config = EngineConfig::default();
    let mut engine = SegmentEngine::new(engine_config, left.clone(), right.clone())?;
    let run_config = RunConfig::adaptive(PERIOD, THRESHOLD);
    let mut controller = LaneController::new(run_config.clone())?;

    // 3. Output under output/a556/.
    let run_code = RunSpec { config: run_config }.run_code();
    std::fs::create_dir_all("output/a556")?;
    let writer = CsvWriter::new(Path::new("output/a556"))?;
    let mut observer = ControlOutputObserver::new(writer, run_code.as_str());

    // 4. Run.
    let t0 = Instant::now();
    let summary = controller.run(&mut engine, &mut observer)?;
    let elapsed = t0.elapsed();

    let trips = engine.into_trips();
    observer.finalize(&trips)?;

    // 5. Report.
    println!();
    println!("Run {run_code} complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {summary}");
    println!(
        "  {} trips, {} ticks total time loss ({:.1} mean)",
        trips.len(),
        total_time_loss(&trips),
        mean_time_loss(&trips).unwrap_or(0.0)
    );
    println!("  output/a556/: trips.csv, reversals.csv, run_summary.csv");
    println!();

    print_reversal_table(controller.events());

    // 6. Reference comparison: the same day without adaptive control.
    println!("Reference runs (same demand):");
    println!("{:<14} {:>10} {:>16}", "Run", "Reversals", "Total time loss");
    println!("{}", "-".repeat(42));
    let adaptive = run_spec(
        &RunSpec { config: RunConfig::adaptive(PERIOD, THRESHOLD) },
        &left,
        &right,
        engine_config,
    )?;
    let mut rows = vec![adaptive];
    rows.extend(run_references(&left, &right, engine_config)?);
    for outcome in &rows {
        println!(
            "{:<14} {:>10} {:>16}",
            outcome.run_code, outcome.summary.reversals, outcome.total_time_loss
        );
    }

    Ok(())
}

fn print_reversal_table(events: &[ReversalEvent]) {
    if events.is_empty() {
        println!("No reversals fired.");
        println!();
        return;
    }
    println!("{:<12} {:<10} {:<12}", "Trigger", "Gained by", "Drain ticks");
    println!("{}", "-".repeat(36));
    for event in events {
        let (h, m, _s) = event.trigger_tick.hms();
        println!(
            "{:<12} {:<10} {:<12}",
            format!("{:02}:{:02}", h, m),
            event.gained_by.to_string(),
            event.drain_ticks
        );
    }
    println!();
}
