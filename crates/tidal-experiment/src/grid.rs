//! Parameter grids and run specifications.
//!
//! A sweep enumerates every (period, threshold) combination of a grid, plus
//! the fixed baseline and control runs used as references.  Each cell gets
//! a run code like `P10-T0.5` that labels its output downstream.

use tidal_core::{FavouredDirection, RunConfig};

// ── RunSpec ───────────────────────────────────────────────────────────────────

/// One run of the controller: a configuration plus its label.
#[derive(Clone, Debug)]
pub struct RunSpec {
    pub config: RunConfig,
}

impl RunSpec {
    pub fn adaptive(period: u64, threshold: f64) -> Self {
        Self { config: RunConfig::adaptive(period, threshold) }
    }

    pub fn fixed(favoured: FavouredDirection) -> Self {
        Self { config: RunConfig::fixed(favoured) }
    }

    /// Label used in output files: `P<period>-T<threshold>` for adaptive
    /// runs, `Baseline` / `ControlLeft` / `ControlRight` for fixed ones.
    pub fn run_code(&self) -> String {
        if self.config.disable_lane_changing {
            match self.config.favoured_direction {
                FavouredDirection::Baseline => "Baseline".to_owned(),
                FavouredDirection::Left => "ControlLeft".to_owned(),
                FavouredDirection::Right => "ControlRight".to_owned(),
            }
        } else {
            format!("P{}-T{}", self.config.period, self.config.threshold)
        }
    }
}

/// The four-lanes-open reference run.
pub fn baseline_spec() -> RunSpec {
    RunSpec::fixed(FavouredDirection::Baseline)
}

/// The two fixed-allocation control runs.
pub fn control_specs() -> Vec<RunSpec> {
    vec![
        RunSpec::fixed(FavouredDirection::Right),
        RunSpec::fixed(FavouredDirection::Left),
    ]
}

// ── ParamGrid ─────────────────────────────────────────────────────────────────

/// A cartesian (period × threshold) sweep.
#[derive(Clone, Debug)]
pub struct ParamGrid {
    pub periods: Vec<u64>,
    pub thresholds: Vec<f64>,
}

impl ParamGrid {
    pub fn new(periods: Vec<u64>, thresholds: Vec<f64>) -> Self {
        Self { periods, thresholds }
    }

    /// Wide scan over orders of magnitude, for locating the useful region.
    pub fn coarse() -> Self {
        Self::new(
            vec![1, 2, 5, 10, 30, 60, 300, 600],
            vec![0.0, 1.0, 2.0, 5.0, 10.0],
        )
    }

    /// Dense scan of the short-period, low-threshold region.
    pub fn fine() -> Self {
        Self::new(
            (5..=15).collect(),
            (0..=10).map(|i| i as f64 / 10.0).collect(),
        )
    }

    /// Cells in the grid.
    pub fn len(&self) -> usize {
        self.periods.len() * self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every (period, threshold) combination, periods outermost.
    pub fn specs(&self) -> Vec<RunSpec> {
        self.periods
            .iter()
            .flat_map(|&period| {
                self.thresholds
                    .iter()
                    .map(move |&threshold| RunSpec::adaptive(period, threshold))
            })
            .collect()
    }
}
