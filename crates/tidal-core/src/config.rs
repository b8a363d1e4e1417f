//! Per-run control configuration.
//!
//! A `RunConfig` is set once at run start and never mutated.  The application
//! constructs it directly (or deserializes it with the `serde` feature) and
//! passes it to the lane controller, which calls [`RunConfig::validate`]
//! before its first tick.

use crate::error::ConfigError;

// ── FavouredDirection ─────────────────────────────────────────────────────────

/// Initial-allocation override for baseline and control runs.
///
/// Only consulted when `disable_lane_changing` is set; adaptive runs always
/// start with the shared lane given to `Right`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FavouredDirection {
    /// Give the shared lane to the right direction at run start (default).
    #[default]
    Right,
    /// Give the shared lane to the left direction at run start.
    Left,
    /// Open the shared lane to both directions and never reverse — the
    /// four-lanes-open reference case.
    Baseline,
}

impl FavouredDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FavouredDirection::Right => "right",
            FavouredDirection::Left => "left",
            FavouredDirection::Baseline => "baseline",
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Immutable parameters for one control run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Ticks between decision evaluations.  Must be ≥ 1.
    pub period: u64,

    /// Minimum mean-density advantage (vehicles per tick) a direction must
    /// hold over its opposite before a reversal is triggered.  Non-negative;
    /// an advantage exactly equal to the threshold does not trigger.
    pub threshold: f64,

    /// Skip density sampling and decision evaluation entirely, leaving the
    /// initial allocation in place for the whole run.  Used for baseline and
    /// control experiment modes.
    pub disable_lane_changing: bool,

    /// Which direction holds the shared lane at run start (see
    /// [`FavouredDirection`]).
    pub favoured_direction: FavouredDirection,

    /// Abort a reversal whose drain-wait exceeds this many ticks.
    ///
    /// `None` (the default) waits forever: a gridlocked lane stalls the run
    /// rather than completing a reversal with vehicles still facing the
    /// wrong way.
    pub drain_timeout_ticks: Option<u64>,
}

impl RunConfig {
    /// An adaptive run with the given decision parameters and all other
    /// fields at their defaults.
    pub fn adaptive(period: u64, threshold: f64) -> Self {
        Self {
            period,
            threshold,
            disable_lane_changing: false,
            favoured_direction: FavouredDirection::Right,
            drain_timeout_ticks: None,
        }
    }

    /// A run that never reverses, holding the given initial allocation.
    pub fn fixed(favoured_direction: FavouredDirection) -> Self {
        Self {
            // The decision rule never runs; 1 keeps the window well-formed.
            period: 1,
            threshold: 0.0,
            disable_lane_changing: true,
            favoured_direction,
            drain_timeout_ticks: None,
        }
    }

    /// Check the parameters before the first tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.threshold));
        }
        Ok(())
    }
}
