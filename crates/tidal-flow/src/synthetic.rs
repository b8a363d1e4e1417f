//! Synthetic tidal-demand generation.
//!
//! Produces a plausible commuter day without a count-site export: a morning
//! peak into the right direction, an evening peak back out through the left,
//! and quiet shoulders either side.  Volumes are jittered per interval from
//! a seeded [`FlowRng`], so the same seed always reproduces the same day.

use tidal_core::{FlowRng, SECS_PER_INTERVAL, Tick};

use crate::schedule::{FlowPeriod, FlowSchedule};

/// 15-minute intervals in one day.
const INTERVALS_PER_DAY: u32 = 96;

/// Morning peak: 07:00–10:00.
const MORNING_PEAK: std::ops::Range<u32> = 28..40;
/// Evening peak: 16:00–19:00.
const EVENING_PEAK: std::ops::Range<u32> = 64..76;

// ── TidalDayProfile ───────────────────────────────────────────────────────────

/// Volume parameters for one synthetic day.
#[derive(Copy, Clone, Debug)]
pub struct TidalDayProfile {
    /// Vehicles per interval outside the peaks, both directions.
    pub offpeak_per_interval: u32,

    /// Vehicles per interval in a direction's peak.
    pub peak_per_interval: u32,

    /// Uniform ± jitter applied to every interval's volume.
    pub jitter: u32,
}

impl Default for TidalDayProfile {
    fn default() -> Self {
        // A busy commuter corridor: the peak direction exceeds one lane's
        // saturation flow (900 vehicles/interval at 1 entry/tick), so the
        // shared lane genuinely matters during the peaks.
        Self {
            offpeak_per_interval: 180,
            peak_per_interval: 1_260,
            jitter: 60,
        }
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate one synthetic day as `(left, right)` schedules.
///
/// The right direction carries the morning peak, the left direction the
/// evening peak — the classic tidal pattern the reversible lane exists for.
pub fn tidal_day(seed: u64, profile: &TidalDayProfile) -> (FlowSchedule, FlowSchedule) {
    let mut root = FlowRng::new(seed);
    let left = direction_day(&mut root.child(0), profile, EVENING_PEAK);
    let right = direction_day(&mut root.child(1), profile, MORNING_PEAK);
    (left, right)
}

fn direction_day(
    rng: &mut FlowRng,
    profile: &TidalDayProfile,
    peak: std::ops::Range<u32>,
) -> FlowSchedule {
    let periods = (0..INTERVALS_PER_DAY)
        .map(|interval| {
            let base = if peak.contains(&interval) {
                profile.peak_per_interval
            } else {
                profile.offpeak_per_interval
            };
            let jitter = profile.jitter as i64;
            let volume = (base as i64 + rng.gen_range(-jitter..=jitter)).max(0) as u32;
            let begin = interval as u64 * SECS_PER_INTERVAL;
            FlowPeriod {
                begin: Tick(begin),
                end: Tick(begin + SECS_PER_INTERVAL),
                vehicles: volume,
            }
        })
        .collect();
    FlowSchedule::new(periods)
}
