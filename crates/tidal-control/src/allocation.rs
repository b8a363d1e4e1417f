//! Typed lane-allocation state machine.
//!
//! # State space
//!
//! The three-lane reversible layout admits exactly two adaptive states —
//! the shared lane belongs to one direction or the other — plus a balanced
//! four-lanes-open state used only by the baseline experiment mode:
//!
//! | State       | left lanes | right lanes | reversible |
//! |-------------|------------|-------------|------------|
//! | `LeftWide`  | 2          | 1           | yes        |
//! | `RightWide` | 1          | 2           | yes        |
//! | `Balanced`  | 2          | 2           | no         |
//!
//! Transitions exist only between `LeftWide` and `RightWide`, in either
//! direction, never skipping a state.  [`reversed_toward`] rejects every
//! other request at the type level, so an illegal reversal cannot be
//! represented as a completed state change.
//!
//! [`reversed_toward`]: LaneAllocation::reversed_toward

use thiserror::Error;

use tidal_core::{Direction, FavouredDirection, RunConfig};

// ── TransitionError ───────────────────────────────────────────────────────────

/// A lane-allocation transition that the state machine refuses to make.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("the {0} direction already holds the shared lane")]
    AlreadyWide(Direction),

    #[error("the balanced baseline allocation is not reversible")]
    NotReversible,
}

// ── LaneAllocation ────────────────────────────────────────────────────────────

/// Which direction currently holds the shared inner lane.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneAllocation {
    /// The left direction runs two lanes, the right direction one.
    LeftWide,
    /// The right direction runs two lanes, the left direction one.
    RightWide,
    /// Both directions run two lanes — baseline mode only, never reversed.
    Balanced,
}

impl LaneAllocation {
    /// The allocation a run starts from, per its configuration.
    ///
    /// Adaptive runs always start `RightWide`; fixed runs start wherever
    /// their favoured direction puts the shared lane.
    pub fn initial(config: &RunConfig) -> Self {
        if config.disable_lane_changing {
            match config.favoured_direction {
                FavouredDirection::Baseline => LaneAllocation::Balanced,
                FavouredDirection::Left => LaneAllocation::LeftWide,
                FavouredDirection::Right => LaneAllocation::RightWide,
            }
        } else {
            LaneAllocation::RightWide
        }
    }

    /// Open lanes per direction as `(left, right)`.
    pub fn lane_counts(self) -> (u8, u8) {
        match self {
            LaneAllocation::LeftWide => (2, 1),
            LaneAllocation::RightWide => (1, 2),
            LaneAllocation::Balanced => (2, 2),
        }
    }

    /// Open lanes for one direction.
    pub fn lane_count(self, direction: Direction) -> u8 {
        let (left, right) = self.lane_counts();
        match direction {
            Direction::Left => left,
            Direction::Right => right,
        }
    }

    /// The direction currently holding the shared lane, or `None` for the
    /// balanced baseline.
    pub fn wide_direction(self) -> Option<Direction> {
        match self {
            LaneAllocation::LeftWide => Some(Direction::Left),
            LaneAllocation::RightWide => Some(Direction::Right),
            LaneAllocation::Balanced => None,
        }
    }

    /// `true` for the two states a reversal can move between.
    pub fn is_reversible(self) -> bool {
        !matches!(self, LaneAllocation::Balanced)
    }

    /// The allocation after handing the shared lane to `gaining`.
    ///
    /// Valid only when the opposite direction currently holds the shared
    /// lane; every other request is an illegal transition.
    pub fn reversed_toward(self, gaining: Direction) -> Result<LaneAllocation, TransitionError> {
        match (self, gaining) {
            (LaneAllocation::RightWide, Direction::Left) => Ok(LaneAllocation::LeftWide),
            (LaneAllocation::LeftWide, Direction::Right) => Ok(LaneAllocation::RightWide),
            (LaneAllocation::LeftWide, Direction::Left)
            | (LaneAllocation::RightWide, Direction::Right) => {
                Err(TransitionError::AlreadyWide(gaining))
            }
            (LaneAllocation::Balanced, _) => Err(TransitionError::NotReversible),
        }
    }
}

impl std::fmt::Display for LaneAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (left, right) = self.lane_counts();
        write!(f, "({left},{right})")
    }
}
