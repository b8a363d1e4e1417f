use thiserror::Error;

use tidal_core::{ConfigError, Direction};

use crate::allocation::{LaneAllocation, TransitionError};

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("control configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracked allocation no longer matches the lane a reversal wants to
    /// close.  Fatal: the control model and the road state have diverged and
    /// any further action is unsound.
    #[error(
        "reversal toward {requested} requested while allocation is {allocation}; \
         control state has desynchronized from the road"
    )]
    AllocationDesync {
        allocation: LaneAllocation,
        requested: Direction,
    },

    #[error("illegal allocation transition: {0}")]
    Transition(#[from] TransitionError),

    #[error("drain of the {direction} shared lane exceeded the {limit}-tick timeout")]
    DrainTimeout { direction: Direction, limit: u64 },
}

pub type ControlResult<T> = Result<T, ControlError>;
