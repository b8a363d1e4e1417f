use thiserror::Error;

use tidal_control::ControlError;
use tidal_sim::EngineError;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("control error: {0}")]
    Control(#[from] ControlError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type SweepResult<T> = Result<T, SweepError>;
