use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("free-flow traversal must take at least 1 tick")]
    ZeroFreeFlow,

    #[error("entry rate must admit at least 1 vehicle per lane per tick")]
    ZeroEntryRate,

    #[error("lane capacity must be at least 1 vehicle")]
    ZeroLaneCapacity,
}

pub type EngineResult<T> = Result<T, EngineError>;
