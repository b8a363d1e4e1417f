use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("flow parse error: {0}")]
    Parse(String),

    #[error("no usable count rows for day {day:?}")]
    NoRows { day: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FlowResult<T> = Result<T, FlowError>;
