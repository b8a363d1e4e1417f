//! Configuration error type.
//!
//! Sub-crates define their own error enums for their domain failures and may
//! wrap `ConfigError` as one variant via `#[from]`.

use thiserror::Error;

/// Invalid [`RunConfig`][crate::RunConfig] parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("period must be at least 1 tick")]
    ZeroPeriod,

    #[error("threshold must be non-negative, got {0}")]
    NegativeThreshold(f64),

    #[error("threshold must be finite")]
    NonFiniteThreshold,
}
