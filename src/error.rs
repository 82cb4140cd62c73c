//! Error types for pool-lpt.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors raised when constructing a scheduler.
///
/// Once construction succeeds a run cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Worker count or threads-per-worker is zero.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A job duration is negative, NaN or infinite.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::ZeroWorkers | ValidationErrorKind::ZeroThreads => {
                Self::InvalidConfiguration(err.message)
            }
            ValidationErrorKind::NegativeDuration | ValidationErrorKind::NonFiniteDuration => {
                Self::InvalidDuration(err.message)
            }
        }
    }
}

/// Result alias for scheduler construction.
pub type Result<T> = std::result::Result<T, ScheduleError>;
