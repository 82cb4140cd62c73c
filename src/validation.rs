//! Input validation for scheduling requests.
//!
//! Checks a request before any worker is built. Detects:
//! - Zero worker count
//! - Zero threads per worker
//! - Negative durations
//! - NaN or infinite durations
//!
//! Every problem is reported, not just the first one.

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No workers to schedule on.
    ZeroWorkers,
    /// Workers have no thread slots.
    ZeroThreads,
    /// A job has a negative duration.
    NegativeDuration,
    /// A job duration is NaN or infinite.
    NonFiniteDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this error concerns the worker/thread configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::ZeroWorkers | ValidationErrorKind::ZeroThreads
        )
    }
}

/// Validates the input of a scheduling run.
///
/// Checks:
/// 1. `workers > 0`
/// 2. `threads_per_worker > 0`
/// 3. Every duration is finite
/// 4. Every duration is `>= 0`
///
/// An empty duration list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues,
/// configuration issues first.
pub fn validate_input(workers: usize, threads_per_worker: usize, durations: &[f64]) -> ValidationResult {
    let mut errors = Vec::new();

    if workers == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroWorkers,
            "worker count must be positive, got 0",
        ));
    }

    if threads_per_worker == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroThreads,
            "threads per worker must be positive, got 0",
        ));
    }

    for (id, &d) in durations.iter().enumerate() {
        if !d.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteDuration,
                format!("job {id} has non-finite duration {d}"),
            ));
        } else if d < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("job {id} has negative duration {d}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
