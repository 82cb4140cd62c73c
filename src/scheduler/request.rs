//! Scheduling request (input container).

use serde::{Deserialize, Serialize};

/// Input of one scheduling run.
///
/// Can be built in code or loaded from JSON:
///
/// ```
/// use pool_lpt::scheduler::ScheduleRequest;
///
/// let json = r#"{ "workers": 2, "threads_per_worker": 2, "durations": [5, 3, 8] }"#;
/// let request: ScheduleRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.durations.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Number of workers.
    pub workers: usize,
    /// Thread slots per worker.
    pub threads_per_worker: usize,
    /// Job durations in input order.
    #[serde(default)]
    pub durations: Vec<f64>,
}

impl ScheduleRequest {
    /// Creates a request with no jobs.
    pub fn new(workers: usize, threads_per_worker: usize) -> Self {
        Self {
            workers,
            threads_per_worker,
            durations: Vec::new(),
        }
    }

    /// Sets the job durations.
    pub fn with_durations(mut self, durations: impl Into<Vec<f64>>) -> Self {
        self.durations = durations.into();
        self
    }

    /// Appends one job duration.
    pub fn with_job(mut self, duration: f64) -> Self {
        self.durations.push(duration);
        self
    }

    /// Total slot count (`workers × threads_per_worker`).
    pub fn total_slots(&self) -> usize {
        self.workers * self.threads_per_worker
    }
}
