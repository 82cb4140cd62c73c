//! Thread slot model.
//!
//! A thread slot is one parallel execution lane of a worker, the finest
//! schedulable resource. It exclusively owns the jobs placed on it, in
//! append order (which is also start-time order).

use serde::{Deserialize, Serialize};

use super::{ScheduledJob, ThreadId};

/// One execution lane of a worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadSlot {
    /// Slot index within its worker.
    pub id: ThreadId,
    jobs: Vec<ScheduledJob>,
}

impl ThreadSlot {
    /// Creates an empty slot.
    pub fn new(id: ThreadId) -> Self {
        Self {
            id,
            jobs: Vec::new(),
        }
    }

    /// Time at which the slot can accept its next job.
    ///
    /// End time of the last job, or `0.0` when empty.
    #[inline]
    pub fn available_time(&self) -> f64 {
        self.jobs.last().map(|j| j.end()).unwrap_or(0.0)
    }

    /// Appends a scheduled job.
    ///
    /// The job must have been placed on this slot at its current
    /// available time.
    pub fn push(&mut self, job: ScheduledJob) {
        debug_assert_eq!(job.thread_id(), self.id);
        debug_assert!(job.start() >= self.available_time());
        self.jobs.push(job);
    }

    /// Jobs in assignment order.
    pub fn jobs(&self) -> &[ScheduledJob] {
        &self.jobs
    }

    /// Whether nothing has been placed on this slot.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of job durations on this slot.
    pub fn busy_time(&self) -> f64 {
        self.jobs.iter().map(|j| j.duration()).sum()
    }
}
