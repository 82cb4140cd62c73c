//! Job model.
//!
//! A job is one independent unit of work with a fixed, known processing
//! duration. Its lifecycle is split in two types:
//!
//! - [`Job`]: input form, identified by its position in the input sequence.
//! - [`ScheduledJob`]: produced exactly once from a `Job` and a [`Placement`].
//!
//! The split makes the "outcome fields are written once" rule a property
//! of the types: the only way to obtain a `ScheduledJob` is
//! [`Job::schedule`], which consumes the job.

use serde::{Deserialize, Serialize};

/// Index of a job in the input sequence.
pub type JobId = usize;
/// Index of a worker in construction order.
pub type WorkerId = usize;
/// Index of a thread slot within its worker.
pub type ThreadId = usize;

/// An unscheduled job.
///
/// The id is used for traceability only, never for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Position in the input duration list.
    pub id: JobId,
    /// Processing duration (non-negative).
    pub duration: f64,
}

/// A scheduling decision: where a job runs and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Selected worker.
    pub worker_id: WorkerId,
    /// Selected thread slot within the worker.
    pub thread_id: ThreadId,
    /// Start time (the slot's available time before the assignment).
    pub start: f64,
    /// End time (`start + duration`).
    pub end: f64,
}

/// A job together with its placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    job: Job,
    placement: Placement,
}

impl Job {
    /// Creates a job.
    pub fn new(id: JobId, duration: f64) -> Self {
        Self { id, duration }
    }

    /// Builds one job per duration, ids following input order.
    pub fn from_durations(durations: &[f64]) -> Vec<Self> {
        durations
            .iter()
            .enumerate()
            .map(|(id, &duration)| Self::new(id, duration))
            .collect()
    }

    /// Computes where this job would land on a slot that frees up at `available`.
    #[inline]
    pub fn place_at(&self, worker_id: WorkerId, thread_id: ThreadId, available: f64) -> Placement {
        Placement {
            worker_id,
            thread_id,
            start: available,
            end: available + self.duration,
        }
    }

    /// Turns this job into a scheduled job.
    pub fn schedule(self, placement: Placement) -> ScheduledJob {
        ScheduledJob {
            job: self,
            placement,
        }
    }
}

impl ScheduledJob {
    /// Job id.
    #[inline]
    pub fn id(&self) -> JobId {
        self.job.id
    }

    /// Processing duration.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.job.duration
    }

    /// Worker the job was placed on.
    #[inline]
    pub fn worker_id(&self) -> WorkerId {
        self.placement.worker_id
    }

    /// Thread slot the job was placed on.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.placement.thread_id
    }

    /// Start time.
    #[inline]
    pub fn start(&self) -> f64 {
        self.placement.start
    }

    /// End time.
    #[inline]
    pub fn end(&self) -> f64 {
        self.placement.end
    }

    /// The underlying input job.
    pub fn job(&self) -> &Job {
        &self.job
    }

    /// The placement decision.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}
