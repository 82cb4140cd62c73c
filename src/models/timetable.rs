//! Timetable (solution) model.
//!
//! A read-only snapshot of a finished run, keyed by worker then thread,
//! each holding the jobs placed on that slot in start-time order. It is
//! the only artifact the reporting layer consumes.

use serde::{Deserialize, Serialize};

use super::{JobId, ThreadId, ThreadSlot, Worker, WorkerId};

/// A complete timetable: worker → thread → ordered job records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Per-worker schedules, in worker id order.
    pub workers: Vec<WorkerTimetable>,
}

/// Schedule of a single worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerTimetable {
    /// Worker id.
    pub worker_id: WorkerId,
    /// Per-thread schedules, in thread id order.
    pub threads: Vec<ThreadTimetable>,
}

/// Schedule of a single thread slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadTimetable {
    /// Thread id within the worker.
    pub thread_id: ThreadId,
    /// Job records in start-time order.
    pub entries: Vec<TimetableEntry>,
}

/// One scheduled job as recorded in the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Job id.
    pub job_id: JobId,
    /// Processing duration.
    pub duration: f64,
    /// Start time.
    pub start: f64,
    /// End time.
    pub end: f64,
}

impl Timetable {
    /// Derives a timetable from workers after all jobs are placed.
    ///
    /// Walks workers then slots in id order and copies each slot's jobs
    /// as they are; no re-sorting.
    pub fn from_workers(workers: &[Worker]) -> Self {
        Self {
            workers: workers.iter().map(WorkerTimetable::from_worker).collect(),
        }
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Threads per worker (taken from the first worker, 0 if none).
    pub fn threads_per_worker(&self) -> usize {
        self.workers.first().map(|w| w.threads.len()).unwrap_or(0)
    }

    /// Iterates over `(worker_id, thread_id, entry)` for every job.
    pub fn entries(&self) -> impl Iterator<Item = (WorkerId, ThreadId, &TimetableEntry)> + '_ {
        self.workers.iter().flat_map(|w| {
            w.threads.iter().flat_map(move |t| {
                t.entries
                    .iter()
                    .map(move |e| (w.worker_id, t.thread_id, e))
            })
        })
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.entries().count()
    }

    /// Whether no job was scheduled.
    pub fn is_empty(&self) -> bool {
        self.job_count() == 0
    }

    /// Finds where a job was placed.
    pub fn entry_for_job(&self, job_id: JobId) -> Option<(WorkerId, ThreadId, &TimetableEntry)> {
        self.entries().find(|(_, _, e)| e.job_id == job_id)
    }

    /// Sum of all job durations.
    pub fn total_work(&self) -> f64 {
        self.entries().map(|(_, _, e)| e.duration).sum()
    }

    /// Latest end time across all entries (`0.0` when empty).
    pub fn makespan(&self) -> f64 {
        self.entries().map(|(_, _, e)| e.end).fold(0.0, f64::max)
    }

    /// Completion time of each worker, in worker id order.
    pub fn worker_completion_times(&self) -> Vec<f64> {
        self.workers.iter().map(|w| w.completion_time()).collect()
    }
}

impl WorkerTimetable {
    fn from_worker(worker: &Worker) -> Self {
        Self {
            worker_id: worker.id,
            threads: worker
                .threads()
                .iter()
                .map(ThreadTimetable::from_slot)
                .collect(),
        }
    }

    /// Latest end time across this worker's threads (`0.0` when idle).
    pub fn completion_time(&self) -> f64 {
        self.threads
            .iter()
            .map(|t| t.completion_time())
            .fold(0.0, f64::max)
    }
}

impl ThreadTimetable {
    fn from_slot(slot: &ThreadSlot) -> Self {
        Self {
            thread_id: slot.id,
            entries: slot
                .jobs()
                .iter()
                .map(|j| TimetableEntry {
                    job_id: j.id(),
                    duration: j.duration(),
                    start: j.start(),
                    end: j.end(),
                })
                .collect(),
        }
    }

    /// End of the last entry (`0.0` when empty).
    pub fn completion_time(&self) -> f64 {
        self.entries.iter().map(|e| e.end).fold(0.0, f64::max)
    }
}
