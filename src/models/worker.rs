//! Worker model.
//!
//! A worker owns a fixed number of thread slots, created at construction.

use serde::{Deserialize, Serialize};

use super::{ScheduledJob, ThreadSlot, WorkerId};

/// A worker multiplexing a fixed set of thread slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Worker index in construction order.
    pub id: WorkerId,
    threads: Vec<ThreadSlot>,
}

impl Worker {
    /// Creates a worker with `num_threads` empty slots (ids `0..num_threads`).
    pub fn new(id: WorkerId, num_threads: usize) -> Self {
        Self {
            id,
            threads: (0..num_threads).map(ThreadSlot::new).collect(),
        }
    }

    /// The slot with the smallest available time.
    ///
    /// Ties go to the lowest thread index. Returns `None` only for a
    /// worker without slots.
    pub fn earliest_available_thread(&self) -> Option<&ThreadSlot> {
        let mut best: Option<&ThreadSlot> = None;
        for slot in &self.threads {
            match best {
                Some(b) if slot.available_time() >= b.available_time() => {}
                _ => best = Some(slot),
            }
        }
        best
    }

    /// Completion time: latest end across all slots (`0.0` if idle).
    pub fn total_end_time(&self) -> f64 {
        self.threads
            .iter()
            .map(|t| t.available_time())
            .fold(0.0, f64::max)
    }

    /// Places a job on one of this worker's slots.
    pub fn push(&mut self, job: ScheduledJob) {
        debug_assert_eq!(job.worker_id(), self.id);
        if let Some(slot) = self.threads.get_mut(job.thread_id()) {
            slot.push(job);
        }
    }

    /// Owned slots, in thread id order.
    pub fn threads(&self) -> &[ThreadSlot] {
        &self.threads
    }

    /// Number of slots.
    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn place(worker: &mut Worker, job: Job) {
        let slot = worker.earliest_available_thread().unwrap();
        let placement = job.place_at(worker.id, slot.id, slot.available_time());
        worker.push(job.schedule(placement));
    }

    #[test]
    fn test_new_worker_has_empty_slots() {
        let w = Worker::new(1, 3);
        assert_eq!(w.id, 1);
        assert_eq!(w.thread_count(), 3);
        let ids: Vec<_> = w.threads().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!((w.total_end_time() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_earliest_thread_tie_breaks_on_lowest_index() {
        let w = Worker::new(0, 4);
        assert_eq!(w.earliest_available_thread().unwrap().id, 0);
    }

    #[test]
    fn test_earliest_thread_picks_least_loaded() {
        let mut w = Worker::new(0, 3);
        place(&mut w, Job::new(0, 5.0)); // thread 0
        place(&mut w, Job::new(1, 2.0)); // thread 1
        place(&mut w, Job::new(2, 4.0)); // thread 2
        assert_eq!(w.earliest_available_thread().unwrap().id, 1);

        place(&mut w, Job::new(3, 3.0)); // thread 1 → 5.0, ties with thread 0
        assert_eq!(w.earliest_available_thread().unwrap().id, 2);
        place(&mut w, Job::new(4, 1.0)); // thread 2 → 5.0
        assert_eq!(w.earliest_available_thread().unwrap().id, 0);
        assert!((w.total_end_time() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_worker_without_slots() {
        let w = Worker::new(0, 0);
        assert!(w.earliest_available_thread().is_none());
        assert!((w.total_end_time() - 0.0).abs() < 1e-10);
    }
}
