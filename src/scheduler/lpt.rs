//! Two-level Longest-Processing-Time-first scheduler.
//!
//! # Algorithm
//!
//! 1. Sort jobs by duration, descending. Equal durations keep input order
//!    (stable sort).
//! 2. For each job, pick the worker whose earliest-available thread slot
//!    frees up first. Ties go to the lowest worker id.
//! 3. Within that worker, pick the earliest-available slot. Ties go to the
//!    lowest thread id.
//! 4. Start the job at the slot's available time; it ends at
//!    `start + duration`.
//!
//! Workers are compared by their *earliest slot*, not by their completion
//! time. A worker with one long-running slot and one idle slot still wins
//! against a worker that is entirely idle but has a higher id.
//!
//! # Guarantee
//! For a single worker (flat LPT) the makespan is at most
//! `(4/3 - 1/(3m)) × OPT` with `m` slots. The two-level form has no formal
//! bound but is fully deterministic.
//!
//! # Complexity
//! O(n log n + n · W · T) for n jobs, W workers, T threads per worker.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use std::cmp::Ordering;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::ScheduleRequest;
use crate::error::Result;
use crate::models::{Job, Placement, ThreadId, Timetable, Worker, WorkerId};
use crate::validation::validate_input;

/// Result of a scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Latest completion time over all workers.
    pub makespan: f64,
    /// Worker → thread → jobs snapshot.
    pub timetable: Timetable,
}

/// The slot a job should go to next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotChoice {
    /// Selected worker.
    pub worker_id: WorkerId,
    /// Selected thread within that worker.
    pub thread_id: ThreadId,
    /// Time at which the slot frees up.
    pub available: f64,
}

/// Greedy LPT scheduler over a pool of multi-threaded workers.
///
/// Holds validated input only; every [`run`](Self::run) builds its own
/// workers, so the scheduler can be run repeatedly or shared across threads.
///
/// # Example
///
/// ```
/// use pool_lpt::scheduler::ThreadPoolScheduler;
///
/// let scheduler = ThreadPoolScheduler::new(2, 2, &[5.0, 3.0, 8.0, 6.0, 2.0]).unwrap();
/// let outcome = scheduler.run();
/// assert_eq!(outcome.makespan, 8.0);
/// assert_eq!(outcome.timetable.job_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ThreadPoolScheduler {
    workers: usize,
    threads_per_worker: usize,
    jobs: Vec<Job>,
}

impl ThreadPoolScheduler {
    /// Creates a scheduler.
    ///
    /// # Errors
    /// - `InvalidConfiguration` if `workers` or `threads_per_worker` is 0.
    /// - `InvalidDuration` if a duration is negative, NaN or infinite.
    pub fn new(workers: usize, threads_per_worker: usize, durations: &[f64]) -> Result<Self> {
        if let Err(errors) = validate_input(workers, threads_per_worker, durations) {
            debug!("rejecting scheduling input: {} problem(s)", errors.len());
            // Configuration problems are listed first.
            if let Some(first) = errors.into_iter().next() {
                return Err(first.into());
            }
        }

        Ok(Self {
            workers,
            threads_per_worker,
            jobs: Job::from_durations(durations),
        })
    }

    /// Creates a scheduler from a request.
    pub fn from_request(request: &ScheduleRequest) -> Result<Self> {
        Self::new(
            request.workers,
            request.threads_per_worker,
            &request.durations,
        )
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Thread slots per worker.
    pub fn threads_per_worker(&self) -> usize {
        self.threads_per_worker
    }

    /// Input jobs, in input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Runs the greedy assignment and derives the timetable.
    pub fn run(&self) -> ScheduleOutcome {
        debug!(
            "scheduling {} jobs on {} workers x {} threads",
            self.jobs.len(),
            self.workers,
            self.threads_per_worker
        );

        let mut workers: Vec<Worker> = (0..self.workers)
            .map(|id| Worker::new(id, self.threads_per_worker))
            .collect();

        for idx in lpt_order(&self.jobs) {
            let job = self.jobs[idx];
            let Some(placement) = decide(&job, &workers) else {
                continue;
            };
            trace!(
                "job {} ({}) -> worker {} thread {} [{}, {})",
                job.id,
                job.duration,
                placement.worker_id,
                placement.thread_id,
                placement.start,
                placement.end
            );
            workers[placement.worker_id].push(job.schedule(placement));
        }

        let makespan = workers
            .iter()
            .map(Worker::total_end_time)
            .fold(0.0, f64::max);
        let timetable = Timetable::from_workers(&workers);

        debug!("schedule complete: makespan {makespan}");
        ScheduleOutcome {
            makespan,
            timetable,
        }
    }
}

/// Job indices in LPT order: longest first, input order on ties.
pub fn lpt_order(jobs: &[Job]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..jobs.len()).collect();
    // `sort_by` is stable.
    indices.sort_by(|&a, &b| {
        jobs[b]
            .duration
            .partial_cmp(&jobs[a].duration)
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// Selects the slot for the next job.
///
/// Returns the worker whose earliest-available slot is smallest (lowest
/// worker id on ties) together with that slot. `None` if no worker has
/// any slot.
pub fn select_slot(workers: &[Worker]) -> Option<SlotChoice> {
    let mut best: Option<SlotChoice> = None;
    for worker in workers {
        let Some(slot) = worker.earliest_available_thread() else {
            continue;
        };
        let available = slot.available_time();
        match best {
            Some(b) if available >= b.available => {}
            _ => {
                best = Some(SlotChoice {
                    worker_id: worker.id,
                    thread_id: slot.id,
                    available,
                })
            }
        }
    }
    best
}

/// Pure scheduling decision for one job given the current worker state.
pub fn decide(job: &Job, workers: &[Worker]) -> Option<Placement> {
    select_slot(workers).map(|c| job.place_at(c.worker_id, c.thread_id, c.available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::TimetableEntry;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn entry(outcome: &ScheduleOutcome, job_id: usize) -> (usize, usize, TimetableEntry) {
        let (w, t, e) = outcome.timetable.entry_for_job(job_id).unwrap();
        (w, t, *e)
    }

    fn assert_placed(outcome: &ScheduleOutcome, job_id: usize, w: usize, t: usize, start: f64, end: f64) {
        let (ew, et, e) = entry(outcome, job_id);
        assert_eq!((ew, et), (w, t), "job {job_id} slot");
        assert!((e.start - start).abs() < 1e-10, "job {job_id} start");
        assert!((e.end - end).abs() < 1e-10, "job {job_id} end");
    }

    #[test]
    fn test_lpt_order_is_stable_descending() {
        let jobs = Job::from_durations(&[3.0, 5.0, 3.0, 8.0, 5.0]);
        assert_eq!(lpt_order(&jobs), vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_two_by_two_trace() {
        // Sorted: 8(j2), 6(j3), 5(j0), 3(j1), 2(j4)
        let outcome = ThreadPoolScheduler::new(2, 2, &[5.0, 3.0, 8.0, 6.0, 2.0])
            .unwrap()
            .run();

        assert_placed(&outcome, 2, 0, 0, 0.0, 8.0);
        assert_placed(&outcome, 3, 0, 1, 0.0, 6.0);
        assert_placed(&outcome, 0, 1, 0, 0.0, 5.0);
        assert_placed(&outcome, 1, 1, 1, 0.0, 3.0);
        assert_placed(&outcome, 4, 1, 1, 3.0, 5.0);
        assert!((outcome.makespan - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_three_by_three_trace() {
        let outcome = ThreadPoolScheduler::new(3, 3, &[10.0, 5.0, 8.0, 3.0, 6.0, 4.0, 7.0, 2.0, 9.0, 1.0])
            .unwrap()
            .run();

        assert_placed(&outcome, 0, 0, 0, 0.0, 10.0);
        assert_placed(&outcome, 8, 0, 1, 0.0, 9.0);
        assert_placed(&outcome, 2, 0, 2, 0.0, 8.0);
        assert_placed(&outcome, 6, 1, 0, 0.0, 7.0);
        assert_placed(&outcome, 4, 1, 1, 0.0, 6.0);
        assert_placed(&outcome, 1, 1, 2, 0.0, 5.0);
        assert_placed(&outcome, 5, 2, 0, 0.0, 4.0);
        assert_placed(&outcome, 3, 2, 1, 0.0, 3.0);
        assert_placed(&outcome, 7, 2, 2, 0.0, 2.0);
        // Worker 2's thread 2 frees up first (t=2).
        assert_placed(&outcome, 9, 2, 2, 2.0, 3.0);
        assert!((outcome.makespan - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_worker_choice_uses_earliest_slot_not_completion() {
        // Worker 0 is busy until 10 on thread 0 but thread 1 is idle, so it
        // ties with idle worker 1 and wins on id.
        let outcome = ThreadPoolScheduler::new(2, 2, &[10.0, 2.0]).unwrap().run();
        assert_placed(&outcome, 0, 0, 0, 0.0, 10.0);
        assert_placed(&outcome, 1, 0, 1, 0.0, 2.0);
        assert!(outcome.timetable.workers[1].threads.iter().all(|t| t.entries.is_empty()));
    }

    #[test]
    fn test_empty_input() {
        let outcome = ThreadPoolScheduler::new(3, 2, &[]).unwrap().run();
        assert!((outcome.makespan - 0.0).abs() < 1e-10);
        assert_eq!(outcome.timetable.worker_count(), 3);
        assert_eq!(outcome.timetable.threads_per_worker(), 2);
        assert!(outcome.timetable.is_empty());
        for w in &outcome.timetable.workers {
            assert_eq!(w.threads.len(), 2);
        }
    }

    #[test]
    fn test_single_job() {
        let outcome = ThreadPoolScheduler::new(1, 1, &[7.0]).unwrap().run();
        assert!((outcome.makespan - 7.0).abs() < 1e-10);
        assert_placed(&outcome, 0, 0, 0, 0.0, 7.0);
    }

    #[test]
    fn test_single_slot_runs_back_to_back() {
        let outcome = ThreadPoolScheduler::new(1, 1, &[1.0, 3.0, 2.0]).unwrap().run();
        let entries = &outcome.timetable.workers[0].threads[0].entries;
        let ids: Vec<_> = entries.iter().map(|e| e.job_id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
        for pair in entries.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!((outcome.makespan - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_duration_jobs() {
        let outcome = ThreadPoolScheduler::new(2, 1, &[0.0, 0.0, 0.0]).unwrap().run();
        assert_eq!(outcome.timetable.job_count(), 3);
        assert!((outcome.makespan - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = ThreadPoolScheduler::new(0, 2, &[1.0]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = ThreadPoolScheduler::new(2, 0, &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_configuration_error_reported_before_duration_error() {
        let err = ThreadPoolScheduler::new(0, 1, &[-1.0]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = ThreadPoolScheduler::new(1, 1, &[1.0, -0.5]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDuration(_)));
    }

    #[test]
    fn test_from_request() {
        let request = ScheduleRequest::new(1, 2).with_durations(vec![4.0, 4.0]);
        let scheduler = ThreadPoolScheduler::from_request(&request).unwrap();
        assert_eq!(scheduler.worker_count(), 1);
        assert_eq!(scheduler.threads_per_worker(), 2);
        assert_eq!(scheduler.jobs().len(), 2);
        assert!((scheduler.run().makespan - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let scheduler = ThreadPoolScheduler::new(3, 2, &[4.0, 1.5, 2.25, 9.0, 0.0, 3.0, 3.0]).unwrap();
        let first = scheduler.run();
        let second = scheduler.run();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_select_slot_on_fresh_workers() {
        let workers: Vec<Worker> = (0..3).map(|id| Worker::new(id, 2)).collect();
        let choice = select_slot(&workers).unwrap();
        assert_eq!((choice.worker_id, choice.thread_id), (0, 0));
        assert!((choice.available - 0.0).abs() < 1e-10);
        assert!(select_slot(&[]).is_none());
    }

    #[test]
    fn test_decide_is_pure() {
        let workers = vec![Worker::new(0, 1)];
        let job = Job::new(0, 3.0);
        let a = decide(&job, &workers).unwrap();
        let b = decide(&job, &workers).unwrap();
        assert_eq!(a, b);
        assert!(workers[0].threads()[0].is_empty());
    }

    #[test]
    fn test_concurrent_runs_do_not_interfere() {
        let scheduler = ThreadPoolScheduler::new(2, 3, &[5.0, 1.0, 4.0, 4.0, 2.0, 7.0, 3.0]).unwrap();
        let expected = scheduler.run();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| scheduler.run())).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_randomized_invariants() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let workers = rng.random_range(1..5);
            let threads = rng.random_range(1..5);
            let n = rng.random_range(0..40);
            let durations: Vec<f64> = (0..n)
                .map(|_| {
                    if rng.random::<f64>() < 0.1 {
                        0.0
                    } else {
                        (rng.random_range(1..100u32) as f64) / 4.0
                    }
                })
                .collect();

            let scheduler = ThreadPoolScheduler::new(workers, threads, &durations).unwrap();
            let outcome = scheduler.run();
            let tt = &outcome.timetable;

            // Conservation: each job id exactly once.
            let mut ids: Vec<usize> = tt.entries().map(|(_, _, e)| e.job_id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..n).collect::<Vec<_>>());

            // Shape: every slot present.
            assert_eq!(tt.worker_count(), workers);
            assert!(tt.workers.iter().all(|w| w.threads.len() == threads));

            // Non-overlap within each slot.
            for w in &tt.workers {
                for t in &w.threads {
                    for pair in t.entries.windows(2) {
                        assert!(pair[0].end <= pair[1].start);
                    }
                }
            }

            // Makespan is the latest end time.
            let max_end = tt.entries().map(|(_, _, e)| e.end).fold(0.0, f64::max);
            assert_eq!(outcome.makespan, max_end);
            let total: f64 = durations.iter().sum();
            assert_eq!(outcome.makespan == 0.0, total == 0.0);

            // Pigeonhole lower bound.
            let bound = total / (workers * threads) as f64;
            assert!(outcome.makespan + 1e-9 >= bound);

            // Determinism.
            assert_eq!(scheduler.run(), outcome);
        }
    }

}
