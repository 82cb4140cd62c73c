//! Schedule quality metrics (KPIs).
//!
//! Computes load-balance and utilization indicators from a finished
//! timetable and its makespan. Nothing here looks at the scheduler.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total work | Sum of all job durations |
//! | Theoretical minimum | Total work / (W × T), a lower bound on makespan |
//! | Worker completion | Latest end time on each worker |
//! | Load balance index | Max worker completion / average worker completion |
//! | Utilization | Total work / (Σ worker completion × T), in percent |
//!
//! Degenerate denominators yield `0.0`, or `None` for the balance index.

use serde::{Deserialize, Serialize};

use crate::models::Timetable;

/// Summary statistics of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of workers.
    pub worker_count: usize,
    /// Thread slots per worker.
    pub threads_per_worker: usize,
    /// Number of scheduled jobs.
    pub job_count: usize,
    /// Sum of job durations.
    pub total_work: f64,
    /// Reported makespan.
    pub makespan: f64,
    /// `total_work / (W × T)`; `0.0` without slots.
    pub theoretical_minimum: f64,
    /// Completion time per worker, in worker id order.
    pub worker_completion_times: Vec<f64>,
    /// Mean of `worker_completion_times` (`0.0` without workers).
    pub avg_worker_time: f64,
    /// Largest worker completion time.
    pub max_worker_time: f64,
    /// Smallest worker completion time.
    pub min_worker_time: f64,
    /// `max / avg` worker completion; 1.0 = perfectly balanced.
    /// `None` when the average is zero.
    pub load_balance_index: Option<f64>,
    /// Thread-pool utilization in percent (0..=100).
    pub utilization_pct: f64,
}

impl ScheduleSummary {
    /// Computes the summary of a timetable.
    ///
    /// # Arguments
    /// * `timetable` - The finished timetable.
    /// * `makespan` - The makespan reported alongside it.
    pub fn calculate(timetable: &Timetable, makespan: f64) -> Self {
        let worker_count = timetable.worker_count();
        let threads_per_worker = timetable.threads_per_worker();
        let total_work = timetable.total_work();
        let times = timetable.worker_completion_times();

        let slots = worker_count * threads_per_worker;
        let theoretical_minimum = if slots == 0 {
            0.0
        } else {
            total_work / slots as f64
        };

        let time_sum: f64 = times.iter().sum();
        let avg_worker_time = if times.is_empty() {
            0.0
        } else {
            time_sum / times.len() as f64
        };
        let max_worker_time = times.iter().copied().fold(0.0, f64::max);
        let min_worker_time = times.iter().copied().reduce(f64::min).unwrap_or(0.0);

        let load_balance_index = if avg_worker_time > 0.0 {
            Some(max_worker_time / avg_worker_time)
        } else {
            None
        };

        let thread_time = time_sum * threads_per_worker as f64;
        let utilization_pct = if thread_time > 0.0 {
            (total_work / thread_time * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            worker_count,
            threads_per_worker,
            job_count: timetable.job_count(),
            total_work,
            makespan,
            theoretical_minimum,
            worker_completion_times: times,
            avg_worker_time,
            max_worker_time,
            min_worker_time,
            load_balance_index,
            utilization_pct,
        }
    }

    /// Ratio of makespan to the theoretical minimum (`None` if that is zero).
    pub fn optimality_gap(&self) -> Option<f64> {
        if self.theoretical_minimum > 0.0 {
            Some(self.makespan / self.theoretical_minimum)
        } else {
            None
        }
    }
}
