//! Two-level LPT scheduling for pools of multi-threaded workers.
//!
//! Assigns a batch of independent jobs with known durations onto `W`
//! workers, each running `T` parallel thread slots, minimizing makespan
//! with a Longest-Processing-Time-first greedy rule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `ScheduledJob`, `ThreadSlot`,
//!   `Worker`, `Timetable`
//! - **`validation`**: Input integrity checks (worker/thread counts, durations)
//! - **`scheduler`**: `ThreadPoolScheduler` and `ScheduleSummary` metrics
//! - **`report`**: Timeline and summary text views
//!
//! # Example
//!
//! ```
//! use pool_lpt::scheduler::ThreadPoolScheduler;
//! use pool_lpt::report::render_timeline;
//!
//! let outcome = ThreadPoolScheduler::new(1, 1, &[7.0]).unwrap().run();
//! assert_eq!(outcome.makespan, 7.0);
//! assert!(render_timeline(&outcome.timetable, outcome.makespan).contains("[J0:7.0s]"));
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use scheduler::{ScheduleOutcome, ScheduleRequest, ThreadPoolScheduler};
