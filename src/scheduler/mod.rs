//! Greedy scheduler and KPI evaluation.
//!
//! Provides the two-level LPT scheduler and schedule quality metrics.
//!
//! # Algorithm
//!
//! `ThreadPoolScheduler` sorts jobs longest-first and places each one on the
//! worker whose earliest-available thread slot frees up first, then on that
//! slot. It is not optimal, but it is fast and fully deterministic.
//!
//! # KPI
//!
//! `ScheduleSummary` computes total work, the pigeonhole lower bound,
//! per-worker completion times, the load-balance index and thread-pool
//! utilization.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod kpi;
mod lpt;
mod request;

pub use kpi::ScheduleSummary;
pub use lpt::{decide, lpt_order, select_slot, ScheduleOutcome, SlotChoice, ThreadPoolScheduler};
pub use request::ScheduleRequest;
