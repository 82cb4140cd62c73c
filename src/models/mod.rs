//! Scheduling domain models.
//!
//! Entities for the two-level resource hierarchy (worker → thread slot)
//! and the derived timetable.
//!
//! # Ownership
//!
//! | Type | Owns | Lifetime |
//! |------|------|----------|
//! | `Worker` | its `ThreadSlot`s | one scheduling run |
//! | `ThreadSlot` | its `ScheduledJob`s | one scheduling run |
//! | `Timetable` | plain `TimetableEntry` records | outlives the run |
//!
//! Jobs are referenced by integer id (their input position), never by
//! shared handle.

mod job;
mod thread_slot;
mod timetable;
mod worker;

pub use job::{Job, JobId, Placement, ScheduledJob, ThreadId, WorkerId};
pub use thread_slot::ThreadSlot;
pub use timetable::{ThreadTimetable, Timetable, TimetableEntry, WorkerTimetable};
pub use worker::Worker;
