//! Text reports over a finished timetable.
//!
//! Pure presentation: every function here takes a `Timetable` and its
//! makespan and produces text. No scheduling decisions are made.
//!
//! - **Timeline**: per worker and thread, busy and idle segments.
//! - **Summary**: problem size, makespan, lower bound, balance, utilization.

mod summary;
mod timeline;

pub use summary::{render_summary, SummaryView};
pub use timeline::{
    build_timeline, render_timeline, thread_segments, Segment, ThreadTimeline, TimelineView,
};

pub(crate) const BANNER: &str =
    "================================================================================";
