//! Timeline view.
//!
//! Turns each thread slot of a timetable into a left-to-right sequence of
//! busy and idle segments, up to the makespan. Gaps come straight from the
//! recorded start/end times.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::BANNER;
use crate::models::{JobId, ThreadId, ThreadTimetable, Timetable, WorkerId};

/// A stretch of time on a thread slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// No job running.
    Idle { start: f64, end: f64 },
    /// A job running.
    Busy {
        job_id: JobId,
        duration: f64,
        start: f64,
        end: f64,
    },
}

impl Segment {
    /// Length of the segment.
    ///
    /// Busy segments report the job's recorded duration.
    pub fn length(&self) -> f64 {
        match *self {
            Segment::Idle { start, end } => end - start,
            Segment::Busy { duration, .. } => duration,
        }
    }

    /// Whether this is an idle segment.
    pub fn is_idle(&self) -> bool {
        matches!(self, Segment::Idle { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::Idle { .. } => write!(f, "[Idle:{:.1}s]", self.length()),
            Segment::Busy {
                job_id, duration, ..
            } => write!(f, "[J{job_id}:{duration:.1}s]"),
        }
    }
}

/// Segments of one thread slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadTimeline {
    pub worker_id: WorkerId,
    pub thread_id: ThreadId,
    pub segments: Vec<Segment>,
}

/// Splits a thread's schedule into segments, padding with idle time up to
/// `makespan`.
pub fn thread_segments(thread: &ThreadTimetable, makespan: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(thread.entries.len() * 2 + 1);
    let mut current = 0.0;

    for e in &thread.entries {
        if e.start > current {
            segments.push(Segment::Idle {
                start: current,
                end: e.start,
            });
        }
        segments.push(Segment::Busy {
            job_id: e.job_id,
            duration: e.duration,
            start: e.start,
            end: e.end,
        });
        current = e.end;
    }

    if current < makespan {
        segments.push(Segment::Idle {
            start: current,
            end: makespan,
        });
    }
    segments
}

/// Builds the timeline of every slot, worker id then thread id order.
pub fn build_timeline(timetable: &Timetable, makespan: f64) -> Vec<ThreadTimeline> {
    timetable
        .workers
        .iter()
        .flat_map(|w| {
            w.threads.iter().map(move |t| ThreadTimeline {
                worker_id: w.worker_id,
                thread_id: t.thread_id,
                segments: thread_segments(t, makespan),
            })
        })
        .collect()
}

/// Printable timeline view of a timetable.
#[derive(Debug, Clone, Copy)]
pub struct TimelineView<'a> {
    timetable: &'a Timetable,
    makespan: f64,
}

impl<'a> TimelineView<'a> {
    pub fn new(timetable: &'a Timetable, makespan: f64) -> Self {
        Self {
            timetable,
            makespan,
        }
    }
}

impl fmt::Display for TimelineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "Timeline view")?;
        writeln!(f, "{BANNER}")?;

        for worker in &self.timetable.workers {
            writeln!(f)?;
            writeln!(f, "worker_{}:", worker.worker_id)?;
            for thread in &worker.threads {
                write!(f, "  thread_{}: ", thread.thread_id)?;
                for segment in thread_segments(thread, self.makespan) {
                    write!(f, "{segment}")?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{BANNER}")
    }
}

/// Renders the timeline view as text.
pub fn render_timeline(timetable: &Timetable, makespan: f64) -> String {
    TimelineView::new(timetable, makespan).to_string()
}
