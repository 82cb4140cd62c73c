//! Summary view.

use std::fmt;

use super::BANNER;
use crate::models::Timetable;
use crate::scheduler::ScheduleSummary;

/// Printable summary of a schedule.
#[derive(Debug, Clone)]
pub struct SummaryView {
    summary: ScheduleSummary,
}

impl SummaryView {
    pub fn new(timetable: &Timetable, makespan: f64) -> Self {
        Self {
            summary: ScheduleSummary::calculate(timetable, makespan),
        }
    }

    /// The underlying metrics.
    pub fn summary(&self) -> &ScheduleSummary {
        &self.summary
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;

        writeln!(f, "{BANNER}")?;
        writeln!(f, "Summary")?;
        writeln!(f, "{BANNER}")?;

        writeln!(f)?;
        writeln!(f, "Problem size:")?;
        writeln!(f, "  Workers: {}", s.worker_count)?;
        writeln!(f, "  Threads per worker: {}", s.threads_per_worker)?;
        writeln!(f, "  Jobs: {}", s.job_count)?;
        writeln!(f, "  Total job time: {:.2}s", s.total_work)?;

        writeln!(f)?;
        writeln!(f, "Schedule result:")?;
        writeln!(f, "  Total time: {:.2}s", s.makespan)?;
        writeln!(f, "  Theoretical minimum: {:.2}s", s.theoretical_minimum)?;
        writeln!(f, "  Average worker completion time: {:.2}s", s.avg_worker_time)?;
        writeln!(f, "  Max worker completion time: {:.2}s", s.max_worker_time)?;
        writeln!(f, "  Min worker completion time: {:.2}s", s.min_worker_time)?;
        match s.load_balance_index {
            Some(index) => writeln!(f, "  Load balance index: {index:.2}x")?,
            None => writeln!(f, "  Load balance index: n/a")?,
        }
        writeln!(f, "  Thread pool utilization: {:.1}%", s.utilization_pct)?;

        writeln!(f)?;
        writeln!(f, "{BANNER}")
    }
}

/// Renders the summary view as text.
pub fn render_summary(timetable: &Timetable, makespan: f64) -> String {
    SummaryView::new(timetable, makespan).to_string()
}
