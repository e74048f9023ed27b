//! Day-by-day scheduling of transform jobs.
//!
//! A run walks forward one calendar day at a time from a start date and,
//! for each day, re-translates everything under that day's year/month
//! prefix. The sequence of days is an ordinary lazy iterator, so callers
//! bound it with `take` and stop it early with a [`CancellationToken`].

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::job::{JobError, TransformJob, UnitReport};
use crate::store::ObjectStore;

/// One day's worth of work: the year/month prefix that day falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkUnit {
    date: NaiveDate,
}

impl WorkUnit {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Source key prefix, `{year}/{month}` with the month not zero-padded.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrival_etl::driver::WorkUnit;
    /// use chrono::NaiveDate;
    ///
    /// let unit = WorkUnit::new(NaiveDate::from_ymd_opt(2023, 6, 25).unwrap());
    /// assert_eq!(unit.prefix(), "2023/6");
    /// ```
    pub fn prefix(&self) -> String {
        format!("{}/{}", self.year(), self.month())
    }
}

/// Lazy, unbounded sequence of daily [`WorkUnit`]s from a start date.
///
/// Cloning captures the current position; [`restart`](Self::restart)
/// rewinds to the start date.
#[derive(Debug, Clone)]
pub struct WorkUnits {
    start: NaiveDate,
    next: Option<NaiveDate>,
}

impl WorkUnits {
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            next: Some(start),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn restart(&mut self) {
        self.next = Some(self.start);
    }
}

impl Iterator for WorkUnits {
    type Item = WorkUnit;

    fn next(&mut self) -> Option<WorkUnit> {
        let date = self.next?;
        // Only ends at the last date chrono can represent
        self.next = date.succ_opt();
        Some(WorkUnit::new(date))
    }
}

impl FusedIterator for WorkUnits {}

/// Totals for a driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Work units processed to completion.
    pub units: usize,
    pub totals: UnitReport,
    /// Whether the run stopped because the token was cancelled.
    pub cancelled: bool,
}

/// Run `job` for each unit in order until the units run out or `cancel`
/// fires.
///
/// Cancellation is checked between units; a unit in progress always
/// finishes, so no destination object is left half-written. The first
/// job error ends the run.
pub async fn run<S, I>(
    job: &TransformJob<S>,
    units: I,
    cancel: &CancellationToken,
) -> Result<RunSummary, JobError>
where
    S: ObjectStore,
    I: IntoIterator<Item = WorkUnit>,
{
    let mut summary = RunSummary::default();

    for unit in units {
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        let report = job.run_unit(&unit).await?;
        info!(
            date = %unit.date(),
            prefix = %unit.prefix(),
            written = report.objects_written,
            failed = report.objects_failed,
            accepted = report.events_accepted,
            "Finished work unit"
        );

        summary.units += 1;
        summary.totals.merge(&report);
    }

    Ok(summary)
}
