//! Merged review calendar for a whole table of contents.
//!
//! Topic `i` starts `i` days after the study start. Every topic's schedule is built
//! independently and the results are merged per date, concatenating entry lists in
//! table-of-contents order.

use super::review_plan::{BaselinePlan, ReviewPlan};
use super::sm2::IntervalParams;
use super::topic_schedule::build_topic_schedule_with;
use super::{CalendarDate, DateSchedule, ScheduleEntry, entry_count};
use crate::error::Result;
use tracing::debug;

/// Snapshot of a merged schedule. Rebuild it whenever the table of contents changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calendar {
    schedule: DateSchedule,
}

impl Calendar {
    pub fn build(toc: &[String], start: CalendarDate) -> Result<Self> {
        Self::build_with(toc, start, &BaselinePlan::default(), &IntervalParams::default())
    }

    pub fn build_with(
        toc: &[String],
        start: CalendarDate,
        plan: &dyn ReviewPlan,
        params: &IntervalParams,
    ) -> Result<Self> {
        let mut schedule = DateSchedule::new();

        for (offset, label) in (0i64..).zip(toc) {
            let topic_start = start.shift(offset)?;
            let topic_schedule = build_topic_schedule_with(topic_start, label, plan, params)?;
            merge_into(&mut schedule, topic_schedule);
        }

        debug!(
            topics = toc.len(),
            dates = schedule.len(),
            entries = entry_count(&schedule),
            "aggregated calendar"
        );
        Ok(Self { schedule })
    }

    /// Entries due on `date`, empty when nothing is scheduled.
    pub fn entries_on(&self, date: &CalendarDate) -> Vec<ScheduleEntry> {
        self.schedule.get(date).cloned().unwrap_or_default()
    }

    /// Dates within `from..=to` that have entries.
    pub fn between(
        &self,
        from: CalendarDate,
        to: CalendarDate,
    ) -> impl Iterator<Item = (&CalendarDate, &Vec<ScheduleEntry>)> {
        // BTreeMap::range panics on an inverted range
        let upper = if to < from { from } else { to };
        self.schedule
            .range(from..=upper)
            .filter(move |(date, _)| **date <= to)
    }

    pub fn schedule(&self) -> &DateSchedule {
        &self.schedule
    }

    pub fn into_schedule(self) -> DateSchedule {
        self.schedule
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

/// Appends each per-date list of `topic` after what `merged` already holds.
pub fn merge_into(merged: &mut DateSchedule, topic: DateSchedule) {
    for (date, entries) in topic {
        merged.entry(date).or_default().extend(entries);
    }
}

/// Date lookup over the merged calendar of `toc` starting on `start`, with baseline reviews.
pub fn aggregate(
    toc: &[String],
    start: &str,
) -> Result<impl Fn(&CalendarDate) -> Vec<ScheduleEntry> + use<>> {
    aggregate_with(toc, start, &BaselinePlan::default(), &IntervalParams::default())
}

pub fn aggregate_with(
    toc: &[String],
    start: &str,
    plan: &dyn ReviewPlan,
    params: &IntervalParams,
) -> Result<impl Fn(&CalendarDate) -> Vec<ScheduleEntry> + use<>> {
    // Nothing is scheduled without topics, whatever the start date says
    let calendar = if toc.is_empty() {
        Calendar::default()
    } else {
        Calendar::build_with(toc, CalendarDate::parse(start)?, plan, params)?
    };
    Ok(move |date: &CalendarDate| calendar.entries_on(date))
}
