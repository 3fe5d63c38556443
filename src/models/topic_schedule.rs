//! Review chain for a single topic.
//!
//! Each history from the review plan is turned into an interval, and the intervals are
//! applied one after another starting from the topic's first day:
//! `date, date + i1, date + i1 + i2, ...`

use super::calendar_date::whole_days;
use super::review_plan::{BaselinePlan, ReviewPlan};
use super::sm2::{IntervalParams, estimate};
use super::{CalendarDate, DateSchedule, ScheduleEntry};
use crate::error::Result;
use tracing::debug;

/// Review dates for one topic, strictly increasing, first element is `date`.
pub fn review_dates(
    date: CalendarDate,
    label: &str,
    plan: &dyn ReviewPlan,
    params: &IntervalParams,
) -> Result<Vec<CalendarDate>> {
    let intervals = plan
        .histories(label)
        .iter()
        .map(|history| estimate(history, params))
        .collect::<Result<Vec<String>>>()?;

    intervals.iter().try_fold(vec![date], |mut dates, interval| {
        let last = dates[dates.len() - 1];
        // A custom parameterization may estimate under a day; keep dates distinct
        let step = whole_days(interval)?.max(1);
        dates.push(last.shift(step)?);
        Ok(dates)
    })
}

/// Baseline six-date schedule for a topic, every date holding one success entry.
pub fn build_topic_schedule(date: CalendarDate, label: &str) -> Result<DateSchedule> {
    build_topic_schedule_with(date, label, &BaselinePlan::default(), &IntervalParams::default())
}

pub fn build_topic_schedule_with(
    date: CalendarDate,
    label: &str,
    plan: &dyn ReviewPlan,
    params: &IntervalParams,
) -> Result<DateSchedule> {
    let dates = review_dates(date, label, plan, params)?;
    debug!(
        topic = label,
        first = %date,
        last = %dates[dates.len() - 1],
        reviews = dates.len(),
        "built topic schedule"
    );

    Ok(dates
        .into_iter()
        .map(|day| (day, vec![ScheduleEntry::success(label)]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::EntryKind;

    fn day(text: &str) -> CalendarDate {
        CalendarDate::parse(text).unwrap()
    }

    #[test]
    fn test_baseline_chain() {
        // intervals: 1, 6.93, 8.97, 11.92, 16.20 -> whole days 1, 6, 8, 11, 16
        let dates = review_dates(
            day("2023-01-01"),
            "A",
            &BaselinePlan::default(),
            &IntervalParams::default(),
        )
        .unwrap();
        let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "2023-01-01",
                "2023-01-02",
                "2023-01-08",
                "2023-01-16",
                "2023-01-27",
                "2023-02-12"
            ]
        );
    }

    #[test]
    fn test_schedule_shape() {
        let schedule = build_topic_schedule(day("2024-02-20"), "Limits").unwrap();
        assert_eq!(schedule.len(), 6);

        let dates: Vec<_> = schedule.keys().copied().collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(dates[0], day("2024-02-20"));

        for entries in schedule.values() {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].kind, EntryKind::Success);
            assert_eq!(entries[0].label, "Limits");
        }
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let first = build_topic_schedule(day("2023-06-15"), "Series").unwrap();
        let second = build_topic_schedule(day("2023-06-15"), "Series").unwrap();
        assert_eq!(first, second);
    }

    struct FailingPlan;

    impl ReviewPlan for FailingPlan {
        fn histories(&self, _label: &str) -> Vec<Vec<i32>> {
            vec![vec![3], vec![]]
        }
    }

    #[test]
    fn test_plan_errors_propagate() {
        let result = build_topic_schedule_with(
            day("2023-01-01"),
            "A",
            &FailingPlan,
            &IntervalParams::default(),
        );
        assert_eq!(result, Err(ScheduleError::InvalidHistory));
    }

    #[test]
    fn test_short_intervals_still_advance() {
        let params = IntervalParams {
            a: 0.1,
            ..Default::default()
        };
        let dates = review_dates(day("2023-01-01"), "A", &BaselinePlan::default(), &params)
            .unwrap();
        assert_eq!(dates.len(), 6);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
