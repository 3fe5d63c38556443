use study_planner::models::{
    BaselinePlan, ReviewPlan, aggregate, aggregate_with, build_topic_schedule, entry_count,
    estimate, shift,
};
use study_planner::{Calendar, CalendarDate, IntervalParams, ScheduleError, StudyObject};

fn day(text: &str) -> CalendarDate {
    CalendarDate::parse(text).unwrap()
}

#[test]
fn test_estimator_contract() {
    let params = IntervalParams::default();
    assert_eq!(estimate(&[0], &params).unwrap(), "1");
    assert_eq!(estimate(&[3], &params).unwrap(), "1");
    assert_eq!(estimate(&[3, 3], &params).unwrap(), "6.93");
    assert_eq!(estimate(&[], &params), Err(ScheduleError::InvalidHistory));
    assert_eq!(estimate(&[6], &params), Err(ScheduleError::InvalidScore(6)));
}

#[test]
fn test_shifter_contract() {
    assert_eq!(shift("2023-01-31", 1).unwrap(), "2023-02-01");
    assert_eq!(shift("2024-02-28", 1).unwrap(), "2024-02-29");
    assert!(matches!(shift("2024-2-28", 1), Err(ScheduleError::InvalidDate(_))));
}

#[test]
fn test_topic_schedule_contract() {
    let schedule = build_topic_schedule(day("2023-12-20"), "Vectors").unwrap();
    assert_eq!(schedule.len(), 6);
    assert!(schedule.keys().zip(schedule.keys().skip(1)).all(|(a, b)| a < b));
    assert!(schedule.values().all(|entries| entries.len() == 1 && entries[0].label == "Vectors"));
}

#[test]
fn test_aggregate_is_lossless() {
    let toc: Vec<String> = (1..=20).map(|n| format!("Chapter {n}")).collect();
    let calendar = Calendar::build(&toc, day("2023-01-01")).unwrap();
    assert_eq!(entry_count(calendar.schedule()), 6 * toc.len());

    // Every date's list follows table-of-contents order
    for entries in calendar.schedule().values() {
        let positions: Vec<usize> = entries
            .iter()
            .map(|entry| toc.iter().position(|label| *label == entry.label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_aggregate_lookup_for_two_topics() {
    let toc = vec!["A".to_string(), "B".to_string()];
    let lookup = aggregate(&toc, "2023-01-01").unwrap();

    let total: usize = (0..60)
        .map(|offset| lookup(&day("2023-01-01").shift(offset).unwrap()).len())
        .sum();
    assert_eq!(total, 12);

    let shared = lookup(&day("2023-01-02"));
    assert_eq!(shared[0].label, "A");
    assert_eq!(shared[1].label, "B");
}

#[test]
fn test_empty_toc_lookup() {
    let lookup = aggregate(&[], "2023-01-01").unwrap();
    assert!(lookup(&day("2023-01-01")).is_empty());
    assert!(lookup(&day("2024-07-04")).is_empty());
}

/// Stands in for a collaborator that supplies recorded grades per topic.
struct RecordedPlan;

impl ReviewPlan for RecordedPlan {
    fn histories(&self, label: &str) -> Vec<Vec<i32>> {
        if label == "Hard topic" {
            vec![vec![1], vec![1, 2]]
        } else {
            BaselinePlan::default().histories(label)
        }
    }
}

#[test]
fn test_substituted_review_plan() {
    let toc = vec!["Easy topic".to_string(), "Hard topic".to_string()];
    let lookup = aggregate_with(&toc, "2023-01-01", &RecordedPlan, &IntervalParams::default())
        .unwrap();

    // Hard topic: starts 01-02, then two one-day steps
    for date in ["2023-01-02", "2023-01-03", "2023-01-04"] {
        assert!(lookup(&day(date)).iter().any(|entry| entry.label == "Hard topic"));
    }
    assert!(lookup(&day("2023-01-05")).is_empty());
}

#[test]
fn test_study_object_calendar() {
    let study = StudyObject::from_toc_text("Algebra", day("2023-01-01"), "Groups\nRings\nFields");
    let calendar = study.calendar().unwrap();
    assert_eq!(entry_count(calendar.schedule()), 18);
    assert_eq!(calendar.entries_on(&day("2023-01-01")).len(), 1);
}
