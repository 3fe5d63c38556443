pub mod calendar;
pub mod calendar_date;
pub mod review_plan;
pub mod schedule_entry;
pub mod sm2;
pub mod study_object;
pub mod topic_schedule;

pub use calendar::{Calendar, aggregate, aggregate_with};
pub use calendar_date::{CalendarDate, shift};
pub use review_plan::{BaselinePlan, ReviewPlan};
pub use schedule_entry::{DateSchedule, EntryKind, ScheduleEntry, entry_count};
pub use sm2::{IntervalParams, estimate};
pub use study_object::StudyObject;
pub use topic_schedule::{build_topic_schedule, build_topic_schedule_with, review_dates};
