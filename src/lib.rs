pub mod error;
pub mod export;
pub mod models;

pub use error::{Result, ScheduleError};
pub use models::{Calendar, CalendarDate, DateSchedule, IntervalParams, ScheduleEntry, StudyObject};
