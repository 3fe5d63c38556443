//! Errors raised by the scheduling core.

/// Scheduling error type
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Review history had no entries
    #[error("History must contain at least one element")]
    InvalidHistory,
    /// Quality score outside 0-5
    #[error("Quality score {0} is outside the allowed range 0 - 5")]
    InvalidScore(i32),
    /// Text that is not a canonical yyyy-MM-dd date
    #[error("Invalid date '{0}', expected yyyy-MM-dd")]
    InvalidDate(String),
    /// Interval text that is not a number of days
    #[error("Invalid interval '{0}', expected a number of days")]
    InvalidInterval(String),
    /// Shift result is not a representable calendar date
    #[error("Shifting {date} by {days} days leaves the supported date range")]
    DateOutOfRange { date: String, days: i64 },
}

/// Scheduling result type
pub type Result<T> = std::result::Result<T, ScheduleError>;
