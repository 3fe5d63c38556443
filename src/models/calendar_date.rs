//! Calendar day in canonical `yyyy-MM-dd` form, plus day arithmetic.
use crate::error::{Result, ScheduleError};
use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A day without time of day. Ordering is chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|date| YEARS.contains(&date.year()))
            .map(Self)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses strictly: four-digit year, zero-padded month and day, nothing else.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidDate(text.to_string());
        if text.len() != 10 {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(text, CANONICAL_FORMAT).map_err(|_| invalid())?;
        // chrono accepts unpadded fields, so compare against the rendered form
        if date.format(CANONICAL_FORMAT).to_string() != text {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    pub fn shift(self, days: i64) -> Result<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            // only four-digit years have a canonical rendering
            .filter(|date| YEARS.contains(&date.year()))
            .map(Self)
            .ok_or_else(|| ScheduleError::DateOutOfRange {
                date: self.to_string(),
                days,
            })
    }
}

/// Adds `days` to a canonical date string and renders the result the same way.
pub fn shift(date: &str, days: i64) -> Result<String> {
    Ok(CalendarDate::parse(date)?.shift(days)?.to_string())
}

/// Whole days in an estimator interval string, truncated toward zero ("6.93" is 6).
pub fn whole_days(interval: &str) -> Result<i64> {
    interval
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|days| days.is_finite())
        .map(|days| days.trunc() as i64)
        .ok_or_else(|| ScheduleError::InvalidInterval(interval.to_string()))
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
