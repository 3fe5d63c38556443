//! One scheduled review of a topic, and the per-date view of many of them.
use super::CalendarDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Success,
}

/// Serialized as the `{ status, text }` record a calendar cell displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "status")]
    pub kind: EntryKind,
    #[serde(rename = "text")]
    pub label: String,
}

impl ScheduleEntry {
    pub fn success(label: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Success,
            label: label.into(),
        }
    }
}

/// Entries per date, ascending by date. Lists keep arrival order.
pub type DateSchedule = BTreeMap<CalendarDate, Vec<ScheduleEntry>>;

/// Total number of entries across all dates.
pub fn entry_count(schedule: &DateSchedule) -> usize {
    schedule.values().map(Vec::len).sum()
}
