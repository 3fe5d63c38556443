//! Study object: something to study, split into topics, starting on a given day.
use super::sm2::IntervalParams;
use super::{Calendar, CalendarDate, review_plan::BaselinePlan};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyObject {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub start: CalendarDate,
    pub toc: Vec<String>,
    #[serde(rename = "smConfig", default, skip_serializing_if = "Option::is_none")]
    pub sm_config: Option<IntervalParams>,
}

impl Default for StudyObject {
    fn default() -> Self {
        Self {
            id: None,
            name: "Nameless Study Object".to_string(),
            start: CalendarDate::today(),
            toc: Vec::new(),
            sm_config: None,
        }
    }
}

impl StudyObject {
    /// Builds the table of contents from one topic per line. Blank lines are skipped.
    pub fn from_toc_text(name: &str, start: CalendarDate, text: &str) -> Self {
        let toc = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        Self {
            name: name.to_string(),
            start,
            toc,
            ..Default::default()
        }
    }

    pub fn params(&self) -> IntervalParams {
        self.sm_config.unwrap_or_default()
    }

    /// Calendar for the object's current state.
    pub fn calendar(&self) -> Result<Calendar> {
        Calendar::build_with(&self.toc, self.start, &BaselinePlan::default(), &self.params())
    }
}
