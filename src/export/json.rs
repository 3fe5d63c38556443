//! JSON import/export module for study objects and rendered calendars.
//! Study objects are read from and written to files; a merged calendar is exported as
//! a date-keyed object of `{ status, text }` records.

use crate::error::ScheduleError;
use crate::models::{DateSchedule, StudyObject};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Writes any serializable value as pretty JSON to `path`, replacing the file.
pub fn export_json_to_path<T: Serialize>(value: &T, path: &Path) -> Result<(), ExportError> {
    let json_string = serde_json::to_string_pretty(value)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

pub fn export_study_object(study: &StudyObject, path: &Path) -> Result<(), ExportError> {
    export_json_to_path(study, path)?;
    info!(name = %study.name, topics = study.toc.len(), path = %path.display(), "study object exported");
    Ok(())
}

/// Reads a study object. Dates in the file must be canonical `yyyy-MM-dd`.
pub fn import_json(path: &Path) -> Result<StudyObject, ExportError> {
    let reader = BufReader::new(File::open(path)?);
    let study: StudyObject = serde_json::from_reader(reader)?;

    info!(name = %study.name, topics = study.toc.len(), path = %path.display(), "study object imported");
    Ok(study)
}

/// Exports the merged calendar of `study` in the shape the calendar view consumes.
pub fn export_calendar(study: &StudyObject, path: &Path) -> Result<DateSchedule, ExportError> {
    let schedule = study.calendar()?.into_schedule();
    export_json_to_path(&schedule, path)?;
    info!(dates = schedule.len(), path = %path.display(), "calendar exported");
    Ok(schedule)
}
