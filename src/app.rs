//! Terminal front end: one handler per subcommand.
//! Handlers write plain text to the given writer so they can be checked in tests.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use study_planner::export::json::{export_calendar, export_study_object, import_json};
use study_planner::models::{BaselinePlan, build_topic_schedule_with, estimate, shift};
use study_planner::{CalendarDate, IntervalParams, ScheduleEntry, StudyObject};

/// Which part of the merged calendar to print
#[derive(Default)]
pub struct AgendaFilter {
    pub on: Option<CalendarDate>,
    pub from: Option<CalendarDate>,
    pub to: Option<CalendarDate>,
}

/// Reads interval constants from a JSON file; fields left out keep their defaults.
pub fn load_params(path: &Path) -> Result<IntervalParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read interval config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid interval config {}", path.display()))
}

pub fn run_interval(scores: &[i32], params: &IntervalParams, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", estimate(scores, params)?)?;
    Ok(())
}

pub fn run_shift(date: &str, days: i64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", shift(date, days)?)?;
    Ok(())
}

pub fn run_schedule(
    date: CalendarDate,
    label: &str,
    params: &IntervalParams,
    out: &mut impl Write,
) -> Result<()> {
    let schedule = build_topic_schedule_with(date, label, &BaselinePlan::default(), params)?;
    for (day, entries) in &schedule {
        write_day(out, day, entries)?;
    }
    Ok(())
}

pub fn run_agenda(
    path: &Path,
    filter: &AgendaFilter,
    params: Option<IntervalParams>,
    export: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let mut study = import_json(path)
        .with_context(|| format!("Failed to load study object {}", path.display()))?;
    if params.is_some() {
        study.sm_config = params;
    }

    let calendar = study.calendar()?;

    if let Some(day) = filter.on {
        let entries = calendar.entries_on(&day);
        if !entries.is_empty() {
            write_day(out, &day, &entries)?;
        }
    } else {
        let from = filter
            .from
            .or_else(|| calendar.schedule().keys().next().copied())
            .unwrap_or(study.start);
        let to = filter
            .to
            .or_else(|| calendar.schedule().keys().next_back().copied())
            .unwrap_or(study.start);
        for (day, entries) in calendar.between(from, to) {
            write_day(out, day, entries)?;
        }
    }

    if let Some(export_path) = export {
        export_calendar(&study, export_path)
            .with_context(|| format!("Failed to export calendar to {}", export_path.display()))?;
    }
    Ok(())
}

pub fn run_init(
    path: &Path,
    name: Option<String>,
    start: Option<CalendarDate>,
    toc: Option<PathBuf>,
) -> Result<()> {
    let defaults = StudyObject::default();
    let name = name.unwrap_or(defaults.name);
    let start = start.unwrap_or(defaults.start);
    let toc_text = match toc {
        Some(toc_path) => fs::read_to_string(&toc_path)
            .with_context(|| format!("Failed to read table of contents {}", toc_path.display()))?,
        None => String::new(),
    };

    let study = StudyObject::from_toc_text(&name, start, &toc_text);
    export_study_object(&study, path)
        .with_context(|| format!("Failed to write study object {}", path.display()))?;
    Ok(())
}

fn write_day(out: &mut impl Write, day: &CalendarDate, entries: &[ScheduleEntry]) -> Result<()> {
    let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
    writeln!(out, "{}  {}", day, labels.join(" | "))?;
    Ok(())
}
