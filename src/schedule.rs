//! Parsing of the extracted schedule text into concrete instants.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::debug;
use thiserror::Error;

/// Left side of the schedule range, e.g. `Feb 10 2025 2:00pm`.
const START_FORMAT: &str = "%b %d %Y %I:%M%p";
/// Right side of the range carries only a clock time, e.g. `3:00pm`.
const END_FORMAT: &str = "%I:%M%p";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Expected '<start> - <end>' but got '{0}'")]
    MalformedRange(String),
    #[error("Invalid start time '{value}': {source}")]
    InvalidStart { value: String, source: chrono::ParseError },
    #[error("Invalid end time '{value}': {source}")]
    InvalidEnd { value: String, source: chrono::ParseError },
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("Time '{0}' is invalid or ambiguous in {1}")]
    AmbiguousLocalTime(NaiveDateTime, Tz),
}

/// Localized start and end of one session. The end shares the start's date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Parse `date_time` (as extracted, e.g. `Feb 10 2025 2:00pm - 3:00pm`)
/// into a [`SessionWindow`] in the given IANA timezone.
pub fn parse_session_window(date_time: &str, timezone: &str) -> Result<SessionWindow, ScheduleError> {
    let tz: Tz =
        timezone.parse().map_err(|_| ScheduleError::UnknownTimezone(timezone.to_string()))?;

    let parts: Vec<&str> = date_time.split(" - ").collect();
    if parts.len() != 2 {
        return Err(ScheduleError::MalformedRange(date_time.to_string()));
    }
    let start_text = parts[0].trim();
    let end_text = parts[1].trim();

    let start = NaiveDateTime::parse_from_str(start_text, START_FORMAT)
        .map_err(|source| ScheduleError::InvalidStart { value: start_text.to_string(), source })?;
    let end_time = NaiveTime::parse_from_str(end_text, END_FORMAT)
        .map_err(|source| ScheduleError::InvalidEnd { value: end_text.to_string(), source })?;
    // The end clock time falls on the same date as the start.
    let end = start.date().and_time(end_time);

    let window = SessionWindow { start: localize(start, tz)?, end: localize(end, tz)? };
    debug!("Parsed session window {} -> {}", window.start, window.end);
    Ok(window)
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, ScheduleError> {
    tz.from_local_datetime(&naive)
        .single()
        .ok_or(ScheduleError::AmbiguousLocalTime(naive, tz))
}
