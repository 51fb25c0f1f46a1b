//! Calendar invite (.ics) generation for a confirmed session.

use crate::extract::Booking;
use crate::schedule::SessionWindow;
use anyhow::{Context, Result};
use chrono::Utc;
use icalendar::{Calendar, Component, EventLike};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Generate the one-event calendar for a confirmed booking. Times are
/// written as UTC instants so the file imports cleanly in any client.
pub fn build_invite(booking: &Booking, window: &SessionWindow, summary: &str) -> Calendar {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&Uuid::new_v4().to_string());
    ics_event.summary(summary);
    ics_event.starts(window.start.with_timezone(&Utc));
    ics_event.ends(window.end.with_timezone(&Utc));

    // DTSTAMP - required by RFC 5545
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    ics_event.location(&booking.calendar_location);
    ics_event.description(&format!(
        "{}\n{}\n{}",
        booking.attendee, booking.recipient, booking.topic
    ));
    ics_event.add_property("STATUS", "CONFIRMED");

    let ics_event = ics_event.done();
    cal.push(ics_event);
    cal.done()
}

/// Write the invite for `booking` to `path` and return the written path.
pub fn write_invite(
    booking: &Booking,
    window: &SessionWindow,
    summary: &str,
    path: &Path,
) -> Result<PathBuf> {
    let calendar = build_invite(booking, window, summary);
    fs::write(path, calendar.to_string())
        .with_context(|| format!("Failed to write calendar file {}", path.display()))?;

    info!("Calendar event created successfully: {}", path.display());
    Ok(path.to_path_buf())
}
