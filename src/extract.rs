//! Field extraction from pasted booking confirmation text.
//
// Booking notifications arrive as label-on-one-line, value-on-the-next
// blocks, except for the schedule which sits inside a sentence. Each field
// gets its own pattern so a single malformed block does not take the rest
// down with it.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static ATTENDEE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Attendees[ \t]*\r?\n([^\r\n]+)").unwrap());
static SCHEDULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"An appointment has been scheduled for (.+?) PT").unwrap());
static TOPIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Topic[ \t]*\r?\n([^\r\n]+)").unwrap());
static MEETING_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Meeting Type[ \t]*\r?\n([^\r\n]+)").unwrap());

/// Location text used when an online session has no configured link.
const LINK_UNAVAILABLE: &str = "Zoom link unavailable";

#[derive(Debug, Error)]
pub enum ExtractError {
    /// One or more labeled fields could not be found in the pasted text.
    #[error("Data extraction failed, missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Everything the pipeline knows about one appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Full name as it appears under the Attendees label.
    pub attendee: String,
    /// Address the confirmation goes to.
    pub recipient: String,
    /// Schedule text verbatim, e.g. `Feb 10 2025 2:00pm - 3:00pm`.
    pub date_time: String,
    pub topic: String,
    pub meeting_type: String,
    /// Sentence describing where the session happens, for the email body.
    pub location_line: String,
    /// Short location form for the invite LOCATION property.
    pub calendar_location: String,
}

/// Pull the appointment fields out of `email_text`. All four labeled fields
/// must be present; the error lists every one that is missing so the user
/// can fix the paste in one go.
pub fn extract_booking(
    email_text: &str,
    recipient: &str,
    room: &str,
    meeting_link: Option<&str>,
) -> Result<Booking, ExtractError> {
    let attendee = capture(&ATTENDEE_RE, email_text);
    let date_time = capture(&SCHEDULE_RE, email_text);
    let topic = capture(&TOPIC_RE, email_text);
    let meeting_type = capture(&MEETING_TYPE_RE, email_text);

    let mut missing = Vec::new();
    if attendee.is_none() {
        missing.push("Attendee Name");
    }
    if date_time.is_none() {
        missing.push("Appointment Date & Time");
    }
    if topic.is_none() {
        missing.push("Topic");
    }
    if meeting_type.is_none() {
        missing.push("Meeting Type");
    }

    match (attendee, date_time, topic, meeting_type) {
        (Some(attendee), Some(date_time), Some(topic_line), Some(meeting_type)) => {
            // Topic lines carry a comma-separated course list; the course
            // itself is the last entry.
            let topic = topic_line.rsplit(", ").next().unwrap_or(&topic_line).to_string();
            let (location_line, calendar_location) =
                session_location(&meeting_type, room, meeting_link);

            debug!("Extracted booking for '{}' at '{}' ({})", attendee, date_time, meeting_type);

            Ok(Booking {
                attendee,
                recipient: recipient.trim().to_string(),
                date_time,
                topic,
                meeting_type,
                location_line,
                calendar_location,
            })
        }
        _ => Err(ExtractError::MissingFields(missing)),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Location texts for a session: the full sentence for the email body and
/// the short form for the calendar invite.
pub fn session_location(
    meeting_type: &str,
    room: &str,
    meeting_link: Option<&str>,
) -> (String, String) {
    if meeting_type.trim().eq_ignore_ascii_case("in person") {
        (format!("This session will be in {}.", room), room.to_string())
    } else {
        let link = meeting_link.unwrap_or(LINK_UNAVAILABLE);
        (format!("This session will be on Zoom: {}", link), link.to_string())
    }
}
