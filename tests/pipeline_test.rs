use anyhow::Result;
use tutorpost::compose;
use tutorpost::config::TutorConfig;
use tutorpost::extract::{extract_booking, ExtractError};
use tutorpost::schedule::parse_session_window;
use tutorpost::validation::validate_email;

// Paste as it arrives from a booking notification, including the footer
// noise around the labeled fields.
const CONFIRMATION: &str = "\
Appointment Scheduled

Hi Max,

An appointment has been scheduled for Feb 10 2025 2:00pm - 3:00pm PT.

Attendees
Jordan Lee

Meeting Type
In Person

Topic
Computer Science, CS 146

Need to make changes? Use the link below.
Reschedule | Cancel
";

#[test]
fn test_full_pipeline_renders_confirmation() -> Result<()> {
    let booking = extract_booking(CONFIRMATION, "jordan.lee@sjsu.edu", "BBC 303", None)?;
    assert_eq!(booking.attendee, "Jordan Lee");
    assert_eq!(booking.topic, "CS 146");
    assert_eq!(booking.meeting_type, "In Person");

    let window = parse_session_window(&booking.date_time, "America/Los_Angeles")?;
    assert_eq!(window.start.to_rfc3339(), "2025-02-10T14:00:00-08:00");
    assert_eq!(window.end.to_rfc3339(), "2025-02-10T15:00:00-08:00");

    let content = compose::render(&booking, &TutorConfig::default());
    assert_eq!(content.subject, "Confirmed: Tutoring for CS 146, Feb 10 2025 2:00pm - 3:00pm");
    assert!(content.body.starts_with("Hi Jordan,"));
    assert!(content.body.contains("This session will be in BBC 303."));
    assert!(content.body.ends_with("Best,\nMax Dokukin"));

    Ok(())
}

#[test]
fn test_online_booking_quotes_meeting_link() -> Result<()> {
    let text = CONFIRMATION.replace("In Person", "Online");
    let booking =
        extract_booking(&text, "jordan.lee@sjsu.edu", "BBC 303", Some("https://zoom.us/j/42"))?;

    let content = compose::render(&booking, &TutorConfig::default());
    assert!(content.body.contains("This session will be on Zoom: https://zoom.us/j/42"));

    Ok(())
}

#[test]
fn test_meeting_type_location_variants() -> Result<()> {
    // (meeting type, configured link, expected invite location)
    let cases = vec![
        ("In Person", None, "BBC 303"),
        ("in person", None, "BBC 303"),
        ("Online", Some("https://zoom.us/j/42"), "https://zoom.us/j/42"),
        ("Online", None, "Zoom link unavailable"),
        ("Phone", Some("https://zoom.us/j/42"), "https://zoom.us/j/42"),
    ];

    for (meeting_type, link, expected) in cases {
        let text = CONFIRMATION.replace("In Person", meeting_type);
        let booking = extract_booking(&text, "jordan.lee@sjsu.edu", "BBC 303", link)?;
        assert_eq!(
            booking.calendar_location, expected,
            "meeting type {:?} with link {:?}",
            meeting_type, link
        );
    }

    Ok(())
}

#[test]
fn test_garbled_paste_reports_every_missing_field() {
    let err = extract_booking("An unrelated email body", "jordan.lee@sjsu.edu", "BBC 303", None)
        .expect_err("unrelated text must not extract");

    let ExtractError::MissingFields(missing) = err;
    assert_eq!(missing.len(), 4);
    assert!(missing.contains(&"Attendee Name"));
    assert!(missing.contains(&"Appointment Date & Time"));
    assert!(missing.contains(&"Topic"));
    assert!(missing.contains(&"Meeting Type"));
}

#[test]
fn test_extracted_schedule_text_parses() -> Result<()> {
    // The text handed to the schedule parser is exactly what extraction
    // captured, so the two stages have to agree on the format.
    let booking = extract_booking(CONFIRMATION, "jordan.lee@sjsu.edu", "BBC 303", None)?;
    let window = parse_session_window(&booking.date_time, "America/Los_Angeles")?;

    assert_eq!(window.start.date_naive(), window.end.date_naive());
    assert!(window.start < window.end);

    Ok(())
}

#[test]
fn test_recipient_validation_matches_console_cleanup() {
    // mailto: prefixes are removed by input cleanup, never accepted here.
    assert!(validate_email("jordan.lee@sjsu.edu"));
    assert!(!validate_email("mailto:jordan.lee@sjsu.edu"));
    assert!(!validate_email("jordan.lee"));
}
