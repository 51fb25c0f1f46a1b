use anyhow::Result;
use std::fs;
use tutorpost::extract::extract_booking;
use tutorpost::history::{ConfirmationRecord, StateManager};
use tutorpost::invite::write_invite;
use tutorpost::schedule::parse_session_window;

const CONFIRMATION: &str = "\
An appointment has been scheduled for Feb 10 2025 2:00pm - 3:00pm PT.

Attendees
Jordan Lee

Meeting Type
In Person

Topic
CS 146
";

#[test]
fn test_invite_file_for_extracted_booking() -> Result<()> {
    let booking = extract_booking(CONFIRMATION, "jordan.lee@sjsu.edu", "BBC 303", None)?;
    let window = parse_session_window(&booking.date_time, "America/Los_Angeles")?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("event.ics");
    write_invite(&booking, &window, "PC: Shift Booked", &path)?;

    let content = fs::read_to_string(&path)?;
    assert!(content.contains("BEGIN:VCALENDAR"));
    assert!(content.contains("SUMMARY:PC: Shift Booked"));
    assert!(content.contains("LOCATION:BBC 303"));
    // 2:00pm - 3:00pm Pacific on Feb 10 2025, as UTC instants
    assert!(content.contains("20250210T220000Z"));
    assert!(content.contains("20250210T230000Z"));
    // Description carries attendee, recipient and topic
    assert!(content.contains("Jordan Lee"));
    assert!(content.contains("jordan.lee@sjsu.edu"));
    assert!(content.contains("CS 146"));

    Ok(())
}

#[test]
fn test_history_records_delivered_confirmation() -> Result<()> {
    let temp_home = tempfile::tempdir()?;
    std::env::set_var("HOME", temp_home.path());

    let booking = extract_booking(CONFIRMATION, "jordan.lee@sjsu.edu", "BBC 303", None)?;
    let manager = StateManager::new()?;
    manager.add(ConfirmationRecord::new(&booking, Some(std::path::Path::new("event.ics"))))?;

    let records: Vec<ConfirmationRecord> = manager.load()?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].attendee, "Jordan Lee");
    assert_eq!(records[0].topic, "CS 146");
    assert_eq!(records[0].meeting_type, "In Person");
    assert_eq!(records[0].invite_path, Some("event.ics".to_string()));

    Ok(())
}
