//! Rendering of the confirmation email subject and body.

use crate::config::TutorConfig;
use crate::extract::Booking;

/// A rendered confirmation, ready for the mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

/// Render the confirmation for one booking. Rendering is pure: the same
/// booking and tutor settings always produce the same text.
pub fn render(booking: &Booking, tutor: &TutorConfig) -> EmailContent {
    let first_name = booking.attendee.split(' ').next().unwrap_or(&booking.attendee);

    let subject = format!("Confirmed: Tutoring for {}, {}", booking.topic, booking.date_time);
    let body = format!(
        "Hi {first_name},\n\
         \n\
         My name is {tutor_name}, and I'll be the tutor working with you for your upcoming appointment.\n\
         An appointment has been scheduled for {date_time}. {location}\n\
         \n\
         Please let me know what your goal(s) are for the upcoming appointment so I can prepare \
         myself ahead of time and better support you. Feel free to send over the questions you \
         would like to work on and any relevant notes and documents as well.\n\
         \n\
         I look forward to working with you.\n\
         \n\
         Best,\n\
         {signature}",
        first_name = first_name,
        tutor_name = tutor.first_name,
        date_time = booking.date_time,
        location = booking.location_line,
        signature = tutor.signature,
    );

    EmailContent { subject, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_booking() -> Booking {
        Booking {
            attendee: "Jordan Lee".to_string(),
            recipient: "jordan.lee@sjsu.edu".to_string(),
            date_time: "Feb 10 2025 2:00pm - 3:00pm".to_string(),
            topic: "CS 146".to_string(),
            meeting_type: "In Person".to_string(),
            location_line: "This session will be in BBC 303.".to_string(),
            calendar_location: "BBC 303".to_string(),
        }
    }

    #[test]
    fn test_subject_line() {
        let content = render(&sample_booking(), &TutorConfig::default());
        assert_eq!(content.subject, "Confirmed: Tutoring for CS 146, Feb 10 2025 2:00pm - 3:00pm");
    }

    #[test]
    fn test_greeting_uses_first_name_only() {
        let content = render(&sample_booking(), &TutorConfig::default());
        assert!(content.body.starts_with("Hi Jordan,\n"));
        assert!(!content.body.contains("Hi Jordan Lee"));
    }

    #[test]
    fn test_body_carries_schedule_and_location() {
        let content = render(&sample_booking(), &TutorConfig::default());
        assert!(content.body.contains(
            "An appointment has been scheduled for Feb 10 2025 2:00pm - 3:00pm. \
             This session will be in BBC 303."
        ));
    }

    #[test]
    fn test_sign_off_uses_configured_names() {
        let tutor =
            TutorConfig { first_name: "Sam".to_string(), signature: "Sam Rivera".to_string() };
        let content = render(&sample_booking(), &tutor);
        assert!(content.body.contains("My name is Sam,"));
        assert!(content.body.ends_with("Best,\nSam Rivera"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let booking = sample_booking();
        let tutor = TutorConfig::default();
        assert_eq!(render(&booking, &tutor), render(&booking, &tutor));
    }
}
