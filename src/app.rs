use crate::config::Config;
use crate::history::{ConfirmationRecord, StateManager};
use crate::{compose, env_manager, extract, input, invite, mailer, schedule, validation};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

pub struct Application {
    config: Config,
}

impl Application {
    pub fn new() -> Result<Self> {
        Ok(Self { config: Config::load()? })
    }

    /// Run one confirmation: capture the pasted booking email, extract the
    /// appointment, send the confirmation and write the invite file.
    ///
    /// Any stage failure aborts the run; nothing is retried. With `dry_run`
    /// the pipeline stops after rendering and prints what would go out.
    pub fn run(&self, dry_run: bool) -> Result<()> {
        log::info!("Starting tutorpost");

        // The sender address gates everything else, so check it before
        // asking the user to paste anything.
        let sender = env_manager::sender_address()
            .ok_or_else(|| anyhow!("SENDER_EMAIL is not set in the environment variables"))?;

        let captured = input::capture()?;
        if !validation::validate_email(&captured.recipient) {
            return Err(anyhow!("'{}' is not a valid recipient address", captured.recipient));
        }

        let booking = extract::extract_booking(
            &captured.email_text,
            &captured.recipient,
            &self.config.session.in_person_room,
            env_manager::meeting_link().as_deref(),
        )
        .context("Failed to process input data")?;

        let window =
            schedule::parse_session_window(&booking.date_time, &self.config.session.timezone)
                .context("Failed to parse date and time")?;

        let content = compose::render(&booking, &self.config.tutor);

        if dry_run {
            println!("--- dry run, nothing sent ---");
            println!("To:      {}", booking.recipient);
            println!("Session: {} -> {}", window.start, window.end);
            println!("Subject: {}", content.subject);
            println!();
            println!("{}", content.body);
            return Ok(());
        }

        let password = env_manager::mail_password()
            .ok_or_else(|| anyhow!("EMAIL_PASS is not set in the environment variables"))?;
        mailer::send_confirmation(
            &self.config.mail,
            &sender,
            &password,
            &booking.recipient,
            &content,
        )
        .context("Failed to send email")?;

        let invite_path = Path::new(&self.config.session.invite_path);
        let written =
            invite::write_invite(&booking, &window, &self.config.session.event_summary, invite_path)
                .context("Failed to create calendar event")?;

        // The confirmation is already out at this point, so journal problems
        // only warn.
        let record = ConfirmationRecord::new(&booking, Some(written.as_path()));
        match StateManager::new().and_then(|manager| manager.add(record)) {
            Ok(()) => log::debug!("Recorded confirmation for {}", booking.attendee),
            Err(err) => log::warn!("Could not record confirmation history: {}", err),
        }

        log::info!("Confirmation for {} complete", booking.attendee);
        Ok(())
    }
}
