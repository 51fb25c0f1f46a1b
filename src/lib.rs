pub mod app;
pub mod cli;
pub mod compose;
pub mod config;
pub mod env_manager;
pub mod extract;
pub mod history;
pub mod input;
pub mod invite;
pub mod mailer;
pub mod schedule;
pub mod validation;

use anyhow::Result;
use log::*;

/// Run the confirmation pipeline once: capture the pasted booking email,
/// send the confirmation and write the calendar invite.
pub fn run(dry_run: bool) -> Result<()> {
    let app = app::Application::new()?;
    info!("Initializing tutorpost");
    app.run(dry_run)
}

// Re-export commonly used types
pub use config::Config;
pub use extract::Booking;
pub use history::ConfirmationRecord;
pub use schedule::SessionWindow;
