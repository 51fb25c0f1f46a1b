use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::error;

use tutorpost::cli::{Cli, Commands, ConfigActions};
use tutorpost::config::Config;
use tutorpost::history::{ConfirmationRecord, StateManager};
use tutorpost::{env_manager, run};

fn main() {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    if let Err(err) = env_manager::load_env_file() {
        error!("Failed to prepare environment file: {}", err);
    }

    let cli = Cli::parse();

    let outcome = match cli.command {
        None => run(cli.dry_run),
        Some(Commands::Env) => env_manager::print_env_report(),
        Some(Commands::History { limit }) => show_history(limit),
        Some(Commands::Config { action }) => handle_config_command(action),
    };

    if let Err(err) = outcome {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn show_history(limit: Option<usize>) -> Result<()> {
    let manager = StateManager::new()?;
    let records: Vec<ConfirmationRecord> = manager.load()?;
    if records.is_empty() {
        println!("No confirmations sent yet.");
        return Ok(());
    }

    let skip = limit.map_or(0, |n| records.len().saturating_sub(n));
    for record in records.iter().skip(skip) {
        println!(
            "{}  {} <{}>  {}  [{}]",
            record.sent_at, record.attendee, record.recipient, record.scheduled_for, record.meeting_type
        );
    }
    Ok(())
}

fn handle_config_command(action: ConfigActions) -> Result<()> {
    match action {
        ConfigActions::Show => {
            let config = Config::load()?;
            println!("Current Configuration:");
            println!("\nMail Settings:");
            println!("  SMTP Host: {}", config.mail.smtp_host);
            println!("  SMTP Port: {}", config.mail.smtp_port);
            println!(
                "  Copy To Sender: {}",
                if config.mail.copy_to_sender { "Enabled" } else { "Disabled" }
            );
            println!("\nSession Settings:");
            println!("  Timezone: {}", config.session.timezone);
            println!("  In-Person Room: {}", config.session.in_person_room);
            println!("  Event Summary: {}", config.session.event_summary);
            println!("  Invite Path: {}", config.session.invite_path);
            println!("\nTutor Settings:");
            println!("  First Name: {}", config.tutor.first_name);
            println!("  Signature: {}", config.tutor.signature);
            Ok(())
        }
        ConfigActions::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Updated {}", key);
            Ok(())
        }
    }
}
