use clap::{Parser, Subcommand};

/// Tutorpost - terminal tool that turns tutoring appointment confirmations
/// into confirmation emails and calendar invites
#[derive(Debug, Parser)]
#[command(name = "tutorpost")]
#[command(about = "Send tutoring confirmation emails and calendar invites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, runs the confirmation pipeline)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Extract and render only; skip SMTP delivery and the invite file
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report the state of required environment variables
    Env,

    /// List previously sent confirmations
    History {
        /// Show at most this many entries, newest last
        #[arg(long)]
        limit: Option<usize>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show configuration
    #[command(aliases = ["list", "get"])]
    Show,

    /// Set configuration value
    Set {
        /// Configuration key (e.g. mail.smtp_host, session.in_person_room)
        #[arg(required = true)]
        key: String,

        /// Configuration value
        #[arg(required = true)]
        value: String,
    },
}
