use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub tutor: TutorConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Deliver a blind copy of every confirmation to the sender's own inbox.
    pub copy_to_sender: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// IANA timezone the appointment times are quoted in.
    pub timezone: String,
    /// Room named in confirmations for in-person sessions.
    pub in_person_room: String,
    /// SUMMARY line of the generated calendar invite.
    pub event_summary: String,
    /// Where the .ics file is written, relative to the working directory.
    pub invite_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Name used in the greeting sentence of the email body.
    pub first_name: String,
    /// Name used in the sign-off.
    pub signature: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.mail.me.com".to_string(),
            smtp_port: 587,
            copy_to_sender: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timezone: "America/Los_Angeles".to_string(),
            in_person_room: "BBC 303".to_string(),
            event_summary: "PC: Shift Booked".to_string(),
            invite_path: "event.ics".to_string(),
        }
    }
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            first_name: "Max".to_string(),
            signature: "Max Dokukin".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mail: MailConfig::default(),
            session: SessionConfig::default(),
            tutor: TutorConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Apply a dotted-key override from the command line, e.g.
    /// `mail.smtp_port 2525` or `session.timezone America/New_York`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "mail.smtp_host" => self.mail.smtp_host = value.to_string(),
            "mail.smtp_port" => {
                self.mail.smtp_port =
                    value.parse().with_context(|| format!("'{}' is not a valid port", value))?
            }
            "mail.copy_to_sender" => {
                self.mail.copy_to_sender =
                    value.parse().with_context(|| format!("'{}' is not true or false", value))?
            }
            "session.timezone" => self.session.timezone = value.to_string(),
            "session.in_person_room" => self.session.in_person_room = value.to_string(),
            "session.event_summary" => self.session.event_summary = value.to_string(),
            "session.invite_path" => self.session.invite_path = value.to_string(),
            "tutor.first_name" => self.tutor.first_name = value.to_string(),
            "tutor.signature" => self.tutor.signature = value.to_string(),
            _ => return Err(anyhow!("Unknown config key '{}'", key)),
        }
        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "tutorpost", "tutorpost")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
