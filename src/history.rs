use crate::extract::Booking;
use anyhow::{anyhow, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_DIR: &str = ".tutorpost";
const CONFIRMATIONS_FILE: &str = "confirmations.json";
// Maximum allowed size for state files to prevent DoS attacks (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_ITEMS: usize = 10000;

// Trait for items that can be persisted
pub trait Persistent: Sized + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
}

/// One successfully delivered confirmation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfirmationRecord {
    pub attendee: String,
    pub recipient: String,
    pub topic: String,
    pub meeting_type: String,
    /// Schedule text as it appeared in the booking, e.g.
    /// `Feb 10 2025 2:00pm - 3:00pm`.
    pub scheduled_for: String,
    pub invite_path: Option<String>,
    /// Local wall-clock time the confirmation went out.
    pub sent_at: String,
}

impl ConfirmationRecord {
    pub fn new(booking: &Booking, invite_path: Option<&Path>) -> Self {
        Self {
            attendee: booking.attendee.clone(),
            recipient: booking.recipient.clone(),
            topic: booking.topic.clone(),
            meeting_type: booking.meeting_type.clone(),
            scheduled_for: booking.date_time.clone(),
            invite_path: invite_path.map(|p| p.display().to_string()),
            sent_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl Persistent for ConfirmationRecord {
    fn filename() -> &'static str {
        CONFIRMATIONS_FILE
    }
}

pub struct StateManager {
    state_dir: PathBuf,
}

impl StateManager {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        let mut state_dir = home_dir;
        state_dir.push(STATE_DIR);
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self { state_dir })
    }

    pub fn load<T: Persistent>(&self) -> Result<Vec<T>> {
        let path = self.state_dir.join(T::filename());
        if path.exists() {
            // Check file size before loading to prevent DoS attacks
            let metadata = std::fs::metadata(&path)?;
            if metadata.len() > MAX_FILE_SIZE {
                return Err(anyhow!("File size exceeds security limits"));
            }

            let file = File::open(path)?;
            let reader = BufReader::new(file);

            let json_value: serde_json::Value = serde_json::from_reader(reader)
                .map_err(|e| anyhow!("Failed to parse JSON data: {}", e))?;

            // Count elements to prevent DoS attacks
            if let Some(array) = json_value.as_array() {
                if array.len() > MAX_ITEMS {
                    return Err(anyhow!("Too many items in file (maximum {})", MAX_ITEMS));
                }
            }

            let items: Vec<T> = serde_json::from_value(json_value)
                .map_err(|e| anyhow!("Failed to deserialize data: {}", e))?;

            Ok(items)
        } else {
            Ok(Vec::new())
        }
    }

    pub fn save<T: Persistent>(&self, items: &[T]) -> Result<()> {
        let path = self.state_dir.join(T::filename());
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        Ok(())
    }

    pub fn add<T: Persistent>(&self, item: T) -> Result<()> {
        let mut items = self.load::<T>()?;
        items.push(item);
        self.save(&items)
    }
}
