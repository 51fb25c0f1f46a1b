use anyhow::Result;
use log::info;
use secrecy::SecretString;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

pub const REQUIRED_ENV_VARS: &[&str] = &["SENDER_EMAIL", "EMAIL_PASS"];

// Names of optional environment variables
pub const OPTIONAL_ENV_VARS: &[&str] = &["ZOOM_LINK"];

pub fn load_env_file() -> io::Result<()> {
    // Try to load from .env file
    match dotenvy::dotenv() {
        Ok(path) => {
            info!("Loaded environment from {:?}", path);
            Ok(())
        }
        Err(e) => {
            info!("No .env file found or error loading it: {}", e);
            create_env_template()
        }
    }
}

fn create_env_template() -> io::Result<()> {
    let env_path = PathBuf::from(".env");

    // Don't overwrite existing .env file
    if env_path.exists() {
        return Ok(());
    }

    let mut file = File::create(env_path)?;

    // Write required variables
    for var in REQUIRED_ENV_VARS {
        writeln!(file, "{}=", var)?;
    }

    // Write optional variables with comments
    for var in OPTIONAL_ENV_VARS {
        writeln!(file, "# {}=", var)?;
    }

    Ok(())
}

/// Mailbox address the confirmation is sent from, and that SMTP
/// authenticates as.
pub fn sender_address() -> Option<String> {
    non_empty_var("SENDER_EMAIL")
}

/// App-specific password for the sender mailbox. Wrapped so the value never
/// lands in logs or debug output.
pub fn mail_password() -> Option<SecretString> {
    non_empty_var("EMAIL_PASS").map(SecretString::from)
}

/// Meeting link quoted in confirmations for online sessions.
pub fn meeting_link() -> Option<String> {
    non_empty_var("ZOOM_LINK")
}

fn non_empty_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Print the state of every variable the tool reads, plus which keys the
/// local .env file defines. Values are never echoed.
pub fn print_env_report() -> Result<()> {
    println!("Environment Variables Status:");
    for var in REQUIRED_ENV_VARS {
        match non_empty_var(var) {
            Some(value) => println!("  ✅ {} is SET (length: {})", var, value.len()),
            None => println!("  ❌ {} is NOT SET", var),
        }
    }
    for var in OPTIONAL_ENV_VARS {
        match non_empty_var(var) {
            Some(value) => println!("  ✅ {} is SET (length: {})", var, value.len()),
            None => println!("  ⚪ {} is not set (optional)", var),
        }
    }

    println!(".env File Check:");
    let env_path = PathBuf::from(".env");
    if env_path.exists() {
        println!("  ✅ Found .env file at: {}", env_path.display());
        if let Ok(file) = File::open(&env_path) {
            let reader = BufReader::new(file);
            let mut found_vars = Vec::new();

            for line in reader.lines().map_while(io::Result::ok) {
                if line.starts_with('#') || line.trim().is_empty() {
                    continue;
                }
                if let Some(pos) = line.find('=') {
                    found_vars.push(line[..pos].trim().to_string());
                }
            }

            println!("  📋 Variables in .env file: {}", found_vars.join(", "));
        }
    } else {
        println!("  ❌ No .env file in the working directory");
    }

    Ok(())
}
