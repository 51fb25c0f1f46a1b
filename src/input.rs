//! Console capture of the pasted confirmation email and the recipient
//! address.

use anyhow::{anyhow, Result};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line that marks the end of the pasted confirmation block.
const PASTE_TERMINATOR: &str = "xxx";

/// Raw console input for one confirmation run.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedInput {
    pub email_text: String,
    pub recipient: String,
}

/// Read the pasted confirmation email (terminated by a lone `xxx` line) and
/// then the recipient address.
pub fn capture() -> Result<CapturedInput> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "Copy-paste the confirmation email below, then type '{}' on its own line and press Enter:",
        PASTE_TERMINATOR
    );
    let mut lines: Vec<String> = Vec::new();
    loop {
        match rl.readline("") {
            Ok(line) => {
                if is_terminator(&line) {
                    break;
                }
                lines.push(line);
            }
            Err(ReadlineError::Interrupted) => {
                return Err(anyhow!("Input interrupted"));
            }
            Err(ReadlineError::Eof) => {
                return Err(anyhow!(
                    "Input ended before the '{}' terminator line",
                    PASTE_TERMINATOR
                ));
            }
            Err(err) => return Err(err.into()),
        }
    }
    let email_text = lines.join("\n").trim().to_string();
    debug!("Captured {} line(s) of confirmation text", lines.len());

    println!("Enter recipient email:");
    let recipient = match rl.readline("") {
        Ok(line) => clean_recipient(&line),
        Err(ReadlineError::Interrupted) => return Err(anyhow!("Input interrupted")),
        Err(ReadlineError::Eof) => return Err(anyhow!("No recipient email provided")),
        Err(err) => return Err(err.into()),
    };

    Ok(CapturedInput { email_text, recipient })
}

pub fn is_terminator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(PASTE_TERMINATOR)
}

/// Addresses copied out of mail clients often arrive as `mailto:` links.
pub fn clean_recipient(raw: &str) -> String {
    raw.replace("mailto:", "").trim().to_string()
}
