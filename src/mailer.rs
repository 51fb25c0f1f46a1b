//! SMTP delivery of the rendered confirmation.
//
// The transport is plain blocking SMTP: connect, upgrade with STARTTLS,
// authenticate as the sender, send. When `copy_to_sender` is on, the same
// message bytes go out a second time with the sender as the envelope
// recipient, so the tutor's inbox keeps a copy without a visible Cc.

use crate::compose::EmailContent;
use crate::config::MailConfig;
use lettre::address::Envelope;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use log::info;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Could not assemble message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP failure: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Assemble the plain-text confirmation exactly as it goes over the wire.
pub fn build_message(
    sender: &Mailbox,
    recipient: &Mailbox,
    content: &EmailContent,
) -> Result<Message, MailError> {
    Ok(Message::builder()
        .from(sender.clone())
        .to(recipient.clone())
        .subject(content.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(content.body.clone())?)
}

/// Send the confirmation to the recipient, then (when configured) a blind
/// copy back to the sender's own mailbox.
pub fn send_confirmation(
    config: &MailConfig,
    sender_address: &str,
    password: &SecretString,
    recipient_address: &str,
    content: &EmailContent,
) -> Result<(), MailError> {
    let sender: Mailbox = sender_address.parse()?;
    let recipient: Mailbox = recipient_address.parse()?;
    let message = build_message(&sender, &recipient, content)?;

    let credentials =
        Credentials::new(sender_address.to_string(), password.expose_secret().to_string());
    let mailer = SmtpTransport::starttls_relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(credentials)
        .build();

    mailer.send(&message)?;
    info!("Email sent successfully to {}", recipient_address);

    if config.copy_to_sender {
        // Same bytes, sender-only envelope. The To header keeps showing the
        // recipient, so this lands as a blind copy.
        let envelope = Envelope::new(Some(sender.email.clone()), vec![sender.email.clone()])?;
        mailer.send_raw(&envelope, &message.formatted())?;
        info!("Copy delivered to sender inbox {}", sender_address);
    }

    Ok(())
}
