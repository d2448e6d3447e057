use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::notify::{Notifier, NotifyError, ReorderAlert};

/// Relay address, login and envelope for alert e-mails.
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    /// Implicit-TLS port, 465 for most relays.
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
    pub recipient: String,
    /// Upper bound on each connection and command.
    pub timeout: Duration,
}

/// Sends each alert as a plain-text e-mail over an implicit-TLS SMTP relay.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpNotifier {
    /// Parses the envelope and prepares the relay. No connection is opened
    /// until the first alert is sent.
    pub fn new(settings: SmtpSettings) -> Result<Self, NotifyError> {
        let sender = parse_mailbox("sender", &settings.sender)?;
        let recipient = parse_mailbox("recipient", &settings.recipient)?;

        let transport = SmtpTransport::relay(&settings.host)
            .map_err(|e| NotifyError::Invalid(format!("relay {}: {e}", settings.host)))?
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, alert: &ReorderAlert) -> Result<(), NotifyError> {
        let message = compose_alert(&self.sender, &self.recipient, alert)?;
        self.transport
            .send(&message)
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;

        tracing::info!(item = %alert.item_id, to = %self.recipient, "reorder alert e-mailed");
        Ok(())
    }
}

/// Builds the e-mail for `alert` without touching the network.
pub fn compose_alert(
    sender: &Mailbox,
    recipient: &Mailbox,
    alert: &ReorderAlert,
) -> Result<Message, NotifyError> {
    Message::builder()
        .from(sender.clone())
        .to(recipient.clone())
        .subject(alert.subject())
        .header(ContentType::TEXT_PLAIN)
        .body(alert.body())
        .map_err(|e| NotifyError::Rejected(e.to_string()))
}

fn parse_mailbox(role: &str, address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|e| NotifyError::Invalid(format!("{role} address {address:?}: {e}")))
}
