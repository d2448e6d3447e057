//! Low-stock notifications.
//!
//! The simulator never talks to a transport directly. Queries build a
//! [`ReorderAlert`] and hand it to [`dispatch`], which delivers it through a
//! [`Notifier`] and absorbs any failure.
//!
//! - [`LogNotifier`]: writes alerts to the log
//! - [`SmtpNotifier`]: e-mails alerts through an SMTP relay

mod smtp;

pub use smtp::{compose_alert, SmtpNotifier, SmtpSettings};

/// Details of a stock level at or below its reorder point.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderAlert {
    pub item_id: String,
    pub inventory: u32,
    pub reorder_point: f64,
    pub order_quantity: u32,
}

impl ReorderAlert {
    pub fn subject(&self) -> String {
        format!("[JIT inventory alert] {} below reorder point", self.item_id)
    }

    pub fn body(&self) -> String {
        format!(
            "Warning: stock of {} has dropped to {} (ROP = {}).\n\
             Recommended replenishment: EOQ = {} units.",
            self.item_id, self.inventory, self.reorder_point, self.order_quantity
        )
    }
}

/// Error raised by a notification transport.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The transport could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The transport refused the message (credentials, recipient, ...).
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// The notifier was configured with unusable settings.
    #[error("invalid notifier configuration: {0}")]
    Invalid(String),
}

/// A best-effort delivery channel for reorder alerts.
pub trait Notifier: Send + Sync {
    fn send(&self, alert: &ReorderAlert) -> Result<(), NotifyError>;
}

/// Writes alerts to the log instead of an external transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, alert: &ReorderAlert) -> Result<(), NotifyError> {
        tracing::warn!(
            target: "jit_inventory::alert",
            item = %alert.item_id,
            inventory = alert.inventory,
            rop = alert.reorder_point,
            eoq = alert.order_quantity,
            subject = %alert.subject(),
            "{}",
            alert.body()
        );
        Ok(())
    }
}

/// Delivers `alert`, logging and discarding any transport failure.
///
/// Returns whether the notifier accepted the alert. Failures are not retried.
pub fn dispatch(notifier: &dyn Notifier, alert: &ReorderAlert) -> bool {
    match notifier.send(alert) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(item = %alert.item_id, error = %e, "reorder alert not delivered");
            false
        }
    }
}
