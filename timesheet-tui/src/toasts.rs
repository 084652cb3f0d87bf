use timesheet_core::domain::{models::Notification, ports::outbound::Notifier};
use tokio::sync::mpsc::UnboundedSender;

/// Forwards notifications to the event loop, which shows them as toasts.
pub struct ToastSender {
    tx: UnboundedSender<Notification>,
}

impl ToastSender {
    pub fn new(tx: UnboundedSender<Notification>) -> Self {
        Self { tx }
    }
}

impl Notifier for ToastSender {
    fn notify(&self, notification: Notification) {
        // The receiver only goes away when the UI is shutting down.
        let _ = self.tx.send(notification);
    }
}
