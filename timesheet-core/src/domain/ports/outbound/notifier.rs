use crate::domain::models::Notification;

/// Delivers user-facing notifications (toasts).
///
/// Implementations must not block; the TUI forwards them onto its event
/// channel.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}
