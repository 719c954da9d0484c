// Notification seam - dispatch payload and sink trait
use crate::domain::evaluation::Icon;

/// A notification ready for the OS notification center.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub icon: Icon,
    /// Forecast page offered behind the notification's "More Info" action.
    pub more_info_url: String,
}

/// Platform-specific notification adapters implement this trait.
pub trait NotificationSink: Send + Sync {
    fn dispatch(&self, request: &NotificationRequest) -> anyhow::Result<()>;
}
