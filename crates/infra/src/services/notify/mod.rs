mod desktop;
mod inmemory;

pub use desktop::DesktopNotificationSink;
pub use inmemory::InMemoryNotificationSink;

use mawaqit_domain::NotificationPermission;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NotifyError {
    #[error("This device does not support desktop notifications.")]
    Unsupported,
    #[error("could not display notification: {0}")]
    Display(String),
}

/// Platform notification adapters implement this trait.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    /// Whether a notification surface exists at all on this platform.
    fn supported(&self) -> bool;

    /// Asks the platform for permission to show notifications.
    async fn request_permission(&self) -> NotificationPermission;

    /// Shows a notification right away.
    fn display(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}
