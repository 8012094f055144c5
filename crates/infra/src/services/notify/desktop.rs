use notify_rust::Notification;

use mawaqit_domain::NotificationPermission;

use super::{NotificationSink, NotifyError};

/// Notifications through the desktop environment, via `notify-rust`.
pub struct DesktopNotificationSink {}

impl DesktopNotificationSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DesktopNotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn server_available() -> bool {
    notify_rust::get_server_information().is_ok()
}

// macOS and Windows have no queryable notification server, the capability is
// assumed and failures surface when displaying.
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn server_available() -> bool {
    true
}

#[async_trait::async_trait]
impl NotificationSink for DesktopNotificationSink {
    fn supported(&self) -> bool {
        server_available()
    }

    async fn request_permission(&self) -> NotificationPermission {
        if server_available() {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        }
    }

    fn display(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        Notification::new()
            .summary(title)
            .body(body)
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Display(e.to_string()))
    }
}
