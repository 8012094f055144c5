use std::sync::Mutex;

use mawaqit_domain::NotificationPermission;

use super::{NotificationSink, NotifyError};

/// Recording sink for tests.
pub struct InMemoryNotificationSink {
    supported: bool,
    grant: bool,
    displayed: Mutex<Vec<(String, String)>>,
}

impl InMemoryNotificationSink {
    pub fn granting() -> Self {
        Self {
            supported: true,
            grant: true,
            displayed: Mutex::new(Vec::new()),
        }
    }

    pub fn denying() -> Self {
        Self {
            grant: false,
            ..Self::granting()
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::granting()
        }
    }

    /// Every notification displayed so far as (title, body) pairs.
    pub fn displayed(&self) -> Vec<(String, String)> {
        self.displayed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationSink for InMemoryNotificationSink {
    fn supported(&self) -> bool {
        self.supported
    }

    async fn request_permission(&self) -> NotificationPermission {
        if self.grant {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        }
    }

    fn display(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.displayed
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
