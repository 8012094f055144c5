use serde::{Deserialize, Serialize};

/// Notification permission as mediated by the platform. `Unrequested` is the
/// only state a request may be issued from; once `Granted` or `Denied` the
/// decision holds for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPermission {
    Unrequested,
    Granted,
    Denied,
}

impl NotificationPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, NotificationPermission::Granted)
    }
}
