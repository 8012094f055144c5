use std::sync::Arc;

use chrono::NaiveDateTime;
use mawaqit_domain::{next_trigger, Prayer, PrayerTimeSet};
use mawaqit_infra::{ISys, NotificationSink};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// The single pending deferred notification. There is never more than one:
/// whoever owns the slot cancels the old value before arranging a new one.
#[derive(Debug)]
pub struct ScheduledNotification {
    pub prayer: Prayer,
    pub fires_at: NaiveDateTime,
    pub(crate) handle: JoinHandle<()>,
}

impl ScheduledNotification {
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Blocks until the timer elapses and the notification was shown.
    pub async fn wait(self) {
        let _ = self.handle.await;
    }
}

/// Arranges a one-shot task that fires at the next relevant prayer, if one
/// can be determined.
pub fn schedule_next(
    times: &PrayerTimeSet,
    sys: &dyn ISys,
    sink: Arc<dyn NotificationSink>,
) -> Option<ScheduledNotification> {
    let now = sys.local_now();
    let (prayer, fires_at) = match next_trigger(times, now) {
        Some(next) => next,
        None => {
            info!("no upcoming prayer could be determined, nothing scheduled");
            return None;
        }
    };

    // `next_trigger` only yields future instants
    let delay = (fires_at - now).to_std().unwrap_or_default();
    info!(
        "scheduling notification for {} in {} seconds",
        prayer,
        delay.as_secs()
    );

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let title = format!("Prayer Time: {}", prayer);
        let body = format!("It's time for {} prayer!", prayer);
        if let Err(e) = sink.display(&title, &body) {
            warn!("failed to display notification: {}", e);
        }
    });

    Some(ScheduledNotification {
        prayer,
        fires_at,
        handle,
    })
}
