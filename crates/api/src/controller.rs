use chrono::{NaiveDate, NaiveDateTime};
use mawaqit_domain::{LocationQuery, NotificationPermission, Prayer, PrayerTimeSet};
use mawaqit_infra::{Context, NotifyError};
use tracing::{info, warn};

use crate::error::MawaqitError;
use crate::fetch_times::{FetchPrayerTimesUseCase, FetchedTimes};
use crate::scheduler::{schedule_next, ScheduledNotification};
use crate::shared::usecase::execute;

/// Owns every piece of display state plus the single pending notification
/// slot. All operations run on the one event loop; the controller is the only
/// writer of its state.
pub struct Controller {
    ctx: Context,
    times: Option<PrayerTimeSet>,
    location_label: String,
    date: Option<NaiveDate>,
    error: Option<String>,
    loading: bool,
    permission: NotificationPermission,
    pending: Option<ScheduledNotification>,
    /// The query behind the most recent fetch, for refreshes
    resolved: LocationQuery,
    fetch_seq: u64,
}

impl Controller {
    pub fn new(ctx: Context) -> Self {
        let location_label = format!("{}, {}", ctx.config.default_city, ctx.config.default_country);
        Self {
            ctx,
            times: None,
            location_label,
            date: None,
            error: None,
            loading: false,
            permission: NotificationPermission::Unrequested,
            pending: None,
            resolved: LocationQuery::Default,
            fetch_seq: 0,
        }
    }

    pub fn times(&self) -> Option<&PrayerTimeSet> {
        self.times.as_ref()
    }

    pub fn location_label(&self) -> &str {
        &self.location_label
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn permission(&self) -> NotificationPermission {
        self.permission
    }

    /// What the pending deferred action would announce, if any.
    pub fn pending(&self) -> Option<(Prayer, NaiveDateTime)> {
        self.pending.as_ref().map(|p| (p.prayer, p.fires_at))
    }

    /// Hands over the pending action, leaving the slot empty.
    pub fn take_pending(&mut self) -> Option<ScheduledNotification> {
        self.pending.take()
    }

    /// City/country search. Incomplete input is a validation error and no
    /// request is issued.
    pub async fn search(&mut self, city: &str, country: &str) {
        match LocationQuery::from_search(city, country) {
            Ok(query) => self.fetch(query).await,
            Err(e) => self.set_error(MawaqitError::InvalidSearch(e)),
        }
    }

    /// Explicit user-triggered geolocation. On any geolocation failure no
    /// fetch is issued and the loading state is cleared.
    pub async fn locate(&mut self) {
        self.loading = true;
        self.error = None;
        match self.ctx.geo.locate().await {
            Ok(pos) => {
                self.fetch(LocationQuery::Coordinates {
                    latitude: pos.latitude,
                    longitude: pos.longitude,
                })
                .await
            }
            Err(e) => {
                self.loading = false;
                self.set_error(MawaqitError::Geolocation(e));
            }
        }
    }

    /// The first-load fetch against the configured default location.
    pub async fn fetch_default(&mut self) {
        self.fetch(LocationQuery::Default).await
    }

    /// Re-fetches whatever location was used last.
    pub async fn refresh(&mut self) {
        self.fetch(self.resolved.clone()).await
    }

    /// Runs one fetch. The sequence token makes the most recently started
    /// fetch authoritative: a completion belonging to an older fetch is
    /// discarded instead of overwriting newer data.
    pub async fn fetch(&mut self, query: LocationQuery) {
        self.loading = true;
        self.error = None;
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.resolved = query.clone();

        let res = execute(FetchPrayerTimesUseCase { query }, &self.ctx).await;

        if seq != self.fetch_seq {
            info!("discarding fetch result superseded by a newer fetch");
            return;
        }
        self.loading = false;
        match res {
            Ok(FetchedTimes { times, label, date }) => {
                self.times = Some(times);
                self.location_label = label;
                self.date = Some(date);
                self.reschedule();
            }
            // A previously displayed set stays on screen through errors
            Err(e) => self.set_error(MawaqitError::Fetch(e)),
        }
    }

    /// Permission state machine: `Unrequested` is the only state that asks
    /// the platform; the answer holds for the rest of the session.
    pub async fn enable_notifications(&mut self) {
        if self.permission != NotificationPermission::Unrequested {
            return;
        }
        if !self.ctx.notifications.supported() {
            self.set_error(MawaqitError::Notifications(NotifyError::Unsupported));
            return;
        }

        self.permission = self.ctx.notifications.request_permission().await;
        match self.permission {
            NotificationPermission::Granted => self.reschedule(),
            NotificationPermission::Denied => self.set_error(MawaqitError::NotificationsDenied),
            NotificationPermission::Unrequested => {}
        }
    }

    /// Cancel-then-set over the single pending slot. Runs whenever a new time
    /// set arrives or permission transitions to granted.
    pub fn reschedule(&mut self) {
        if let Some(prev) = self.pending.take() {
            prev.cancel();
        }
        if !self.permission.is_granted() {
            return;
        }
        let times = match &self.times {
            Some(times) => times,
            None => return,
        };
        self.pending = schedule_next(times, self.ctx.sys.as_ref(), self.ctx.notifications.clone());
    }

    fn set_error(&mut self, err: MawaqitError) {
        warn!("{}", err);
        self.error = Some(err.to_string());
    }
}
