use std::sync::Mutex;

use chrono::NaiveDate;
use mawaqit_domain::{LocationQuery, PrayerTimeSet};

use super::{TimingsError, TimingsSource};

/// Test source that answers from a preset result and records every query it
/// receives.
pub struct InMemoryTimingsSource {
    result: Mutex<Result<PrayerTimeSet, TimingsError>>,
    requests: Mutex<Vec<LocationQuery>>,
}

impl InMemoryTimingsSource {
    pub fn returning(times: PrayerTimeSet) -> Self {
        Self {
            result: Mutex::new(Ok(times)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: TimingsError) -> Self {
        Self {
            result: Mutex::new(Err(err)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the answer for subsequent fetches.
    pub fn set_result(&self, result: Result<PrayerTimeSet, TimingsError>) {
        *self.result.lock().unwrap() = result;
    }

    /// Every query fetched so far, in order.
    pub fn requests(&self) -> Vec<LocationQuery> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TimingsSource for InMemoryTimingsSource {
    async fn fetch(
        &self,
        query: &LocationQuery,
        _date: NaiveDate,
    ) -> Result<PrayerTimeSet, TimingsError> {
        self.requests.lock().unwrap().push(query.clone());
        self.result.lock().unwrap().clone()
    }
}
