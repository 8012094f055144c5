use chrono::NaiveDate;
use mawaqit_domain::{LocationQuery, PrayerTimeSet};
use mawaqit_infra::{Context, TimingsError};

use crate::shared::usecase::UseCase;

/// Fetches the day's prayer times for an already resolved location query.
#[derive(Debug)]
pub struct FetchPrayerTimesUseCase {
    pub query: LocationQuery,
}

#[derive(Debug)]
pub struct FetchedTimes {
    pub times: PrayerTimeSet,
    /// The resolved location label to display
    pub label: String,
    /// The calendar day the times are scoped to
    pub date: NaiveDate,
}

#[async_trait::async_trait(?Send)]
impl UseCase for FetchPrayerTimesUseCase {
    type Response = FetchedTimes;
    type Errors = TimingsError;

    async fn execute(&mut self, ctx: &Context) -> Result<FetchedTimes, TimingsError> {
        let date = ctx.sys.local_now().date();
        let times = ctx.timings.fetch(&self.query, date).await?;
        let label = self.query.label().unwrap_or_else(|| {
            format!("{}, {}", ctx.config.default_city, ctx.config.default_country)
        });
        Ok(FetchedTimes { times, label, date })
    }
}
