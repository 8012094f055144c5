mod http;
mod inmemory;

pub use http::HttpTimingsSource;
pub use inmemory::InMemoryTimingsSource;

use chrono::NaiveDate;
use mawaqit_domain::{LocationQuery, PrayerTimeSet};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimingsError {
    #[error("the time service responded with HTTP status {0}")]
    Http(u16),
    #[error("could not reach the time service: {0}")]
    Network(String),
    #[error("the time service returned an unreadable payload")]
    Malformed,
    #[error("{0}")]
    Service(String),
}

/// A source of one day of prayer times for a resolved location.
#[async_trait::async_trait]
pub trait TimingsSource: Send + Sync {
    async fn fetch(
        &self,
        query: &LocationQuery,
        date: NaiveDate,
    ) -> Result<PrayerTimeSet, TimingsError>;
}
