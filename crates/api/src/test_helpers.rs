use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use mawaqit_domain::PrayerTimeSet;
use mawaqit_infra::{Config, Context, GeoLocator, ISys, NotificationSink, TimingsSource};

/// Clock pinned to one instant.
pub struct FixedSys {
    now: NaiveDateTime,
}

impl FixedSys {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            now: NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()),
        }
    }
}

impl ISys for FixedSys {
    fn local_now(&self) -> NaiveDateTime {
        self.now
    }
}

pub fn times_of(entries: &[(&str, &str)]) -> PrayerTimeSet {
    let raw: HashMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PrayerTimeSet::from_wire(&raw).unwrap()
}

/// Reference day used across the tests.
pub fn full_day() -> PrayerTimeSet {
    times_of(&[
        ("Fajr", "05:00"),
        ("Dhuhr", "12:10"),
        ("Asr", "15:30"),
        ("Maghrib", "18:05"),
        ("Isha", "19:30"),
    ])
}

fn test_config() -> Config {
    Config {
        default_city: "Riyadh".into(),
        default_country: "Saudi Arabia".into(),
        method: 4,
        api_base_url: "https://api.example.com/v1".into(),
        geo_url: "http://geo.example.com/json".into(),
        geo_timeout: Duration::from_secs(10),
    }
}

pub fn test_context(
    timings: Arc<dyn TimingsSource>,
    geo: Arc<dyn GeoLocator>,
    notifications: Arc<dyn NotificationSink>,
    sys: FixedSys,
) -> Context {
    Context {
        config: test_config(),
        sys: Arc::new(sys),
        timings,
        geo,
        notifications,
    }
}
