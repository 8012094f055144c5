use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::prayer::Prayer;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseTimeError {
    #[error("invalid clock time: `{0}`")]
    InvalidClockTime(String),
}

/// A wall-clock `HH:MM` value as returned by the time service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Parses `"HH:MM"`. The service sometimes appends a timezone
    /// annotation, e.g. `"05:02 (+03)"`, which is tolerated and dropped.
    pub fn parse(raw: &str) -> Result<Self, ParseTimeError> {
        let invalid = || ParseTimeError::InvalidClockTime(raw.to_string());

        let core = raw.split_whitespace().next().ok_or_else(invalid)?;
        let parts = core.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let hour = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let minute = parts[1].parse::<u32>().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }

    /// The instant at which this clock time occurs on `date`.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        // Hour and minute were range-checked at parse time
        date.and_time(NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap())
    }

    /// 12-hour display form: `"05:30"` becomes `"5:30 AM"`, `"00:15"`
    /// becomes `"12:15 AM"` and `"12:00"` becomes `"12:00 PM"`.
    pub fn format_12h(&self) -> String {
        let meridiem = if self.hour >= 12 { "PM" } else { "AM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute, meridiem)
    }
}

/// All timings the service returned for one calendar day at one resolved
/// location. The six non-relevant names stay in the set, they are just not
/// part of the visible list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimeSet {
    times: HashMap<Prayer, ClockTime>,
}

impl PrayerTimeSet {
    /// Builds a set from the service's timings object, skipping keys outside
    /// the known vocabulary.
    pub fn from_wire(raw: &HashMap<String, String>) -> Result<Self, ParseTimeError> {
        let mut times = HashMap::new();
        for (key, value) in raw {
            if let Some(prayer) = Prayer::from_wire(key) {
                times.insert(prayer, ClockTime::parse(value)?);
            }
        }
        Ok(Self { times })
    }

    pub fn get(&self, prayer: Prayer) -> Option<ClockTime> {
        self.times.get(&prayer).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The visible name/time pairs in daily order.
    pub fn visible(&self) -> Vec<(Prayer, ClockTime)> {
        Prayer::RELEVANT
            .iter()
            .filter_map(|p| self.get(*p).map(|t| (*p, t)))
            .collect()
    }

    /// The notification-relevant prayers as instants on `date`, ordered
    /// ascending.
    pub fn relevant_instants(&self, date: NaiveDate) -> Vec<(Prayer, NaiveDateTime)> {
        Prayer::RELEVANT
            .iter()
            .filter_map(|p| self.get(*p).map(|t| (*p, t.on(date))))
            .sorted_by_key(|&(_, at)| at)
            .collect()
    }
}
