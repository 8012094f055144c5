use chrono::{Duration, NaiveDateTime};

use crate::prayer::Prayer;
use crate::timings::PrayerTimeSet;

/// Finds the next notification-relevant prayer strictly after `now`.
///
/// The candidates are today's five relevant prayers. When all of them have
/// passed, the result rolls over to tomorrow's Fajr, approximated with
/// today's Fajr clock time. When the set has no Fajr entry at all there is
/// nothing to roll over to and `None` is returned.
pub fn next_trigger(times: &PrayerTimeSet, now: NaiveDateTime) -> Option<(Prayer, NaiveDateTime)> {
    let today = now.date();

    if let Some(&(prayer, at)) = times
        .relevant_instants(today)
        .iter()
        .find(|(_, at)| *at > now)
    {
        return Some((prayer, at));
    }

    let fajr = times.get(Prayer::Fajr)?;
    let at = fajr.on(today + Duration::days(1));
    if at > now {
        Some((Prayer::Fajr, at))
    } else {
        None
    }
}
