mod date;
mod location;
mod permission;
mod prayer;
mod timings;
mod upcoming;

pub use date::format_date;
pub use location::{LocationInputError, LocationQuery};
pub use permission::NotificationPermission;
pub use prayer::Prayer;
pub use timings::{ClockTime, ParseTimeError, PrayerTimeSet};
pub use upcoming::next_trigger;
