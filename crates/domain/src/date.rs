use chrono::{Datelike, NaiveDate};

/// Formats a date as zero-padded `DD-MM-YYYY`, the form the time service
/// expects in its request path and the form shown in the display header.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}
