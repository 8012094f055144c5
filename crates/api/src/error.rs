use mawaqit_domain::LocationInputError;
use mawaqit_infra::{GeoError, NotifyError, TimingsError};
use thiserror::Error;

/// Everything that can surface to the user. Each variant renders to the
/// single human-readable message that replaces any prior one; nothing here is
/// fatal and nothing is retried on its own.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MawaqitError {
    #[error(transparent)]
    InvalidSearch(#[from] LocationInputError),
    #[error("Failed to load prayer times: {0}. Please try again.")]
    Fetch(#[from] TimingsError),
    #[error(transparent)]
    Geolocation(#[from] GeoError),
    #[error(transparent)]
    Notifications(#[from] NotifyError),
    #[error("Notification permission denied. You will not receive prayer time alerts.")]
    NotificationsDenied,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fetch_errors_carry_the_retry_hint() {
        let err = MawaqitError::Fetch(TimingsError::Http(502));
        assert_eq!(
            err.to_string(),
            "Failed to load prayer times: the time service responded with HTTP status 502. Please try again."
        );
    }

    #[test]
    fn validation_errors_pass_through() {
        let err = MawaqitError::InvalidSearch(LocationInputError::IncompleteSearch);
        assert_eq!(err.to_string(), "Please enter both city and country for search.");
    }
}
