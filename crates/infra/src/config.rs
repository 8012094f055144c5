use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// City used before any search or geolocation has been issued
    pub default_city: String,
    /// Country used before any search or geolocation has been issued
    pub default_country: String,
    /// Calculation method id understood by the time service.
    /// The default is 4, Umm Al-Qura University, Makkah.
    pub method: u32,
    /// Base url of the time-of-day-by-location service
    pub api_base_url: String,
    /// Url of the IP geolocation provider
    pub geo_url: String,
    /// Maximum time to wait for the geolocation provider
    pub geo_timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        let default_city =
            std::env::var("MAWAQIT_DEFAULT_CITY").unwrap_or_else(|_| "Riyadh".into());
        let default_country =
            std::env::var("MAWAQIT_DEFAULT_COUNTRY").unwrap_or_else(|_| "Saudi Arabia".into());

        let default_method = "4";
        let method = std::env::var("MAWAQIT_METHOD").unwrap_or_else(|_| default_method.into());
        let method = match method.parse::<u32>() {
            Ok(method) => method,
            Err(_) => {
                warn!(
                    "The given MAWAQIT_METHOD: {} is not valid, falling back to the default method: {}.",
                    method, default_method
                );
                default_method.parse().unwrap()
            }
        };

        let api_base_url = std::env::var("MAWAQIT_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.aladhan.com/v1".into());
        let geo_url =
            std::env::var("MAWAQIT_GEO_URL").unwrap_or_else(|_| "http://ip-api.com/json".into());

        Self {
            default_city,
            default_country,
            method,
            api_base_url,
            geo_url,
            geo_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
