use std::collections::HashMap;

use chrono::NaiveDate;
use mawaqit_domain::{format_date, LocationQuery, PrayerTimeSet};
use serde::Deserialize;

use super::{TimingsError, TimingsSource};
use crate::config::Config;

/// Client for the Aladhan-style timings API.
///
/// Two request shapes exist: `timingsByCity` with city, country and method as
/// query parameters, and `timings/{DD-MM-YYYY}` with latitude, longitude and
/// method. The `Default` query is resolved against the configured default
/// city and country.
pub struct HttpTimingsSource {
    client: reqwest::Client,
    base_url: String,
    method: u32,
    default_city: String,
    default_country: String,
}

#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    code: u16,
    status: String,
    data: EnvelopeData,
}

// On failure the service puts a plain message string where the payload
// normally goes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeData {
    Timings { timings: HashMap<String, String> },
    Message(String),
}

impl HttpTimingsSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            method: config.method,
            default_city: config.default_city.clone(),
            default_country: config.default_country.clone(),
        }
    }

    fn build_request(&self, query: &LocationQuery, date: NaiveDate) -> reqwest::RequestBuilder {
        let method = self.method.to_string();
        let by_city = |city: &str, country: &str| {
            self.client
                .get(format!("{}/timingsByCity", self.base_url))
                .query(&[("city", city), ("country", country), ("method", method.as_str())])
        };
        match query {
            LocationQuery::CityCountry { city, country } => by_city(city, country),
            LocationQuery::Default => by_city(&self.default_city, &self.default_country),
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => self
                .client
                .get(format!("{}/timings/{}", self.base_url, format_date(date)))
                .query(&[
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    ("method", method.clone()),
                ]),
        }
    }
}

fn parse_envelope(envelope: TimingsEnvelope) -> Result<PrayerTimeSet, TimingsError> {
    if envelope.code != 200 || envelope.status != "OK" {
        let message = match envelope.data {
            EnvelopeData::Message(message) => message,
            EnvelopeData::Timings { .. } => "Failed to fetch prayer times.".to_string(),
        };
        return Err(TimingsError::Service(message));
    }
    match envelope.data {
        EnvelopeData::Timings { timings } => {
            PrayerTimeSet::from_wire(&timings).map_err(|_| TimingsError::Malformed)
        }
        EnvelopeData::Message(_) => Err(TimingsError::Malformed),
    }
}

#[async_trait::async_trait]
impl TimingsSource for HttpTimingsSource {
    async fn fetch(
        &self,
        query: &LocationQuery,
        date: NaiveDate,
    ) -> Result<PrayerTimeSet, TimingsError> {
        let res = self
            .build_request(query, date)
            .send()
            .await
            .map_err(|e| TimingsError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(TimingsError::Http(status.as_u16()));
        }

        let envelope = res
            .json::<TimingsEnvelope>()
            .await
            .map_err(|_| TimingsError::Malformed)?;
        parse_envelope(envelope)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mawaqit_domain::Prayer;

    fn source() -> HttpTimingsSource {
        HttpTimingsSource {
            client: reqwest::Client::new(),
            base_url: "https://api.example.com/v1".into(),
            method: 4,
            default_city: "Riyadh".into(),
            default_country: "Saudi Arabia".into(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn city_and_country_are_url_escaped() {
        let query = LocationQuery::CityCountry {
            city: "New York".into(),
            country: "United States".into(),
        };
        let req = source().build_request(&query, date()).build().unwrap();
        assert_eq!(req.url().path(), "/v1/timingsByCity");
        assert_eq!(
            req.url().query(),
            Some("city=New+York&country=United+States&method=4")
        );
    }

    #[test]
    fn default_query_uses_the_configured_location() {
        let req = source()
            .build_request(&LocationQuery::Default, date())
            .build()
            .unwrap();
        assert_eq!(
            req.url().query(),
            Some("city=Riyadh&country=Saudi+Arabia&method=4")
        );
    }

    #[test]
    fn coordinates_go_through_the_dated_endpoint() {
        let query = LocationQuery::Coordinates {
            latitude: 51.5074,
            longitude: -0.1278,
        };
        let req = source().build_request(&query, date()).build().unwrap();
        assert_eq!(req.url().path(), "/v1/timings/05-08-2026");
        assert_eq!(
            req.url().query(),
            Some("latitude=51.5074&longitude=-0.1278&method=4")
        );
    }

    #[test]
    fn parses_a_successful_envelope() {
        let envelope: TimingsEnvelope = serde_json::from_str(
            r#"{
                "code": 200,
                "status": "OK",
                "data": {
                    "timings": {
                        "Fajr": "05:00",
                        "Sunrise": "06:20",
                        "Dhuhr": "12:10"
                    }
                }
            }"#,
        )
        .unwrap();

        let times = parse_envelope(envelope).unwrap();
        assert_eq!(times.get(Prayer::Fajr).unwrap().format_12h(), "5:00 AM");
        assert!(times.get(Prayer::Sunrise).is_some());
    }

    #[test]
    fn surfaces_the_service_error_message() {
        let envelope: TimingsEnvelope = serde_json::from_str(
            r#"{
                "code": 400,
                "status": "BAD_REQUEST",
                "data": "Invalid country provided."
            }"#,
        )
        .unwrap();

        assert_eq!(
            parse_envelope(envelope),
            Err(TimingsError::Service("Invalid country provided.".into()))
        );
    }

    #[test]
    fn an_error_code_with_a_timings_payload_is_still_an_error() {
        let envelope = TimingsEnvelope {
            code: 500,
            status: "OK".into(),
            data: EnvelopeData::Timings {
                timings: HashMap::new(),
            },
        };
        assert!(matches!(
            parse_envelope(envelope),
            Err(TimingsError::Service(_))
        ));
    }

    #[test]
    fn an_unparsable_clock_time_is_a_malformed_payload() {
        let envelope: TimingsEnvelope = serde_json::from_str(
            r#"{
                "code": 200,
                "status": "OK",
                "data": { "timings": { "Fajr": "five o'clock" } }
            }"#,
        )
        .unwrap();
        assert_eq!(parse_envelope(envelope), Err(TimingsError::Malformed));
    }
}
