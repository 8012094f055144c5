use reqwest::StatusCode;
use serde::Deserialize;

use super::{Coordinates, GeoError, GeoLocator};
use crate::config::Config;

/// Locates the machine through an IP geolocation service speaking the
/// ip-api.com response shape.
pub struct IpGeoLocator {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl IpGeoLocator {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.geo_timeout)
            .build()
            .expect("Geolocation HTTP client must be buildable");
        Self {
            client,
            url: config.geo_url.clone(),
        }
    }
}

fn position_from(body: GeoResponse) -> Result<Coordinates, GeoError> {
    if body.status != "success" {
        return Err(GeoError::PositionUnavailable);
    }
    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(GeoError::Unknown("position response had no coordinates".into())),
    }
}

#[async_trait::async_trait]
impl GeoLocator for IpGeoLocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        // A fresh fix every time, never a cached position
        let res = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeoError::Timeout
                } else if e.is_connect() {
                    GeoError::PositionUnavailable
                } else {
                    GeoError::Unknown(e.to_string())
                }
            })?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || status == StatusCode::TOO_MANY_REQUESTS
        {
            return Err(GeoError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(GeoError::PositionUnavailable);
        }

        let body = res
            .json::<GeoResponse>()
            .await
            .map_err(|e| GeoError::Unknown(e.to_string()))?;
        position_from(body)
    }
}
