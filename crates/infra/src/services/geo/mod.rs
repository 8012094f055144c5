mod http;
mod inmemory;

pub use http::IpGeoLocator;
pub use inmemory::InMemoryGeoLocator;

use thiserror::Error;

/// A position from the geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The four failure categories the geolocation provider can yield. Each one
/// carries its own user-facing message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("Location access denied. Please allow this device to be located.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("The request to get your location timed out.")]
    Timeout,
    #[error("Unable to retrieve your location. ({0})")]
    Unknown(String),
}

#[async_trait::async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, GeoError>;
}
