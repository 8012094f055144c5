use super::{Coordinates, GeoError, GeoLocator};

/// Test locator yielding a preset position or failure.
pub struct InMemoryGeoLocator {
    result: Result<Coordinates, GeoError>,
}

impl InMemoryGeoLocator {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinates {
                latitude,
                longitude,
            }),
        }
    }

    pub fn failing(err: GeoError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait::async_trait]
impl GeoLocator for InMemoryGeoLocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        self.result.clone()
    }
}
