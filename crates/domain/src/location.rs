use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationInputError {
    #[error("Please enter both city and country for search.")]
    IncompleteSearch,
}

/// The location a fetch is issued for. Exactly one variant is active per
/// fetch: an explicit city/country search, coordinates from the geolocation
/// provider, or the configured default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationQuery {
    CityCountry { city: String, country: String },
    Coordinates { latitude: f64, longitude: f64 },
    Default,
}

impl LocationQuery {
    /// Builds a query from the two search fields. Both must be non-empty,
    /// otherwise no query is produced and the caller must not fetch.
    pub fn from_search(city: &str, country: &str) -> Result<Self, LocationInputError> {
        let city = city.trim();
        let country = country.trim();
        if city.is_empty() || country.is_empty() {
            return Err(LocationInputError::IncompleteSearch);
        }
        Ok(LocationQuery::CityCountry {
            city: city.to_string(),
            country: country.to_string(),
        })
    }

    /// The location label shown once a fetch with this query succeeds.
    /// `Default` has no label of its own, the configured default city and
    /// country fill it in.
    pub fn label(&self) -> Option<String> {
        match self {
            LocationQuery::CityCountry { city, country } => Some(format!("{}, {}", city, country)),
            LocationQuery::Coordinates { latitude, longitude } => Some(format!(
                "Your Current Location (Lat: {:.2}, Lon: {:.2})",
                latitude, longitude
            )),
            LocationQuery::Default => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_a_query_from_complete_search_fields() {
        let query = LocationQuery::from_search("London", "UK").unwrap();
        assert_eq!(query.label().unwrap(), "London, UK");
    }

    #[test]
    fn trims_search_fields() {
        let query = LocationQuery::from_search(" London ", " UK ").unwrap();
        assert_eq!(query.label().unwrap(), "London, UK");
    }

    #[test]
    fn rejects_incomplete_search_fields() {
        for (city, country) in &[("London", ""), ("", "UK"), ("", ""), ("  ", "UK")] {
            assert_eq!(
                LocationQuery::from_search(city, country),
                Err(LocationInputError::IncompleteSearch)
            );
        }
    }

    #[test]
    fn labels_coordinates_with_two_decimals() {
        let query = LocationQuery::Coordinates {
            latitude: 51.5074,
            longitude: -0.1278,
        };
        assert_eq!(
            query.label().unwrap(),
            "Your Current Location (Lat: 51.51, Lon: -0.13)"
        );
    }

    #[test]
    fn default_has_no_label_of_its_own() {
        assert_eq!(LocationQuery::Default.label(), None);
    }
}
