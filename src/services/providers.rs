use crate::models::{AirportCandidate, Coordinate, WeatherObservation};
use thiserror::Error;

/// Errors that can occur when a data provider is queried
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error("No data available for {latitude}, {longitude}")]
    Unavailable { latitude: f64, longitude: f64 },
}

/// Source of reference airports
///
/// Implementations own the airport list; the ranker only borrows it.
pub trait AirportCatalog: Send + Sync {
    fn airports(&self) -> &[AirportCandidate];
}

/// Source of current weather for a location
pub trait WeatherProvider: Send + Sync {
    fn fetch(&self, location: Coordinate) -> Result<WeatherObservation, ProviderError>;
}

/// Airport catalog backed by an in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticAirportCatalog {
    airports: Vec<AirportCandidate>,
}

impl StaticAirportCatalog {
    pub fn new(airports: Vec<AirportCandidate>) -> Self {
        Self { airports }
    }

    /// Load a catalog from a JSON array of airports
    ///
    /// ```json
    /// [{ "code": "KJFK", "name": "John F. Kennedy Intl",
    ///    "location": { "latitude": 40.6413, "longitude": -73.7781 },
    ///    "class": "major" }]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let airports: Vec<AirportCandidate> = serde_json::from_str(json)?;
        tracing::debug!("Loaded {} airports into static catalog", airports.len());
        Ok(Self { airports })
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl AirportCatalog for StaticAirportCatalog {
    fn airports(&self) -> &[AirportCandidate] {
        &self.airports
    }
}

/// Weather provider that reports the same conditions everywhere
///
/// The observation is relocated to the requested coordinate and stamped
/// with the time of the call.
#[derive(Debug, Clone)]
pub struct FixedWeatherProvider {
    template: WeatherObservation,
}

impl FixedWeatherProvider {
    pub fn new(template: WeatherObservation) -> Self {
        Self { template }
    }
}

impl WeatherProvider for FixedWeatherProvider {
    fn fetch(&self, location: Coordinate) -> Result<WeatherObservation, ProviderError> {
        if location.latitude.is_nan() || location.longitude.is_nan() {
            return Err(ProviderError::Unavailable {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }

        Ok(WeatherObservation {
            location,
            observed_at: chrono::Utc::now(),
            ..self.template.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AirportClass;

    const CATALOG_JSON: &str = r#"[
        {"code": "KJFK", "name": "John F. Kennedy Intl",
         "location": {"latitude": 40.6413, "longitude": -73.7781}, "class": "major"},
        {"code": "KFRG", "name": "Republic",
         "location": {"latitude": 40.7288, "longitude": -73.4134}, "class": "regional"}
    ]"#;

    fn create_template() -> WeatherObservation {
        WeatherObservation {
            location: Coordinate::new(0.0, 0.0),
            temperature_c: 18.0,
            wind_speed_kt: 12.0,
            wind_direction_deg: 270.0,
            visibility_km: 10.0,
            conditions: "Clear".to_string(),
            observed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = StaticAirportCatalog::from_json(CATALOG_JSON).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.airports()[0].code, "KJFK");
        assert_eq!(catalog.airports()[1].class, AirportClass::Regional);
    }

    #[test]
    fn test_catalog_rejects_bad_json() {
        let result = StaticAirportCatalog::from_json(r#"[{"code": "KJFK"}]"#);
        assert!(matches!(result, Err(ProviderError::InvalidCatalog(_))));
    }

    #[test]
    fn test_fixed_weather_relocates() {
        let provider = FixedWeatherProvider::new(create_template());
        let here = Coordinate::new(40.6413, -73.7781);

        let observation = provider.fetch(here).unwrap();
        assert_eq!(observation.location, here);
        assert_eq!(observation.conditions, "Clear");
        assert_eq!(observation.wind_direction_deg, 270.0);
    }

    #[test]
    fn test_fixed_weather_rejects_nan() {
        let provider = FixedWeatherProvider::new(create_template());
        let result = provider.fetch(Coordinate::new(f64::NAN, 0.0));
        assert!(matches!(result, Err(ProviderError::Unavailable { .. })));
    }
}
