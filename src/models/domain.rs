use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic position in decimal degrees
///
/// Ranges are not enforced on construction; callers holding sensor data can
/// run `validate()` before handing it to the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// A single flight search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FlightCandidate {
    #[serde(rename = "flightNumber", default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Duration label as shown to the user, e.g. `"5h 15m"`
    pub duration: String,
    #[serde(rename = "stopCount", default)]
    pub stop_count: u32,
    #[serde(rename = "layoverCount", default)]
    pub layover_count: u32,
    #[serde(rename = "safetyRating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub safety_rating: f64,
}

impl FlightCandidate {
    /// Candidate with no identity fields, for callers that only need scoring
    pub fn new(
        price: f64,
        duration: impl Into<String>,
        stop_count: u32,
        layover_count: u32,
        safety_rating: f64,
    ) -> Self {
        Self {
            flight_number: None,
            airline: None,
            origin: None,
            destination: None,
            price,
            duration: duration.into(),
            stop_count,
            layover_count,
            safety_rating,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.stop_count == 0
    }
}

/// Relative emphasis the user puts on each flight attribute (0-100 each)
///
/// Weights are independent and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PriorityWeights {
    #[validate(range(max = 100))]
    pub cost: u8,
    #[validate(range(max = 100))]
    pub time: u8,
    #[validate(range(max = 100))]
    pub safety: u8,
    #[validate(range(max = 100))]
    pub comfort: u8,
    #[serde(rename = "layoverSensitivity")]
    #[validate(range(max = 100))]
    pub layover_sensitivity: u8,
}

impl PriorityWeights {
    pub const fn uniform(weight: u8) -> Self {
        Self {
            cost: weight,
            time: weight,
            safety: weight,
            comfort: weight,
            layover_sensitivity: weight,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            cost: 70,
            time: 60,
            safety: 90,
            comfort: 50,
            layover_sensitivity: 40,
        }
    }
}

/// Airport size classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirportClass {
    Major,
    Regional,
    Airstrip,
}

/// Reference airport supplied by an airport catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportCandidate {
    pub code: String,
    pub name: String,
    pub location: Coordinate,
    pub class: AirportClass,
}

impl AirportCandidate {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        location: Coordinate,
        class: AirportClass,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            location,
            class,
        }
    }
}

/// Airport with distance and bearing from a query origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAirport {
    #[serde(flatten)]
    pub airport: AirportCandidate,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "bearingDeg")]
    pub bearing_deg: f64,
}

/// Flight candidate with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFlight {
    #[serde(flatten)]
    pub flight: FlightCandidate,
    pub score: u32,
}

/// Fixed-shape flight search filters; `None` disables a bound
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FlightFilters {
    #[serde(rename = "maxPrice", default)]
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    #[serde(rename = "maxStops", default)]
    pub max_stops: Option<u32>,
    #[serde(rename = "minSafetyRating", default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub min_safety_rating: Option<f64>,
    #[serde(rename = "directOnly", default)]
    pub direct_only: bool,
}

/// Weather report for a location, as returned by a weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: Coordinate,
    #[serde(rename = "temperatureC")]
    pub temperature_c: f64,
    #[serde(rename = "windSpeedKt")]
    pub wind_speed_kt: f64,
    #[serde(rename = "windDirectionDeg")]
    pub wind_direction_deg: f64,
    #[serde(rename = "visibilityKm")]
    pub visibility_km: f64,
    pub conditions: String,
    #[serde(rename = "observedAt")]
    pub observed_at: chrono::DateTime<chrono::Utc>,
}

/// One reading from a position source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    #[serde(rename = "accuracyM", default)]
    pub accuracy_m: Option<f64>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl PositionFix {
    pub fn now(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            accuracy_m: None,
            timestamp: chrono::Utc::now(),
        }
    }
}
