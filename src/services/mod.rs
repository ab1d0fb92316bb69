// Service exports
pub mod providers;
pub mod tracking;

pub use providers::{AirportCatalog, FixedWeatherProvider, ProviderError, StaticAirportCatalog, WeatherProvider};
pub use tracking::{follow_nearest_airports, ManualPositionSource, PositionSource, TrackingError, TrackingState};
