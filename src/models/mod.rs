// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AirportCandidate, AirportClass, Coordinate, FlightCandidate, FlightFilters, PositionFix,
    PriorityWeights, RankedAirport, ScoredFlight, WeatherObservation,
};
pub use requests::{FlightSearchRequest, NearestAirportsRequest};
pub use responses::{FlightSearchResponse, NearestAirportsResponse};
