//! Skyplan Algo - flight ranking and geospatial core for the Skyplan assistant
//!
//! This library holds the computational pieces behind the flight-planning
//! assistant: great-circle distance and bearing, coordinate formatting,
//! weighted flight scoring and nearest-airport ranking. Data sources and
//! geolocation are injected through the traits in [`services`].

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{haversine_distance, initial_bearing},
    format::format_coordinate,
    ranker::{nearest_airports, rank_flights},
    scoring::score_flight,
    Planner,
};
pub use models::{AirportCandidate, AirportClass, Coordinate, FlightCandidate, PriorityWeights, RankedAirport, ScoredFlight};
