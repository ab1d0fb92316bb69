use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AirportClass, Coordinate, FlightCandidate, FlightFilters, PriorityWeights};

/// Request to rank a set of flight search results
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FlightSearchRequest {
    #[validate(nested)]
    pub flights: Vec<FlightCandidate>,
    /// Falls back to the planner's configured priorities when absent
    #[serde(default)]
    #[validate(nested)]
    pub priorities: Option<PriorityWeights>,
    #[serde(default)]
    #[validate(nested)]
    pub filters: FlightFilters,
}

/// Request for the airports closest to a position
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearestAirportsRequest {
    #[validate(nested)]
    pub origin: Coordinate,
    /// Values <= 0 produce an empty result
    #[serde(default)]
    pub limit: Option<i64>,
    /// Restrict to these classes; empty means all
    #[serde(default)]
    pub classes: Vec<AirportClass>,
}
