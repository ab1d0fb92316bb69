use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinate, RankedAirport, ScoredFlight};

/// Response for a flight search ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResponse {
    pub flights: Vec<ScoredFlight>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for a nearest-airports query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestAirportsResponse {
    pub origin: Coordinate,
    /// Origin rendered as degrees and decimal minutes
    #[serde(rename = "originLabel")]
    pub origin_label: String,
    pub airports: Vec<RankedAirport>,
}
