// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod format;
pub mod planner;
pub mod ranker;
pub mod scoring;

pub use distance::{haversine_distance, initial_bearing};
pub use filters::{matches_airport_class, passes_flight_filters};
pub use format::{format_coordinate, format_latitude, format_longitude};
pub use planner::{Planner, PlannerError};
pub use ranker::{nearest_airports, rank_flights, DEFAULT_AIRPORT_LIMIT};
pub use scoring::{score_flight, sub_scores, SubScores};
