use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::config::Settings;
use crate::core::{
    filters::{matches_airport_class, passes_flight_filters},
    format::format_coordinate,
    ranker::{effective_limit, nearest_airports, rank_flights, DEFAULT_AIRPORT_LIMIT},
};
use crate::models::{
    AirportCandidate, Coordinate, FlightSearchRequest, FlightSearchResponse, NearestAirportsRequest,
    NearestAirportsResponse, PriorityWeights, WeatherObservation,
};
use crate::services::{AirportCatalog, ProviderError, WeatherProvider};

/// Errors returned by planner requests
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Flight-planning orchestrator
///
/// Holds the default priorities and limits and composes the stateless
/// filters, scorer and rankers for each request.
///
/// # Flight search
/// 1. Request validation
/// 2. Search filters
/// 3. Scoring and ranking
///
/// # Nearest airports
/// 1. Origin validation
/// 2. Airport class filter
/// 3. Distance ranking
#[derive(Debug, Clone)]
pub struct Planner {
    weights: PriorityWeights,
    default_limit: usize,
    max_limit: usize,
}

impl Planner {
    pub fn new(weights: PriorityWeights, default_limit: usize, max_limit: usize) -> Self {
        Self {
            weights,
            default_limit,
            max_limit,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(PriorityWeights::default(), DEFAULT_AIRPORT_LIMIT, 50)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let planner = Self::new(
            settings.priority_weights(),
            settings.ranking.default_limit,
            settings.ranking.max_limit,
        );
        tracing::info!("Planner initialized with weights: {:?}", planner.weights);
        planner
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// Rank flight search results for the user
    ///
    /// Uses the request's priorities when present, otherwise the planner's.
    pub fn search_flights(
        &self,
        request: FlightSearchRequest,
    ) -> Result<FlightSearchResponse, PlannerError> {
        if let Err(errors) = request.validate() {
            tracing::info!("Validation failed for flight search: field_errors={:?}", errors);
            return Err(errors.into());
        }

        let total_candidates = request.flights.len();
        let weights = request.priorities.unwrap_or(self.weights);
        let filters = request.filters;

        let flights = rank_flights(
            request
                .flights
                .into_iter()
                .filter(|flight| passes_flight_filters(flight, &filters)),
            &weights,
        );

        tracing::debug!(
            "Ranked {} of {} flights with weights {:?}",
            flights.len(),
            total_candidates,
            weights
        );

        Ok(FlightSearchResponse {
            total_results: flights.len(),
            total_candidates,
            flights,
        })
    }

    /// Find the airports nearest to the request origin
    ///
    /// A missing limit falls back to the configured default; every limit is
    /// capped at the configured maximum.
    pub fn nearest_airports<C>(
        &self,
        request: &NearestAirportsRequest,
        catalog: &C,
    ) -> Result<NearestAirportsResponse, PlannerError>
    where
        C: AirportCatalog + ?Sized,
    {
        request.validate()?;

        let limit = request
            .limit
            .map(effective_limit)
            .unwrap_or(self.default_limit)
            .min(self.max_limit);

        let candidates: Vec<AirportCandidate> = catalog
            .airports()
            .iter()
            .filter(|airport| matches_airport_class(airport, &request.classes))
            .cloned()
            .collect();

        let airports = nearest_airports(request.origin, &candidates, limit);

        Ok(NearestAirportsResponse {
            origin: request.origin,
            origin_label: format_coordinate(request.origin),
            airports,
        })
    }

    /// Current weather at a position
    pub fn weather_at<W>(
        &self,
        location: Coordinate,
        provider: &W,
    ) -> Result<WeatherObservation, PlannerError>
    where
        W: WeatherProvider + ?Sized,
    {
        location.validate()?;
        Ok(provider.fetch(location)?)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
