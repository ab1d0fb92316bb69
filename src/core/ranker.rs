use crate::core::{
    distance::{haversine_distance, initial_bearing},
    scoring::score_flight,
};
use crate::models::{AirportCandidate, Coordinate, FlightCandidate, PriorityWeights, RankedAirport, ScoredFlight};

/// Default number of airports returned by a nearest-airports query
pub const DEFAULT_AIRPORT_LIMIT: usize = 5;

/// Find the airports closest to `origin`
///
/// Each candidate gets its distance and bearing from `origin`. Results are
/// sorted ascending by distance; equal distances keep their input order.
/// At most `limit` entries are returned, so a limit of 0 yields nothing.
pub fn nearest_airports(
    origin: Coordinate,
    candidates: &[AirportCandidate],
    limit: usize,
) -> Vec<RankedAirport> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedAirport> = candidates
        .iter()
        .map(|airport| RankedAirport {
            distance_km: haversine_distance(origin, airport.location),
            bearing_deg: initial_bearing(origin, airport.location),
            airport: airport.clone(),
        })
        .collect();

    // sort_by is stable, ties stay in input order; NaN distances go last
    ranked.sort_by(|a, b| {
        a.distance_km
            .is_nan()
            .cmp(&b.distance_km.is_nan())
            .then_with(|| a.distance_km.total_cmp(&b.distance_km))
    });

    ranked.truncate(limit);

    tracing::debug!(
        "Ranked {} of {} airports around ({}, {})",
        ranked.len(),
        candidates.len(),
        origin.latitude,
        origin.longitude
    );

    ranked
}

/// Convert a caller-supplied signed limit; anything <= 0 means no results
#[inline]
pub fn effective_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

/// Score every flight and order them best first
///
/// Flights with equal scores keep their input order.
pub fn rank_flights<I>(flights: I, weights: &PriorityWeights) -> Vec<ScoredFlight>
where
    I: IntoIterator<Item = FlightCandidate>,
{
    let mut scored: Vec<ScoredFlight> = flights
        .into_iter()
        .map(|flight| ScoredFlight {
            score: score_flight(&flight, weights),
            flight,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AirportClass;

    fn create_airport(code: &str, lat: f64, lon: f64) -> AirportCandidate {
        AirportCandidate::new(code, format!("Airport {}", code), Coordinate::new(lat, lon), AirportClass::Major)
    }

    fn new_york_airports() -> Vec<AirportCandidate> {
        vec![
            create_airport("KEWR", 40.6895, -74.1745), // ~33.9km from JFK
            create_airport("KLGA", 40.7769, -73.8740), // ~17.1km
            create_airport("KTEB", 40.8501, -74.0608), // ~33.3km
        ]
    }

    const JFK: Coordinate = Coordinate::new(40.6413, -73.7781);

    #[test]
    fn test_nearest_sorted_by_distance() {
        let ranked = nearest_airports(JFK, &new_york_airports(), 5);

        let codes: Vec<&str> = ranked.iter().map(|r| r.airport.code.as_str()).collect();
        assert_eq!(codes, vec!["KLGA", "KTEB", "KEWR"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_respects_limit() {
        let ranked = nearest_airports(JFK, &new_york_airports(), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].airport.code, "KLGA");
        assert_eq!(ranked[1].airport.code, "KTEB");
    }

    #[test]
    fn test_empty_and_zero_limit() {
        assert!(nearest_airports(JFK, &[], 5).is_empty());
        assert!(nearest_airports(JFK, &new_york_airports(), 0).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            create_airport("AAAA", 41.0, -73.7781),
            create_airport("BBBB", 41.0, -73.7781),
            create_airport("CCCC", 41.0, -73.7781),
        ];
        let ranked = nearest_airports(JFK, &candidates, 3);
        let codes: Vec<&str> = ranked.iter().map(|r| r.airport.code.as_str()).collect();
        assert_eq!(codes, vec!["AAAA", "BBBB", "CCCC"]);
    }

    #[test]
    fn test_nan_distance_sorts_last() {
        let candidates = vec![
            create_airport("KEWR", 40.6895, -74.1745),
            create_airport("XNAN", f64::NAN, -74.0),
            create_airport("KLGA", 40.7769, -73.8740),
            create_airport("KTEB", 40.8501, -74.0608),
        ];

        let ranked = nearest_airports(JFK, &candidates, 4);
        let codes: Vec<&str> = ranked.iter().map(|r| r.airport.code.as_str()).collect();
        assert_eq!(codes, vec!["KLGA", "KTEB", "KEWR", "XNAN"]);
        assert!(ranked[3].distance_km.is_nan());

        let top = nearest_airports(JFK, &candidates, 2);
        assert_eq!(top[0].airport.code, "KLGA");
        assert_eq!(top[1].airport.code, "KTEB");
    }

    #[test]
    fn test_antipodal_candidate_does_not_displace_nearby() {
        let origin = Coordinate::new(-87.5, 0.0);
        let candidates = vec![
            create_airport("FAR", 10.0, 0.0),
            create_airport("ANTI", 87.5, 180.0),
            create_airport("NEAR", -87.0, 0.0),
        ];

        let ranked = nearest_airports(origin, &candidates, 2);
        assert_eq!(ranked[0].airport.code, "NEAR");
        assert_eq!(ranked[1].airport.code, "FAR");
        assert!(ranked.iter().all(|r| r.distance_km.is_finite()));
    }

    #[test]
    fn test_bearing_attached() {
        let ranked = nearest_airports(JFK, &new_york_airports(), 1);
        // LGA is north-west of JFK
        assert!(ranked[0].bearing_deg > 300.0 && ranked[0].bearing_deg < 360.0);
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(-3), 0);
        assert_eq!(effective_limit(0), 0);
        assert_eq!(effective_limit(7), 7);
    }

    #[test]
    fn test_rank_flights_best_first() {
        let weights = PriorityWeights::uniform(100);
        let flights = vec![
            FlightCandidate::new(600.0, "9h 40m", 2, 2, 3.5),
            FlightCandidate::new(180.0, "3h 05m", 0, 0, 4.8),
            FlightCandidate::new(320.0, "5h 15m", 1, 1, 4.2),
        ];

        let ranked = rank_flights(flights, &weights);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].flight.price, 180.0);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_flights_stable() {
        let weights = PriorityWeights::default();
        let mut first = FlightCandidate::new(250.0, "4h", 0, 0, 4.0);
        first.flight_number = Some("SK100".to_string());
        let mut second = first.clone();
        second.flight_number = Some("SK200".to_string());

        let ranked = rank_flights(vec![first, second], &weights);
        assert_eq!(ranked[0].flight.flight_number.as_deref(), Some("SK100"));
        assert_eq!(ranked[1].flight.flight_number.as_deref(), Some("SK200"));
    }
}
