use crate::models::{AirportCandidate, AirportClass, FlightCandidate, FlightFilters};

/// Check if a flight satisfies the user's search filters
///
/// Runs before scoring; unset bounds always pass.
#[inline]
pub fn passes_flight_filters(flight: &FlightCandidate, filters: &FlightFilters) -> bool {
    if filters.direct_only && !flight.is_direct() {
        return false;
    }

    if let Some(max_price) = filters.max_price {
        if flight.price > max_price {
            return false;
        }
    }

    if let Some(max_stops) = filters.max_stops {
        if flight.stop_count > max_stops {
            return false;
        }
    }

    if let Some(min_safety) = filters.min_safety_rating {
        if flight.safety_rating < min_safety {
            return false;
        }
    }

    true
}

/// Check if an airport belongs to one of the requested classes
///
/// An empty class list accepts every airport.
#[inline]
pub fn matches_airport_class(airport: &AirportCandidate, classes: &[AirportClass]) -> bool {
    classes.is_empty() || classes.contains(&airport.class)
}
