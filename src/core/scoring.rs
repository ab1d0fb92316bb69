use crate::models::{FlightCandidate, PriorityWeights};

/// The five independent sub-scores of a flight, each >= 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub cost: f64,
    pub time: f64,
    pub safety: f64,
    pub comfort: f64,
    pub layover: f64,
}

/// Calculate a composite desirability score for a flight
///
/// Scoring formula:
/// score = round((
///     cost_score * w_cost +            # Cheaper = higher
///     time_score * w_time +            # Shorter = higher
///     safety_score * w_safety +        # Rating 0-5 mapped to 0-100
///     comfort_score * w_comfort +      # Fewer stops = higher
///     layover_score * w_layover        # Fewer layovers = higher
/// ) / 100 / 5)
///
/// Weights are used as given (0-100 each) and are not normalized, so the
/// result only reaches 100 when every sub-score and every weight is maxed.
pub fn score_flight(flight: &FlightCandidate, weights: &PriorityWeights) -> u32 {
    let scores = sub_scores(flight);

    let weighted = scores.cost * f64::from(weights.cost)
        + scores.time * f64::from(weights.time)
        + scores.safety * f64::from(weights.safety)
        + scores.comfort * f64::from(weights.comfort)
        + scores.layover * f64::from(weights.layover_sensitivity);

    (weighted / 100.0 / 5.0).round() as u32
}

/// Compute the unweighted sub-scores for a flight
pub fn sub_scores(flight: &FlightCandidate) -> SubScores {
    SubScores {
        cost: calculate_cost_score(flight.price),
        time: calculate_time_score(&flight.duration),
        safety: calculate_safety_score(flight.safety_rating),
        comfort: calculate_comfort_score(flight.stop_count),
        layover: calculate_layover_score(flight.layover_count),
    }
}

/// Leading integer of a duration label (`"5h 15m"` -> 5)
///
/// Only the first number counts, so the hour component is what drives the
/// time score. Labels that do not start with a number yield `None`.
pub fn duration_magnitude(label: &str) -> Option<f64> {
    let trimmed = label.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<f64>().ok().map(|value| sign * value)
}

#[inline]
fn calculate_cost_score(price: f64) -> f64 {
    (100.0 - price / 5.0).max(0.0)
}

/// A label without a leading number earns no time credit
#[inline]
fn calculate_time_score(duration: &str) -> f64 {
    match duration_magnitude(duration) {
        Some(magnitude) => (100.0 - magnitude / 2.0).max(0.0),
        None => 0.0,
    }
}

#[inline]
fn calculate_safety_score(safety_rating: f64) -> f64 {
    safety_rating * 20.0
}

#[inline]
fn calculate_comfort_score(stop_count: u32) -> f64 {
    if stop_count == 0 {
        return 100.0;
    }
    (100.0 - f64::from(stop_count) * 30.0).max(0.0)
}

#[inline]
fn calculate_layover_score(layover_count: u32) -> f64 {
    (100.0 - f64::from(layover_count) * 25.0).max(0.0)
}
