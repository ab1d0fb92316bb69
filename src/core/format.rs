use crate::models::Coordinate;

/// Render a coordinate as degrees and decimal minutes
///
/// `40.6413, -73.7781` becomes `40°38.478'N 73°46.686'W`.
pub fn format_coordinate(coord: Coordinate) -> String {
    format!(
        "{} {}",
        format_latitude(coord.latitude),
        format_longitude(coord.longitude)
    )
}

/// Latitude with `N` for values >= 0, `S` otherwise
pub fn format_latitude(latitude: f64) -> String {
    let hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    format_axis(latitude, hemisphere)
}

/// Longitude with `E` for values >= 0 (the prime meridian is east), `W` otherwise
pub fn format_longitude(longitude: f64) -> String {
    let hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };
    format_axis(longitude, hemisphere)
}

#[inline]
fn format_axis(value: f64, hemisphere: char) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = (abs - degrees) * 60.0;

    format!("{}°{:.3}'{}", degrees, minutes, hemisphere)
}
