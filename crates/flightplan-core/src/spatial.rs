//! Great-circle math for route geometry and distance calculations.
//!
//! All angles are decimal degrees at the interface and radians internally.
//! Distances are nautical miles.

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Exact nautical mile to kilometre conversion.
pub const KM_PER_NM: f64 = 1.852;

/// Angular separation below which two points are treated as coincident (radians).
const COINCIDENT_EPS_RAD: f64 = 1e-12;

/// Calculate great-circle distance between two points using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in nautical miles. Symmetric in its arguments, 0 for coincident points.
pub fn haversine_distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    EARTH_RADIUS_NM * angular_distance(lat1, lon1, lat2, lon2)
}

/// Central angle between two points in radians.
fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 on antipodal pairs.
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing (forward azimuth) from point 1 toward point 2.
/// Returns degrees in [0, 360), 0 = north, 90 = east.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Bearing on arrival at point 2 when flying the great circle from point 1.
pub fn final_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (initial_bearing(lat2, lon2, lat1, lon1) + 180.0) % 360.0
}

/// Point at `fraction` of the great-circle distance from point 1 to point 2.
///
/// `fraction` 0 returns point 1 and 1 returns point 2 exactly. When the two
/// points coincide the interpolation is undefined and point 1 is returned;
/// callers that care must reject that case before calling.
pub fn intermediate_point(lat1: f64, lon1: f64, lat2: f64, lon2: f64, fraction: f64) -> (f64, f64) {
    if fraction <= 0.0 {
        return (lat1, lon1);
    }
    if fraction >= 1.0 {
        return (lat2, lon2);
    }

    let d = angular_distance(lat1, lon1, lat2, lon2);
    if d < COINCIDENT_EPS_RAD {
        return (lat1, lon1);
    }

    let phi1 = lat1.to_radians();
    let lambda1 = lon1.to_radians();
    let phi2 = lat2.to_radians();
    let lambda2 = lon2.to_radians();

    let a = ((1.0 - fraction) * d).sin() / d.sin();
    let b = (fraction * d).sin() / d.sin();

    let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
    let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
    let z = a * phi1.sin() + b * phi2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);

    (lat.to_degrees(), lon.to_degrees())
}

/// Offset a position by distance and bearing along a great circle.
///
/// # Arguments
/// * `lat`, `lon` - Starting position in degrees
/// * `distance_nm` - Distance in nautical miles
/// * `bearing_deg` - Bearing in degrees (0 = north, 90 = east)
///
/// # Returns
/// (new_lat, new_lon) in degrees, longitude normalized to [-180, 180)
#[cfg(test)]
pub(crate) fn destination_point(lat: f64, lon: f64, distance_nm: f64, bearing_deg: f64) -> (f64, f64) {
    if distance_nm.abs() <= f64::EPSILON {
        return (lat, lon);
    }

    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();
    let bearing_rad = bearing_deg.to_radians();
    let angular_distance = distance_nm / EARTH_RADIUS_NM;

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_ad = angular_distance.sin();
    let cos_ad = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_ad + cos_lat1 * sin_ad * bearing_rad.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = bearing_rad.sin() * sin_ad * cos_lat1;
    let x = cos_ad - sin_lat1 * sin_lat2;
    let mut lon2 = lon1 + y.atan2(x);
    lon2 =
        (lon2 + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI) - std::f64::consts::PI;

    (lat2.to_degrees(), lon2.to_degrees())
}

/// Convert nautical miles to kilometres.
pub fn nm_to_km(distance_nm: f64) -> f64 {
    distance_nm * KM_PER_NM
}

/// Format decimal hours as `"{h}h {mm}m"` (minutes truncated).
pub fn format_hours(hours: f64) -> String {
    let hours = hours.max(0.0);
    let h = hours.trunc();
    let m = ((hours - h) * 60.0).trunc();
    format!("{}h {:02}m", h as u64, m as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KLAX: (f64, f64) = (33.9425, -118.4081);
    const EGLL: (f64, f64) = (51.4700, -0.4543);

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude is 60 nm on this sphere, give or take.
        let dist = haversine_distance_nm(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 60.04).abs() < 0.05, "got {dist}");
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_distance_nm(KLAX.0, KLAX.1, KLAX.0, KLAX.1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let ab = haversine_distance_nm(KLAX.0, KLAX.1, EGLL.0, EGLL.1);
        let ba = haversine_distance_nm(EGLL.0, EGLL.1, KLAX.0, KLAX.1);
        assert_eq!(ab, ba);
        assert!((4_700.0..4_800.0).contains(&ab), "LAX-LHR should be ~4,7xx nm, got {ab}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let dist = haversine_distance_nm(0.0, 0.0, 0.0, 180.0);
        assert!(dist.is_finite());
        assert!((dist - EARTH_RADIUS_NM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert!((initial_bearing(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(1.0, 0.0, 0.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 1.0, 0.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_stays_in_range() {
        for (lat, lon) in [(10.0, -170.0), (-45.0, 179.0), (89.0, 0.0), (-89.0, -1.0)] {
            let b = initial_bearing(KLAX.0, KLAX.1, lat, lon);
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }

    #[test]
    fn final_bearing_on_equator_matches_course() {
        assert!((final_bearing(0.0, 0.0, 0.0, 10.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn intermediate_point_endpoints_are_exact() {
        assert_eq!(intermediate_point(KLAX.0, KLAX.1, EGLL.0, EGLL.1, 0.0), KLAX);
        assert_eq!(intermediate_point(KLAX.0, KLAX.1, EGLL.0, EGLL.1, 1.0), EGLL);
    }

    #[test]
    fn intermediate_point_splits_distance() {
        let total = haversine_distance_nm(KLAX.0, KLAX.1, EGLL.0, EGLL.1);
        let (lat, lon) = intermediate_point(KLAX.0, KLAX.1, EGLL.0, EGLL.1, 0.25);
        let from_origin = haversine_distance_nm(KLAX.0, KLAX.1, lat, lon);
        let to_dest = haversine_distance_nm(lat, lon, EGLL.0, EGLL.1);
        assert!((from_origin - total * 0.25).abs() < 1e-6);
        assert!((from_origin + to_dest - total).abs() < 1e-6);
    }

    #[test]
    fn intermediate_point_coincident_returns_start() {
        let p = intermediate_point(KLAX.0, KLAX.1, KLAX.0, KLAX.1, 0.5);
        assert_eq!(p, KLAX);
    }

    #[test]
    fn destination_point_round_trips_distance() {
        let (lat, lon) = destination_point(38.8977, -77.0365, 51.5, 45.0);
        let dist = haversine_distance_nm(38.8977, -77.0365, lat, lon);
        assert!((dist - 51.5).abs() < 1e-6, "got {dist}");
    }

    #[test]
    fn format_hours_truncates_minutes() {
        assert_eq!(format_hours(11.8609), "11h 51m");
        assert_eq!(format_hours(0.5), "0h 30m");
        assert_eq!(format_hours(2.0), "2h 00m");
    }

    #[test]
    fn km_conversion_is_exact_factor() {
        assert!((nm_to_km(100.0) - 185.2).abs() < 1e-9);
    }
}
