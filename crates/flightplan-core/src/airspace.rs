//! Restricted airspace checks.
//!
//! Zones are circles with an optional ceiling. A waypoint inside a zone and at
//! or below its ceiling is a violation; a waypoint within the buffer ring
//! around a zone is reported as near.

use crate::error::PlanError;
use crate::models::{validate_point, GeoPoint, RestrictedZone, Severity, Waypoint, ZoneType};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::models::validate_waypoints;

/// A waypoint inside a restricted zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirspaceViolation {
    pub waypoint_number: u32,
    pub waypoint_name: String,
    pub zone_code: String,
    pub zone_name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub severity: Severity,
    pub distance_from_center_nm: f64,
    pub description: String,
    pub country: String,
}

/// A waypoint outside a zone but within the buffer ring around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearRestricted {
    pub waypoint_number: u32,
    pub waypoint_name: String,
    pub zone_code: String,
    pub zone_name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Negative when the waypoint is inside the zone but above its ceiling
    pub distance_to_boundary_nm: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirspaceVerdict {
    Clear,
    /// No critical violation, but warnings or near passes
    Caution,
    NotApproved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirspaceReport {
    pub critical_violations: Vec<AirspaceViolation>,
    pub warnings: Vec<AirspaceViolation>,
    pub near_restricted: Vec<NearRestricted>,
    pub route_clear: bool,
    pub caution_advised: bool,
}

impl AirspaceReport {
    pub fn verdict(&self) -> AirspaceVerdict {
        match (self.route_clear, self.caution_advised) {
            (false, _) => AirspaceVerdict::NotApproved,
            (true, true) => AirspaceVerdict::Caution,
            (true, false) => AirspaceVerdict::Clear,
        }
    }
}

/// A zone near a query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneProximity {
    pub zone_code: String,
    pub zone_name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub severity: Severity,
    pub distance_nm: f64,
    pub description: String,
    pub country: String,
}

fn violation(wp: &Waypoint, zone: &RestrictedZone, distance_nm: f64) -> AirspaceViolation {
    AirspaceViolation {
        waypoint_number: wp.number,
        waypoint_name: wp.name.clone(),
        zone_code: zone.code.clone(),
        zone_name: zone.name.clone(),
        zone_type: zone.zone_type,
        severity: zone.severity,
        distance_from_center_nm: distance_nm,
        description: zone.description.clone(),
        country: zone.country.clone(),
    }
}

/// Check every waypoint against every zone.
///
/// The report lists critical violations, other violations as warnings, and
/// near passes within `buffer_nm` of a zone boundary. A waypoint inside a zone
/// but above its ceiling is still reported as near.
///
/// # Errors
/// `InvalidWaypoint` for non-finite or out-of-range coordinates.
pub fn check_route(
    zones: &[RestrictedZone],
    waypoints: &[Waypoint],
    cruise_altitude_ft: f64,
    buffer_nm: f64,
) -> Result<AirspaceReport, PlanError> {
    validate_waypoints(waypoints)?;

    let mut critical_violations = Vec::new();
    let mut warnings = Vec::new();
    let mut near_restricted = Vec::new();

    for wp in waypoints {
        let point = wp.location();
        for zone in zones {
            let distance_nm = point.distance_nm(zone.center());

            if distance_nm <= zone.radius_nm && zone.applies_at(cruise_altitude_ft) {
                let v = violation(wp, zone, distance_nm);
                if zone.severity == Severity::Critical {
                    critical_violations.push(v);
                } else {
                    warnings.push(v);
                }
                continue;
            }

            if distance_nm <= zone.radius_nm + buffer_nm {
                near_restricted.push(NearRestricted {
                    waypoint_number: wp.number,
                    waypoint_name: wp.name.clone(),
                    zone_code: zone.code.clone(),
                    zone_name: zone.name.clone(),
                    zone_type: zone.zone_type,
                    distance_to_boundary_nm: distance_nm - zone.radius_nm,
                    description: zone.description.clone(),
                });
            }
        }
    }

    debug!(
        waypoints = waypoints.len(),
        critical = critical_violations.len(),
        warnings = warnings.len(),
        near = near_restricted.len(),
        "airspace check complete"
    );

    let route_clear = critical_violations.is_empty();
    let caution_advised = !warnings.is_empty() || !near_restricted.is_empty();
    Ok(AirspaceReport {
        critical_violations,
        warnings,
        near_restricted,
        route_clear,
        caution_advised,
    })
}

/// Zones that contain `point` at `altitude_ft`.
pub fn check_point(
    zones: &[RestrictedZone],
    point: GeoPoint,
    altitude_ft: f64,
) -> Result<Vec<ZoneProximity>, PlanError> {
    validate_point(0, point)?;
    Ok(zones
        .iter()
        .filter_map(|zone| {
            let distance_nm = point.distance_nm(zone.center());
            (distance_nm <= zone.radius_nm && zone.applies_at(altitude_ft))
                .then(|| proximity(zone, distance_nm))
        })
        .collect())
}

/// Zones whose center lies within `radius_nm` of `point`, nearest first.
pub fn zones_near(zones: &[RestrictedZone], point: GeoPoint, radius_nm: f64) -> Vec<ZoneProximity> {
    let mut found: Vec<_> = zones
        .iter()
        .filter_map(|zone| {
            let distance_nm = point.distance_nm(zone.center());
            (distance_nm <= radius_nm).then(|| proximity(zone, distance_nm))
        })
        .collect();
    found.sort_by(|a, b| a.distance_nm.total_cmp(&b.distance_nm));
    found
}

fn proximity(zone: &RestrictedZone, distance_nm: f64) -> ZoneProximity {
    ZoneProximity {
        zone_code: zone.code.clone(),
        zone_name: zone.name.clone(),
        zone_type: zone.zone_type,
        severity: zone.severity,
        distance_nm,
        description: zone.description.clone(),
        country: zone.country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FlightData;
    use crate::models::WaypointKind;
    use crate::spatial::destination_point;

    fn zones() -> &'static [RestrictedZone] {
        &FlightData::builtin().restricted_zones
    }

    fn wp(number: u32, name: &str, lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            number,
            lat,
            lon,
            name: name.to_string(),
            distance_from_origin_nm: 0.0,
            bearing_deg: 0.0,
            kind: WaypointKind::Generated,
        }
    }

    #[test]
    fn test_far_waypoint_is_clear() {
        // Mid South Pacific.
        let report = check_route(zones(), &[wp(0, "X", -40.0, -140.0)], 35_000.0, 50.0).unwrap();
        assert!(report.route_clear);
        assert!(!report.caution_advised);
        assert_eq!(report.verdict(), AirspaceVerdict::Clear);
    }

    #[test]
    fn ceiling_turns_violation_into_near_pass() {
        let edwards = GeoPoint::new(34.9054, -117.8840);
        let low = check_route(zones(), &[wp(1, "E", edwards.lat, edwards.lon)], 10_000.0, 50.0).unwrap();
        assert_eq!(low.warnings.len(), 1);
        assert_eq!(low.warnings[0].severity, Severity::High);
        assert!(low.route_clear);

        let high = check_route(zones(), &[wp(1, "E", edwards.lat, edwards.lon)], 85_000.0, 50.0).unwrap();
        assert!(high.warnings.is_empty());
        assert_eq!(high.near_restricted.len(), 1);
        assert_eq!(high.near_restricted[0].zone_code, "R-2508");
        assert!(high.near_restricted[0].distance_to_boundary_nm < 0.0);
    }

    #[test]
    fn near_pass_reports_boundary_distance() {
        // 30 nm north of Camp David, outside the White House buffer ring.
        let (lat, lon) = destination_point(39.6483, -77.4650, 30.0, 0.0);
        let report = check_route(zones(), &[wp(2, "N", lat, lon)], 35_000.0, 50.0).unwrap();
        assert!(report.route_clear);
        let p40 = report
            .near_restricted
            .iter()
            .find(|n| n.zone_code == "P-40")
            .unwrap();
        assert!((p40.distance_to_boundary_nm - 28.5).abs() < 1e-6);
        assert_eq!(report.verdict(), AirspaceVerdict::Caution);
    }

    #[test]
    fn just_beyond_buffer_is_silent() {
        let edwards = zones().iter().find(|z| z.code == "R-2508").unwrap();
        let reach = edwards.radius_nm + 50.0;

        let (lat, lon) = destination_point(edwards.center_lat, edwards.center_lon, reach + 1e-6, 0.0);
        let outside = check_route(zones(), &[wp(3, "O", lat, lon)], 35_000.0, 50.0).unwrap();
        assert!(outside.warnings.is_empty());
        assert!(outside.near_restricted.is_empty());
        assert_eq!(outside.verdict(), AirspaceVerdict::Clear);

        let (lat, lon) = destination_point(edwards.center_lat, edwards.center_lon, reach - 1e-3, 0.0);
        let inside = check_route(zones(), &[wp(3, "I", lat, lon)], 35_000.0, 50.0).unwrap();
        assert_eq!(inside.near_restricted.len(), 1);
        assert_eq!(inside.near_restricted[0].zone_code, "R-2508");
    }

    #[test]
    fn malformed_waypoint_is_rejected() {
        let route = [wp(0, "A", 38.0, -77.0), wp(1, "B", 38.8977, f64::NAN)];
        let err = check_route(zones(), &route, 5_000.0, 50.0).unwrap_err();
        assert!(matches!(err, PlanError::InvalidWaypoint { index: 1, .. }));

        let err = check_point(zones(), GeoPoint::new(95.0, 0.0), 5_000.0).unwrap_err();
        assert!(matches!(err, PlanError::InvalidWaypoint { index: 0, .. }));
    }

    #[test]
    fn check_point_at_white_house() {
        let hits = check_point(zones(), GeoPoint::new(38.90, -77.04), 5_000.0).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].zone_code, "P-56");
    }

    #[test]
    fn zones_near_washington_sorted() {
        let found = zones_near(zones(), GeoPoint::new(38.90, -77.04), 200.0);
        let codes: Vec<_> = found.iter().map(|z| z.zone_code.as_str()).collect();
        assert_eq!(codes, ["P-56", "P-40"]);
    }

    #[test]
    fn north_korea_route_is_not_approved() {
        let route = [
            wp(0, "Tokyo", 35.5494, 139.7798),
            wp(1, "WPT1", 38.0, 135.0),
            wp(2, "WPT2", 40.0, 128.0),
            wp(3, "Beijing", 40.0799, 116.6031),
        ];
        let report = check_route(zones(), &route, 35_000.0, 50.0).unwrap();
        assert!(!report.route_clear);
        assert!(report
            .critical_violations
            .iter()
            .any(|v| v.zone_code == "NORTH-KOREA" && v.waypoint_number == 2));
        assert_eq!(report.verdict(), AirspaceVerdict::NotApproved);
    }
}
