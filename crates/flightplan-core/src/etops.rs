//! ETOPS diversion-time checks for twin-engine aircraft.
//!
//! Every point of an ETOPS route must lie within the type's certified
//! diversion time of a suitable airport, flown at cruise speed in still air.

use crate::catalog::FlightData;
use crate::error::{PlanError, RouteSide};
use crate::models::{validate_waypoints, DiversionAirport, GeoPoint, Waypoint};
use crate::rules::PlanningDefaults;
use crate::spatial::intermediate_point;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceReason {
    /// The type has no ETOPS rating, so the rules do not apply
    NotRequired,
    Evaluated,
}

/// Nearest suitable diversion airport for a waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversionOption {
    pub icao: String,
    pub name: String,
    pub country: String,
    pub distance_nm: f64,
    pub time_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointDiversion {
    pub waypoint_number: u32,
    pub waypoint_name: String,
    pub lat: f64,
    pub lon: f64,
    pub nearest_diversion: Option<DiversionOption>,
}

/// A waypoint beyond the certified diversion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtopsViolation {
    #[serde(flatten)]
    pub waypoint: WaypointDiversion,
    pub required_time_minutes: u32,
    /// `None` when no diversion airport is known at all
    pub actual_time_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub compliant: bool,
    pub reason: ComplianceReason,
    pub aircraft_code: String,
    pub aircraft_name: String,
    /// e.g. "ETOPS-180"
    pub etops_rating: Option<String>,
    pub max_diversion_distance_nm: Option<f64>,
    pub cruise_speed_kt: f64,
    pub total_waypoints_checked: usize,
    pub compliant_waypoints: usize,
    pub violations: Vec<EtopsViolation>,
    /// First few compliant waypoints with their diversion airport
    pub sample_diversions: Vec<WaypointDiversion>,
    pub message: String,
}

/// A suitable airport close to a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDiversion {
    pub icao: String,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_from_origin_nm: f64,
    pub distance_from_dest_nm: f64,
    /// Measured from the great-circle midpoint
    pub distance_from_route_nm: f64,
}

/// Check a route at the aircraft's typical cruise speed.
pub fn check_compliance(
    data: &FlightData,
    aircraft_code: &str,
    waypoints: &[Waypoint],
) -> Result<ComplianceResult, PlanError> {
    check_compliance_at_speed(data, aircraft_code, waypoints, None)
}

/// Check a route, optionally overriding the cruise speed used for diversion
/// distance and time.
pub fn check_compliance_at_speed(
    data: &FlightData,
    aircraft_code: &str,
    waypoints: &[Waypoint],
    cruise_speed_kt: Option<f64>,
) -> Result<ComplianceResult, PlanError> {
    let aircraft = data.aircraft.resolve(aircraft_code)?;
    let cruise = cruise_speed_kt.unwrap_or(aircraft.cruise_speed_kt);
    if !cruise.is_finite() || cruise <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "cruise speed must be positive, got {cruise}"
        )));
    }

    let Some(etops_minutes) = aircraft.etops_minutes else {
        return Ok(ComplianceResult {
            compliant: true,
            reason: ComplianceReason::NotRequired,
            aircraft_code: aircraft.code.clone(),
            aircraft_name: aircraft.full_name.clone(),
            etops_rating: None,
            max_diversion_distance_nm: None,
            cruise_speed_kt: cruise,
            total_waypoints_checked: 0,
            compliant_waypoints: 0,
            violations: Vec::new(),
            sample_diversions: Vec::new(),
            message: format!(
                "{} is not ETOPS rated (likely 4-engine or not certified for extended \
                 overwater). ETOPS rules do not apply.",
                aircraft.full_name
            ),
        });
    };

    validate_waypoints(waypoints)?;

    let max_diversion_nm = f64::from(etops_minutes) / 60.0 * cruise;
    let candidates: Vec<(&DiversionAirport, GeoPoint)> = data
        .resolved_diversions()
        .map(|(div, airport)| (div, airport.location()))
        .collect();

    let mut violations = Vec::new();
    let mut compliant_points = Vec::new();

    for wp in waypoints {
        let point = wp.location();
        let nearest = candidates
            .iter()
            .map(|(div, loc)| (*div, point.distance_nm(*loc)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let option = nearest.map(|(div, distance_nm)| DiversionOption {
            icao: div.icao.clone(),
            name: div.name.clone(),
            country: div.country.clone(),
            distance_nm,
            time_minutes: distance_nm / cruise * 60.0,
        });
        let within = nearest.is_some_and(|(_, d)| d <= max_diversion_nm);

        let entry = WaypointDiversion {
            waypoint_number: wp.number,
            waypoint_name: wp.name.clone(),
            lat: wp.lat,
            lon: wp.lon,
            nearest_diversion: option,
        };
        if within {
            compliant_points.push(entry);
        } else {
            let actual_time_minutes = entry.nearest_diversion.as_ref().map(|d| d.time_minutes);
            violations.push(EtopsViolation {
                waypoint: entry,
                required_time_minutes: etops_minutes,
                actual_time_minutes,
            });
        }
    }

    let compliant = violations.is_empty();
    let compliant_waypoints = compliant_points.len();
    compliant_points.truncate(PlanningDefaults::default().sample_diversions);

    let message = if compliant {
        format!(
            "Route is ETOPS-{etops_minutes} compliant for {}. All waypoints are within \
             {etops_minutes} minutes flying time of a suitable diversion airport.",
            aircraft.full_name
        )
    } else {
        format!(
            "Route violates ETOPS-{etops_minutes} requirements for {}. {} waypoint(s) exceed \
             the maximum diversion time. Route must be adjusted or a 4-engine aircraft used.",
            aircraft.full_name,
            violations.len()
        )
    };

    debug!(
        aircraft = %aircraft.code,
        waypoints = waypoints.len(),
        violations = violations.len(),
        "ETOPS check complete"
    );

    Ok(ComplianceResult {
        compliant,
        reason: ComplianceReason::Evaluated,
        aircraft_code: aircraft.code.clone(),
        aircraft_name: aircraft.full_name.clone(),
        etops_rating: Some(format!("ETOPS-{etops_minutes}")),
        max_diversion_distance_nm: Some(max_diversion_nm),
        cruise_speed_kt: cruise,
        total_waypoints_checked: waypoints.len(),
        compliant_waypoints,
        violations,
        sample_diversions: compliant_points,
        message,
    })
}

/// Suitable diversion airports within `max_distance_nm` of the route's
/// great-circle midpoint, ordered by distance from the origin.
pub fn diversions_along_route(
    data: &FlightData,
    origin: &str,
    destination: &str,
    max_distance_nm: f64,
) -> Result<Vec<RouteDiversion>, PlanError> {
    let from = data.airports.resolve(origin, RouteSide::Origin)?;
    let to = data.airports.resolve(destination, RouteSide::Destination)?;
    let (mid_lat, mid_lon) = intermediate_point(from.lat, from.lon, to.lat, to.lon, 0.5);
    let midpoint = GeoPoint::new(mid_lat, mid_lon);

    let mut found: Vec<RouteDiversion> = data
        .resolved_diversions()
        .filter_map(|(div, airport)| {
            let loc = airport.location();
            let distance_from_route_nm = midpoint.distance_nm(loc);
            (distance_from_route_nm <= max_distance_nm).then(|| RouteDiversion {
                icao: div.icao.clone(),
                name: div.name.clone(),
                country: div.country.clone(),
                lat: airport.lat,
                lon: airport.lon,
                distance_from_origin_nm: from.location().distance_nm(loc),
                distance_from_dest_nm: to.location().distance_nm(loc),
                distance_from_route_nm,
            })
        })
        .collect();
    found.sort_by(|a, b| a.distance_from_origin_nm.total_cmp(&b.distance_from_origin_nm));
    Ok(found)
}
