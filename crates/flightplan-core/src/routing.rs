//! Great-circle route construction between two airports.

use crate::catalog::{AirportCatalog, AirportSummary};
use crate::error::{PlanError, RouteSide};
use crate::models::{GeoPoint, Waypoint, WaypointKind};
use crate::naming::{NumericNamer, WaypointNamer};
use crate::rules::PlanningDefaults;
use crate::spatial::{
    final_bearing, haversine_distance_nm, initial_bearing, intermediate_point, nm_to_km,
    EARTH_RADIUS_NM,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Below this separation two airports are treated as the same point.
const MIN_ROUTE_NM: f64 = 1e-6;

/// A built route with summary geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub origin: AirportSummary,
    pub destination: AirportSummary,
    pub total_distance_nm: f64,
    pub total_distance_km: f64,
    pub initial_bearing_deg: f64,
    pub final_bearing_deg: f64,
    /// Origin, intermediates, destination
    pub waypoints: Vec<Waypoint>,
    /// Intermediate points only
    pub intermediate_count: usize,
    /// Intermediate points labelled with a named fix
    pub named_fixes_used: usize,
}

impl RouteDescriptor {
    pub fn points(&self) -> Vec<GeoPoint> {
        self.waypoints.iter().map(Waypoint::location).collect()
    }
}

/// Build a route with numbered intermediate waypoints.
pub fn build_great_circle_route(
    airports: &AirportCatalog,
    origin: &str,
    destination: &str,
    waypoint_count: usize,
) -> Result<RouteDescriptor, PlanError> {
    build_route(airports, origin, destination, waypoint_count, &NumericNamer)
}

/// Build a great-circle route with `waypoint_count` evenly spaced
/// intermediate points, labelled by `namer`.
///
/// # Arguments
/// * `origin`, `destination` - ICAO or IATA codes
/// * `waypoint_count` - Intermediate points, excluding the two airports
///
/// # Returns
/// `waypoint_count + 2` waypoints numbered from 0. The first and last carry
/// the airports' exact coordinates.
pub fn build_route(
    airports: &AirportCatalog,
    origin: &str,
    destination: &str,
    waypoint_count: usize,
    namer: &dyn WaypointNamer,
) -> Result<RouteDescriptor, PlanError> {
    let max = PlanningDefaults::default().max_waypoint_count;
    if waypoint_count > max {
        return Err(PlanError::InvalidInput(format!(
            "waypoint count {waypoint_count} exceeds the maximum of {max}"
        )));
    }

    let from = airports.resolve(origin, RouteSide::Origin)?;
    let to = airports.resolve(destination, RouteSide::Destination)?;

    if from.icao == to.icao {
        return Err(PlanError::DegenerateRoute(format!(
            "origin and destination are both {}",
            from.icao
        )));
    }

    let total_distance_nm = haversine_distance_nm(from.lat, from.lon, to.lat, to.lon);
    if total_distance_nm < MIN_ROUTE_NM {
        return Err(PlanError::DegenerateRoute(format!(
            "{} and {} share the same coordinates",
            from.icao, to.icao
        )));
    }
    // Every great circle joins antipodes, so interpolation has no unique answer.
    if EARTH_RADIUS_NM * std::f64::consts::PI - total_distance_nm < MIN_ROUTE_NM {
        return Err(PlanError::DegenerateRoute(format!(
            "{} and {} are antipodal",
            from.icao, to.icao
        )));
    }

    let initial = initial_bearing(from.lat, from.lon, to.lat, to.lon);
    let final_ = final_bearing(from.lat, from.lon, to.lat, to.lon);

    let mut waypoints = Vec::with_capacity(waypoint_count + 2);
    waypoints.push(Waypoint {
        number: 0,
        lat: from.lat,
        lon: from.lon,
        name: from.city.clone(),
        distance_from_origin_nm: 0.0,
        bearing_deg: initial,
        kind: WaypointKind::Airport,
    });

    let mut taken: Vec<String> = Vec::new();
    for i in 1..=waypoint_count {
        let fraction = i as f64 / (waypoint_count + 1) as f64;
        let (lat, lon) = intermediate_point(from.lat, from.lon, to.lat, to.lon, fraction);
        let label = namer.label(i, GeoPoint::new(lat, lon), &taken);
        if label.kind == WaypointKind::Fix {
            taken.push(label.name.clone());
        }

        waypoints.push(Waypoint {
            number: i as u32,
            lat,
            lon,
            name: label.name,
            distance_from_origin_nm: haversine_distance_nm(from.lat, from.lon, lat, lon),
            bearing_deg: initial_bearing(lat, lon, to.lat, to.lon),
            kind: label.kind,
        });
    }

    waypoints.push(Waypoint {
        number: waypoint_count as u32 + 1,
        lat: to.lat,
        lon: to.lon,
        name: to.city.clone(),
        distance_from_origin_nm: total_distance_nm,
        bearing_deg: final_,
        kind: WaypointKind::Airport,
    });

    debug!(
        origin = %from.icao,
        destination = %to.icao,
        total_distance_nm,
        waypoints = waypoints.len(),
        named = taken.len(),
        "route built"
    );

    Ok(RouteDescriptor {
        origin: airports.summary(from),
        destination: airports.summary(to),
        total_distance_nm,
        total_distance_km: nm_to_km(total_distance_nm),
        initial_bearing_deg: initial,
        final_bearing_deg: final_,
        waypoints,
        intermediate_count: waypoint_count,
        named_fixes_used: taken.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FlightData;
    use crate::naming::FixNamer;

    fn airports() -> &'static AirportCatalog {
        &FlightData::builtin().airports
    }

    #[test]
    fn test_direct_route_has_only_airports() {
        let route = build_great_circle_route(airports(), "SIN", "SYD", 0).unwrap();
        assert_eq!(route.waypoints.len(), 2);
        assert_eq!(route.waypoints[1].number, 1);
        assert_eq!(route.waypoints[1].distance_from_origin_nm, route.total_distance_nm);
    }

    #[test]
    fn same_airport_is_degenerate() {
        let err = build_great_circle_route(airports(), "LAX", "klax", 5).unwrap_err();
        assert!(matches!(err, PlanError::DegenerateRoute(_)));
    }

    #[test]
    fn too_many_waypoints() {
        let err = build_great_circle_route(airports(), "LAX", "JFK", 101).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn unknown_destination_named() {
        let err = build_great_circle_route(airports(), "LAX", "ZZZZ", 5).unwrap_err();
        assert!(matches!(
            err,
            PlanError::AirportNotFound { side: RouteSide::Destination, .. }
        ));
    }

    #[test]
    fn endpoint_bearings() {
        let route = build_great_circle_route(airports(), "JFK", "LHR", 3).unwrap();
        let first = &route.waypoints[0];
        let last = route.waypoints.last().unwrap();
        assert_eq!(first.bearing_deg, route.initial_bearing_deg);
        assert_eq!(last.bearing_deg, route.final_bearing_deg);
        assert_eq!(first.kind, WaypointKind::Airport);
        assert_eq!(first.name, "New York");
        assert_eq!(last.name, "London");
    }

    #[test]
    fn fix_naming_does_not_move_points() {
        let data = FlightData::builtin();
        let plain = build_great_circle_route(&data.airports, "JFK", "LHR", 5).unwrap();
        let namer = FixNamer::new(&data.fixes);
        let named = build_route(&data.airports, "JFK", "LHR", 5, &namer).unwrap();

        for (a, b) in plain.waypoints.iter().zip(&named.waypoints) {
            assert_eq!((a.lat, a.lon, a.number), (b.lat, b.lon, b.number));
            assert_eq!(a.distance_from_origin_nm, b.distance_from_origin_nm);
        }
        let fix_count = named
            .waypoints
            .iter()
            .filter(|w| w.kind == WaypointKind::Fix)
            .count();
        assert_eq!(named.named_fixes_used, fix_count);
    }
}
