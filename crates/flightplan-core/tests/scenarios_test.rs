//! End-to-end planning scenarios against the built-in tables.

use flightplan_core::{
    build_great_circle_route, check_compliance, check_route, compute_fuel_plan,
    haversine_distance_nm, ComplianceReason, FlightData, PlanError, Severity, Waypoint,
    WaypointKind,
};

fn data() -> &'static FlightData {
    FlightData::builtin()
}

fn single(lat: f64, lon: f64) -> Vec<Waypoint> {
    vec![Waypoint {
        number: 0,
        lat,
        lon,
        name: "TEST".to_string(),
        distance_from_origin_nm: 0.0,
        bearing_deg: 0.0,
        kind: WaypointKind::Generated,
    }]
}

#[test]
fn test_b777_transatlantic_fuel_plan() {
    let plan = compute_fuel_plan(&data().aircraft, "B777-300ER", 5456.0, 30.0, true).unwrap();

    assert_eq!(plan.effective_speed_kt, 460.0);
    let hours = 5456.0 / 460.0;
    assert!((plan.flight_time_hours - hours).abs() < 1e-9);
    assert!((plan.trip_fuel_kg - hours * 8600.0).abs() < 1e-6);
    assert!((plan.contingency_fuel_kg - hours * 8600.0 * 0.05).abs() < 1e-6);
    assert_eq!(plan.alternate_fuel_kg, 6450.0);
    assert_eq!(plan.reserve_fuel_kg, 4300.0);
    assert_eq!(plan.taxi_fuel_kg, 200.0);
    assert!((plan.total_fuel_kg - 118_053.65).abs() < 0.1);
    assert!(plan.safe_to_fly);
    assert!(plan.etops_advisory.is_none());
}

#[test]
fn test_klax_egll_route_geometry() {
    let airports = &data().airports;
    let route = build_great_circle_route(airports, "KLAX", "EGLL", 5).unwrap();
    let lax = airports.lookup("KLAX").unwrap();
    let lhr = airports.lookup("EGLL").unwrap();

    assert_eq!(route.waypoints.len(), 7);
    for (i, wp) in route.waypoints.iter().enumerate() {
        assert_eq!(wp.number as usize, i);
    }
    assert_eq!((route.waypoints[0].lat, route.waypoints[0].lon), (lax.lat, lax.lon));
    assert_eq!((route.waypoints[6].lat, route.waypoints[6].lon), (lhr.lat, lhr.lon));
    assert!(route
        .waypoints
        .windows(2)
        .all(|w| w[0].distance_from_origin_nm < w[1].distance_from_origin_nm));
}

#[test]
fn test_white_house_overflight_is_critical() {
    let report = check_route(&data().restricted_zones, &single(38.8977, -77.0365), 5000.0, 50.0)
        .unwrap();
    assert!(!report.route_clear);
    let hit = report
        .critical_violations
        .iter()
        .find(|v| v.zone_code == "P-56")
        .unwrap();
    assert_eq!(hit.severity, Severity::Critical);
    assert!(hit.distance_from_center_nm < 1e-6);
}

#[test]
fn test_dreamliner_resolves_to_787() {
    let aircraft = data().aircraft.resolve("dreamliner").unwrap();
    assert!(aircraft.code.starts_with("B787"));
}

#[test]
fn distance_symmetry_and_zero() {
    let pairs = [("KJFK", "EGLL"), ("YSSY", "WSSS"), ("KLAX", "RJTT")];
    for (a, b) in pairs {
        let ab = data().airports.route_distance(a, b).unwrap();
        let ba = data().airports.route_distance(b, a).unwrap();
        assert!((ab.distance_nm - ba.distance_nm).abs() < 1e-9);
    }
    assert_eq!(haversine_distance_nm(51.47, -0.4543, 51.47, -0.4543), 0.0);
}

#[test]
fn alias_and_name_match_canonical_record() {
    let catalog = &data().aircraft;
    let canonical = catalog.resolve("B777-300ER").unwrap();
    assert_eq!(catalog.resolve("773").unwrap(), canonical);
    assert_eq!(catalog.resolve("777-300er").unwrap(), canonical);
    assert_eq!(catalog.resolve("Boeing 777-300ER").unwrap(), canonical);
}

#[test]
fn fuel_plan_is_deterministic() {
    let a = compute_fuel_plan(&data().aircraft, "A350-900", 4200.0, 15.0, true).unwrap();
    let b = compute_fuel_plan(&data().aircraft, "A350-900", 4200.0, 15.0, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn headwind_increases_fuel_until_invalid() {
    let catalog = &data().aircraft;
    let mut previous = 0.0;
    for headwind in [-60.0, -20.0, 0.0, 40.0, 120.0, 300.0, 440.0] {
        let plan = compute_fuel_plan(catalog, "A320", 800.0, headwind, true).unwrap();
        assert!(plan.total_fuel_kg > previous);
        previous = plan.total_fuel_kg;
    }
    let err = compute_fuel_plan(catalog, "A320", 800.0, 500.0, true).unwrap_err();
    assert!(matches!(err, PlanError::InvalidWind { .. }));
}

#[test]
fn unrated_types_are_never_evaluated() {
    for code in ["B737-800", "A320", "A380-800", "E190"] {
        let result = check_compliance(data(), code, &single(0.0, -150.0)).unwrap();
        assert!(result.compliant);
        assert_eq!(result.reason, ComplianceReason::NotRequired);
    }
}

#[test]
fn zone_center_violates_and_far_point_is_silent() {
    let zones = &data().restricted_zones;
    for zone in zones {
        let report = check_route(
            std::slice::from_ref(zone),
            &single(zone.center_lat, zone.center_lon),
            0.0,
            50.0,
        )
        .unwrap();
        let violations = report.critical_violations.len() + report.warnings.len();
        assert_eq!(violations, 1, "zone {}", zone.code);
    }

    let report = check_route(zones, &single(-60.0, 0.0), 35_000.0, 50.0).unwrap();
    assert!(report.critical_violations.is_empty());
    assert!(report.warnings.is_empty());
    assert!(report.near_restricted.is_empty());
}

#[test]
fn malformed_waypoint_is_not_cleared() {
    let err = check_route(&data().restricted_zones, &single(38.8977, f64::NAN), 5000.0, 50.0)
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidWaypoint { index: 0, .. }));
    assert_eq!(err.kind(), "invalid_waypoint");
}
