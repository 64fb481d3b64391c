pub mod airspace;
pub mod catalog;
pub mod data;
pub mod error;
pub mod etops;
pub mod fuel;
pub mod models;
pub mod naming;
pub mod routing;
pub mod rules;
pub mod spatial;
pub mod wind;

pub use airspace::{
    check_point, check_route, zones_near, AirspaceReport, AirspaceVerdict, AirspaceViolation,
    NearRestricted, ZoneProximity,
};
pub use catalog::{
    normalize_aircraft_key, AircraftCatalog, AirportCatalog, AirportSummary, FlightData, Region,
    RouteDistance,
};
pub use error::{CatalogError, PlanError, RouteSide};
pub use etops::{
    check_compliance, check_compliance_at_speed, diversions_along_route, ComplianceReason,
    ComplianceResult, DiversionOption, EtopsViolation, RouteDiversion, WaypointDiversion,
};
pub use fuel::{compute_fuel_plan, compute_fuel_plan_with_policy, FuelPlan};
pub use models::{
    validate_point, validate_waypoints, AircraftRecord, AirportRecord, DiversionAirport, GeoPoint,
    NamedFix, RestrictedZone, Severity, Waypoint, WaypointKind, ZoneType,
};
pub use naming::{FixDistance, FixNamer, FixTable, NumericNamer, WaypointLabel, WaypointNamer};
pub use routing::{build_great_circle_route, build_route, RouteDescriptor};
pub use rules::{FuelPolicy, PlanningDefaults};
pub use spatial::{haversine_distance_nm, initial_bearing};
pub use wind::{time_route, wind_correction, LegTiming, RouteTiming, Wind, WindCorrection};
