//! Subcommand execution. Every command yields one JSON document.

use crate::cli::{Command, RouteArgs};
use crate::config::Config;
use crate::report::{PlanReport, PlanRequest};
use anyhow::{anyhow, Result};
use flightplan_core::{
    build_route, check_compliance_at_speed, check_route, compute_fuel_plan, diversions_along_route,
    time_route, zones_near, AirspaceReport, AirspaceVerdict, AirportSummary, ComplianceResult,
    FixDistance, FixNamer, FlightData, GeoPoint, NumericNamer, PlanningDefaults, RouteDescriptor,
    RouteDiversion, Wind, WaypointNamer, ZoneProximity,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
struct AirspaceOutput {
    verdict: AirspaceVerdict,
    cruise_altitude_ft: f64,
    buffer_nm: f64,
    #[serde(flatten)]
    report: AirspaceReport,
}

#[derive(Debug, Serialize)]
struct EtopsOutput {
    #[serde(flatten)]
    compliance: ComplianceResult,
    diversions_along_route: Vec<RouteDiversion>,
}

#[derive(Debug, Serialize)]
struct NearbyOutput {
    lat: f64,
    lon: f64,
    radius_nm: f64,
    restricted_zones: Vec<ZoneProximity>,
    fixes: Vec<FixDistance>,
}

fn route_for(
    data: &FlightData,
    config: &Config,
    origin: &str,
    destination: &str,
    args: &RouteArgs,
) -> Result<RouteDescriptor> {
    let count = args.waypoints.unwrap_or(config.waypoint_count);
    let fix_namer = FixNamer::new(&data.fixes);
    let namer: &dyn WaypointNamer = if args.named { &fix_namer } else { &NumericNamer };
    Ok(build_route(&data.airports, origin, destination, count, namer)?)
}

/// Run one subcommand against a loaded table set.
pub fn run(command: &Command, data: &FlightData, config: &Config) -> Result<Value> {
    let value = match command {
        Command::Aircraft { query: None } => serde_json::to_value(data.aircraft.list_all())?,
        Command::Aircraft { query: Some(query) } => {
            serde_json::to_value(data.aircraft.resolve(query)?)?
        }

        Command::Airport { code } => {
            let airport = data.airports.require(code)?;
            serde_json::to_value(data.airports.summary(airport))?
        }

        Command::Airports { region } => {
            let airports: Vec<AirportSummary> = match region {
                Some(region) => data
                    .airports
                    .by_region(*region)
                    .into_iter()
                    .map(|a| data.airports.summary(a))
                    .collect(),
                None => data
                    .airports
                    .list_all()
                    .iter()
                    .map(|a| data.airports.summary(a))
                    .collect(),
            };
            json!({
                "region": region.map(|r| r.name()),
                "count": airports.len(),
                "airports": airports,
            })
        }

        Command::Distance { origin, destination } => {
            serde_json::to_value(data.airports.route_distance(origin, destination)?)?
        }

        Command::Route { origin, destination, route } => {
            serde_json::to_value(route_for(data, config, origin, destination, route)?)?
        }

        Command::Fuel {
            aircraft,
            distance,
            route,
            headwind,
            no_alternate,
        } => {
            let distance_nm = match (distance, route.as_deref()) {
                (Some(nm), _) => *nm,
                (None, Some([origin, destination])) => {
                    data.airports.route_distance(origin, destination)?.distance_nm
                }
                _ => return Err(anyhow!("either --distance or --route ORIGIN DEST is required")),
            };
            let plan =
                compute_fuel_plan(&data.aircraft, aircraft, distance_nm, *headwind, !no_alternate)?;
            serde_json::to_value(plan)?
        }

        Command::Airspace {
            origin,
            destination,
            altitude,
            buffer,
            route,
        } => {
            let built = route_for(data, config, origin, destination, route)?;
            let cruise_altitude_ft = altitude.unwrap_or(config.cruise_altitude_ft);
            let buffer_nm = buffer.unwrap_or(config.buffer_nm);
            let report = check_route(
                &data.restricted_zones,
                &built.waypoints,
                cruise_altitude_ft,
                buffer_nm,
            )?;
            serde_json::to_value(AirspaceOutput {
                verdict: report.verdict(),
                cruise_altitude_ft,
                buffer_nm,
                report,
            })?
        }

        Command::Etops {
            aircraft,
            origin,
            destination,
            cruise_speed,
            route,
        } => {
            let built = route_for(data, config, origin, destination, route)?;
            let compliance =
                check_compliance_at_speed(data, aircraft, &built.waypoints, *cruise_speed)?;
            let radius = PlanningDefaults::default().diversion_search_radius_nm;
            let diversions = diversions_along_route(data, origin, destination, radius)?;
            serde_json::to_value(EtopsOutput {
                compliance,
                diversions_along_route: diversions,
            })?
        }

        Command::Wind {
            origin,
            destination,
            tas,
            wind_from,
            wind_speed,
            route,
        } => {
            let built = route_for(data, config, origin, destination, route)?;
            let wind = Wind {
                from_deg: *wind_from,
                speed_kt: *wind_speed,
            };
            serde_json::to_value(time_route(&built.waypoints, *tas, wind)?)?
        }

        Command::Nearby { lat, lon, radius } => {
            let point = GeoPoint::new(*lat, *lon);
            serde_json::to_value(NearbyOutput {
                lat: *lat,
                lon: *lon,
                radius_nm: *radius,
                restricted_zones: zones_near(&data.restricted_zones, point, *radius),
                fixes: data.fixes.nearby(point, *radius),
            })?
        }

        Command::Plan {
            aircraft,
            origin,
            destination,
            headwind,
            no_alternate,
            altitude,
            route,
        } => {
            let config = Config {
                waypoint_count: route.waypoints.unwrap_or(config.waypoint_count),
                cruise_altitude_ft: altitude.unwrap_or(config.cruise_altitude_ft),
                ..config.clone()
            };
            let request = PlanRequest {
                aircraft: aircraft.clone(),
                origin: origin.clone(),
                destination: destination.clone(),
                headwind_kt: *headwind,
                include_alternate: !no_alternate,
                named_fixes: route.named,
            };
            serde_json::to_value(PlanReport::assemble(data, &config, &request)?)?
        }
    };
    Ok(value)
}

/// JSON payload for a failed command.
pub fn error_payload(err: &anyhow::Error) -> Value {
    match err.downcast_ref::<flightplan_core::PlanError>() {
        Some(plan_err) => json!({ "error": plan_err.to_string(), "kind": plan_err.kind() }),
        None => json!({ "error": err.to_string() }),
    }
}
