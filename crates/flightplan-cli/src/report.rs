//! Combined plan reports.

use crate::config::Config;
use chrono::{DateTime, Utc};
use flightplan_core::{
    build_route, check_compliance, check_route, compute_fuel_plan, AirspaceReport,
    AirspaceVerdict, ComplianceResult, FixNamer, FlightData, FuelPlan, NumericNamer, PlanError,
    RouteDescriptor, WaypointNamer,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Inputs for a full plan beyond the airport pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub aircraft: String,
    pub origin: String,
    pub destination: String,
    pub headwind_kt: f64,
    pub include_alternate: bool,
    pub named_fixes: bool,
}

/// Route, fuel, airspace and ETOPS results for one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub plan_id: String,
    pub generated_at: DateTime<Utc>,
    pub aircraft_code: String,
    pub cruise_altitude_ft: f64,
    pub route: RouteDescriptor,
    pub fuel: FuelPlan,
    pub airspace: AirspaceReport,
    pub airspace_verdict: AirspaceVerdict,
    pub etops: ComplianceResult,
    /// Fuel is safe, no critical airspace violation, ETOPS compliant
    pub approved: bool,
}

impl PlanReport {
    pub fn assemble(
        data: &FlightData,
        config: &Config,
        request: &PlanRequest,
    ) -> Result<Self, PlanError> {
        let aircraft = data.aircraft.resolve(&request.aircraft)?;
        let fix_namer = FixNamer::new(&data.fixes);
        let namer: &dyn WaypointNamer = if request.named_fixes {
            &fix_namer
        } else {
            &NumericNamer
        };
        let route = build_route(
            &data.airports,
            &request.origin,
            &request.destination,
            config.waypoint_count,
            namer,
        )?;

        let fuel = compute_fuel_plan(
            &data.aircraft,
            &aircraft.code,
            route.total_distance_nm,
            request.headwind_kt,
            request.include_alternate,
        )?;
        let airspace = check_route(
            &data.restricted_zones,
            &route.waypoints,
            config.cruise_altitude_ft,
            config.buffer_nm,
        )?;
        let etops = check_compliance(data, &aircraft.code, &route.waypoints)?;

        let airspace_verdict = airspace.verdict();
        let approved = fuel.safe_to_fly && airspace.route_clear && etops.compliant;
        let plan_id = Uuid::new_v4().to_string();

        info!(
            plan_id = %plan_id,
            aircraft = %aircraft.code,
            origin = %route.origin.icao,
            destination = %route.destination.icao,
            approved,
            "plan assembled"
        );

        Ok(Self {
            plan_id,
            generated_at: Utc::now(),
            aircraft_code: aircraft.code.clone(),
            cruise_altitude_ft: config.cruise_altitude_ft,
            route,
            fuel,
            airspace,
            airspace_verdict,
            etops,
            approved,
        })
    }
}
