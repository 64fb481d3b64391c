//! Fuel requirement calculator.
//!
//! Follows the usual airline breakdown: trip, contingency, alternate, final
//! reserve and taxi. Values are returned unrounded; rounding is left to the
//! presentation layer.

use crate::catalog::AircraftCatalog;
use crate::error::PlanError;
use crate::rules::FuelPolicy;
use crate::spatial::format_hours;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fuel breakdown and go/no-go checks for one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPlan {
    pub aircraft_code: String,
    pub aircraft_name: String,

    pub distance_nm: f64,
    /// Negative for a tailwind
    pub headwind_kt: f64,
    pub effective_speed_kt: f64,
    pub flight_time_hours: f64,
    pub flight_time_formatted: String,

    pub trip_fuel_kg: f64,
    pub contingency_fuel_kg: f64,
    pub alternate_fuel_kg: f64,
    pub reserve_fuel_kg: f64,
    pub taxi_fuel_kg: f64,
    pub total_fuel_kg: f64,
    pub max_fuel_capacity_kg: f64,

    pub mtow_kg: f64,
    pub mlw_kg: f64,
    /// Rough operating empty weight, no payload
    pub estimated_oew_kg: f64,
    pub estimated_takeoff_weight_kg: f64,
    pub estimated_landing_weight_kg: f64,
    pub fuel_at_landing_kg: f64,

    pub fuel_fits_in_tanks: bool,
    pub under_mtow: bool,
    pub under_mlw: bool,
    pub within_range: bool,
    /// Set when an unrated type is planned on a long sector. Does not affect `safe_to_fly`.
    pub etops_advisory: Option<String>,
    pub safe_to_fly: bool,
}

/// Compute a fuel plan under the default [`FuelPolicy`].
pub fn compute_fuel_plan(
    catalog: &AircraftCatalog,
    aircraft_code: &str,
    distance_nm: f64,
    headwind_kt: f64,
    include_alternate: bool,
) -> Result<FuelPlan, PlanError> {
    compute_fuel_plan_with_policy(
        catalog,
        aircraft_code,
        distance_nm,
        headwind_kt,
        include_alternate,
        &FuelPolicy::default(),
    )
}

/// Compute a fuel plan under an explicit policy.
///
/// # Errors
/// * `AircraftNotFound` if the type does not resolve
/// * `InvalidInput` for a negative or non-finite distance or headwind
/// * `InvalidWind` if the headwind leaves no forward ground speed
pub fn compute_fuel_plan_with_policy(
    catalog: &AircraftCatalog,
    aircraft_code: &str,
    distance_nm: f64,
    headwind_kt: f64,
    include_alternate: bool,
    policy: &FuelPolicy,
) -> Result<FuelPlan, PlanError> {
    let aircraft = catalog.resolve(aircraft_code)?;

    if !distance_nm.is_finite() || distance_nm < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "distance must be a non-negative number of nautical miles, got {distance_nm}"
        )));
    }
    if !headwind_kt.is_finite() {
        return Err(PlanError::InvalidInput(format!(
            "headwind must be finite, got {headwind_kt}"
        )));
    }

    let effective_speed_kt = aircraft.cruise_speed_kt - headwind_kt;
    if effective_speed_kt <= 0.0 {
        return Err(PlanError::InvalidWind { effective_speed_kt });
    }

    let burn = aircraft.fuel_burn_kg_per_hr;
    let flight_time_hours = distance_nm / effective_speed_kt;
    let trip_fuel_kg = flight_time_hours * burn;
    let contingency_fuel_kg = trip_fuel_kg * policy.contingency_fraction;
    // Fixed-time alternate leg, independent of the actual alternate distance.
    let alternate_fuel_kg = if include_alternate {
        policy.alternate_minutes / 60.0 * burn
    } else {
        0.0
    };
    let reserve_fuel_kg = policy.final_reserve_minutes / 60.0 * burn;
    let taxi_fuel_kg = policy.taxi_fuel_kg;
    let total_fuel_kg =
        trip_fuel_kg + contingency_fuel_kg + alternate_fuel_kg + reserve_fuel_kg + taxi_fuel_kg;

    let estimated_oew_kg = aircraft.mtow_kg * policy.oew_fraction_of_mtow;
    let estimated_takeoff_weight_kg = estimated_oew_kg + total_fuel_kg;
    let fuel_at_landing_kg = total_fuel_kg - trip_fuel_kg - taxi_fuel_kg;
    let estimated_landing_weight_kg = estimated_oew_kg + fuel_at_landing_kg;

    let fuel_fits_in_tanks = total_fuel_kg <= aircraft.max_fuel_kg;
    let under_mtow = estimated_takeoff_weight_kg <= aircraft.mtow_kg;
    let under_mlw = estimated_landing_weight_kg <= aircraft.mlw_kg;
    let within_range = distance_nm <= aircraft.range_nm;

    let etops_advisory = (aircraft.etops_minutes.is_none()
        && distance_nm > policy.etops_advisory_distance_nm)
        .then(|| {
            format!(
                "{} is not ETOPS rated. Overwater flights over ~{:.0} nm may not be permitted.",
                aircraft.full_name, policy.etops_advisory_distance_nm
            )
        });

    let safe_to_fly = fuel_fits_in_tanks && under_mtow && under_mlw && within_range;

    debug!(
        aircraft = %aircraft.code,
        distance_nm,
        total_fuel_kg,
        safe_to_fly,
        "fuel plan computed"
    );

    Ok(FuelPlan {
        aircraft_code: aircraft.code.clone(),
        aircraft_name: aircraft.full_name.clone(),
        distance_nm,
        headwind_kt,
        effective_speed_kt,
        flight_time_hours,
        flight_time_formatted: format_hours(flight_time_hours),
        trip_fuel_kg,
        contingency_fuel_kg,
        alternate_fuel_kg,
        reserve_fuel_kg,
        taxi_fuel_kg,
        total_fuel_kg,
        max_fuel_capacity_kg: aircraft.max_fuel_kg,
        mtow_kg: aircraft.mtow_kg,
        mlw_kg: aircraft.mlw_kg,
        estimated_oew_kg,
        estimated_takeoff_weight_kg,
        estimated_landing_weight_kg,
        fuel_at_landing_kg,
        fuel_fits_in_tanks,
        under_mtow,
        under_mlw,
        within_range,
        etops_advisory,
        safe_to_fly,
    })
}
