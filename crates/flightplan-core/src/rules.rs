//! Planning constants and fuel policy.
//!
//! Several values here are deliberate simplifications kept so that computed
//! plans stay numerically stable: the alternate leg is a fixed time rather than
//! a distance, and operating empty weight is a fixed fraction of MTOW.

use serde::{Deserialize, Serialize};

/// Fuel reserve policy applied by the fuel planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPolicy {
    /// Contingency as a fraction of trip fuel
    pub contingency_fraction: f64,
    /// Alternate leg, flown at cruise burn
    pub alternate_minutes: f64,
    /// Final reserve, flown at cruise burn
    pub final_reserve_minutes: f64,
    pub taxi_fuel_kg: f64,
    /// Operating empty weight estimated as this fraction of MTOW
    pub oew_fraction_of_mtow: f64,
    /// Unrated aircraft get an advisory beyond this distance
    pub etops_advisory_distance_nm: f64,
}

impl Default for FuelPolicy {
    fn default() -> Self {
        Self {
            contingency_fraction: 0.05,
            alternate_minutes: 45.0,
            final_reserve_minutes: 30.0,
            taxi_fuel_kg: 200.0,
            oew_fraction_of_mtow: 0.50,
            etops_advisory_distance_nm: 1000.0,
        }
    }
}

/// Defaults used when a caller leaves a planning parameter unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDefaults {
    /// Intermediate waypoints generated by the route builder
    pub waypoint_count: usize,
    pub max_waypoint_count: usize,
    /// Lateral margin around restricted zones
    pub airspace_buffer_nm: f64,
    pub cruise_altitude_ft: f64,
    /// Furthest a named fix may be from a generated point and still label it
    pub fix_tolerance_nm: f64,
    /// Compliant ETOPS waypoints echoed back in a compliance result
    pub sample_diversions: usize,
    /// Radius around the route midpoint searched for diversion airports
    pub diversion_search_radius_nm: f64,
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            waypoint_count: 5,
            max_waypoint_count: 100,
            airspace_buffer_nm: 50.0,
            cruise_altitude_ft: 35_000.0,
            fix_tolerance_nm: 150.0,
            sample_diversions: 3,
            diversion_search_radius_nm: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = FuelPolicy::default();
        assert_eq!(policy.contingency_fraction, 0.05);
        assert_eq!(policy.alternate_minutes, 45.0);
        assert_eq!(policy.final_reserve_minutes, 30.0);
        assert_eq!(policy.taxi_fuel_kg, 200.0);
    }

    #[test]
    fn policy_round_trips_through_json() {
        let json = r#"{
            "contingency_fraction": 0.03,
            "alternate_minutes": 30.0,
            "final_reserve_minutes": 30.0,
            "taxi_fuel_kg": 150.0,
            "oew_fraction_of_mtow": 0.5,
            "etops_advisory_distance_nm": 1000.0
        }"#;
        let policy: FuelPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.contingency_fraction, 0.03);
        assert_eq!(policy.taxi_fuel_kg, 150.0);
    }
}
