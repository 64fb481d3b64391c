//! Wind triangle and per-leg timing of a route.

use crate::error::PlanError;
use crate::models::Waypoint;
use crate::spatial::{format_hours, haversine_distance_nm, initial_bearing};
use serde::{Deserialize, Serialize};

/// Wind direction (blowing from) and speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub from_deg: f64,
    pub speed_kt: f64,
}

impl Default for Wind {
    /// Calm, nominally westerly.
    fn default() -> Self {
        Self {
            from_deg: 270.0,
            speed_kt: 0.0,
        }
    }
}

/// Solution of the wind triangle for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindCorrection {
    /// Positive means crab to the right of course
    pub wind_correction_angle_deg: f64,
    pub heading_deg: f64,
    pub ground_speed_kt: f64,
    /// Negative for a tailwind
    pub headwind_component_kt: f64,
    /// Positive when the wind comes from the right
    pub crosswind_component_kt: f64,
}

/// Solve the wind triangle.
///
/// # Arguments
/// * `tas_kt` - True airspeed
/// * `course_deg` - Desired track over the ground
/// * `wind_from_deg`, `wind_speed_kt` - Wind, direction it blows from
pub fn wind_correction(
    tas_kt: f64,
    course_deg: f64,
    wind_from_deg: f64,
    wind_speed_kt: f64,
) -> Result<WindCorrection, PlanError> {
    if !tas_kt.is_finite() || tas_kt <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "true airspeed must be positive, got {tas_kt}"
        )));
    }
    if !wind_speed_kt.is_finite() || wind_speed_kt < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "wind speed must be non-negative, got {wind_speed_kt}"
        )));
    }
    if !course_deg.is_finite() || !wind_from_deg.is_finite() {
        return Err(PlanError::InvalidInput("directions must be finite".into()));
    }

    let relative = (wind_from_deg - course_deg).to_radians();
    let headwind = wind_speed_kt * relative.cos();
    let crosswind = wind_speed_kt * relative.sin();

    if crosswind.abs() > tas_kt {
        return Err(PlanError::InvalidInput(format!(
            "crosswind of {crosswind:.1} kt exceeds true airspeed {tas_kt} kt"
        )));
    }

    let wca = (crosswind / tas_kt).asin();
    let ground_speed_kt = tas_kt * wca.cos() - headwind;
    if ground_speed_kt <= 0.0 {
        return Err(PlanError::InvalidWind {
            effective_speed_kt: ground_speed_kt,
        });
    }

    let wca_deg = wca.to_degrees();
    Ok(WindCorrection {
        wind_correction_angle_deg: wca_deg,
        heading_deg: (course_deg + wca_deg).rem_euclid(360.0),
        ground_speed_kt,
        headwind_component_kt: headwind,
        crosswind_component_kt: crosswind,
    })
}

/// Timing for one leg between consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegTiming {
    pub from: String,
    pub to: String,
    pub course_deg: f64,
    pub distance_nm: f64,
    pub wind_correction_angle_deg: f64,
    pub ground_speed_kt: f64,
    pub leg_time_hours: f64,
    pub cumulative_time_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTiming {
    pub tas_kt: f64,
    pub wind: Wind,
    pub legs: Vec<LegTiming>,
    pub total_distance_nm: f64,
    pub total_time_hours: f64,
    pub total_time_formatted: String,
    pub average_ground_speed_kt: f64,
}

/// Time a waypoint sequence flown at `tas_kt` through a uniform wind.
///
/// The same wind applies to every leg.
pub fn time_route(waypoints: &[Waypoint], tas_kt: f64, wind: Wind) -> Result<RouteTiming, PlanError> {
    if waypoints.len() < 2 {
        return Err(PlanError::InvalidInput(
            "a route needs at least two waypoints".into(),
        ));
    }

    let mut legs = Vec::with_capacity(waypoints.len() - 1);
    let mut total_time_hours = 0.0;
    let mut total_distance_nm = 0.0;

    for pair in waypoints.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let course_deg = initial_bearing(a.lat, a.lon, b.lat, b.lon);
        let distance_nm = haversine_distance_nm(a.lat, a.lon, b.lat, b.lon);
        let correction = wind_correction(tas_kt, course_deg, wind.from_deg, wind.speed_kt)?;

        let leg_time_hours = distance_nm / correction.ground_speed_kt;
        total_time_hours += leg_time_hours;
        total_distance_nm += distance_nm;

        legs.push(LegTiming {
            from: a.name.clone(),
            to: b.name.clone(),
            course_deg,
            distance_nm,
            wind_correction_angle_deg: correction.wind_correction_angle_deg,
            ground_speed_kt: correction.ground_speed_kt,
            leg_time_hours,
            cumulative_time_hours: total_time_hours,
        });
    }

    let average_ground_speed_kt = if total_time_hours > 0.0 {
        total_distance_nm / total_time_hours
    } else {
        0.0
    };

    Ok(RouteTiming {
        tas_kt,
        wind,
        legs,
        total_distance_nm,
        total_time_hours,
        total_time_formatted: format_hours(total_time_hours),
        average_ground_speed_kt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WaypointKind;

    fn wp(number: u32, lat: f64, lon: f64) -> Waypoint {
        Waypoint {
            number,
            lat,
            lon,
            name: format!("P{number}"),
            distance_from_origin_nm: 0.0,
            bearing_deg: 0.0,
            kind: WaypointKind::Generated,
        }
    }

    #[test]
    fn test_direct_headwind_and_tailwind() {
        let head = wind_correction(450.0, 90.0, 90.0, 50.0).unwrap();
        assert!((head.ground_speed_kt - 400.0).abs() < 1e-9);
        assert!(head.wind_correction_angle_deg.abs() < 1e-9);

        let tail = wind_correction(450.0, 90.0, 270.0, 50.0).unwrap();
        assert!((tail.ground_speed_kt - 500.0).abs() < 1e-9);
        assert!((tail.headwind_component_kt + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_crosswind_correction() {
        // Flying east with a northerly wind: crab left, lose a little speed.
        let c = wind_correction(300.0, 90.0, 0.0, 30.0).unwrap();
        assert!((c.crosswind_component_kt + 30.0).abs() < 1e-9);
        assert!((c.wind_correction_angle_deg - (-0.1f64).asin().to_degrees()).abs() < 1e-9);
        assert!((c.heading_deg - 84.26).abs() < 0.01);
        assert!((c.ground_speed_kt - 298.496).abs() < 0.001);
    }

    #[test]
    fn crosswind_stronger_than_airspeed() {
        let err = wind_correction(300.0, 90.0, 0.0, 400.0).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn headwind_equal_to_airspeed() {
        let err = wind_correction(300.0, 90.0, 90.0, 300.0).unwrap_err();
        assert_eq!(err, PlanError::InvalidWind { effective_speed_kt: 0.0 });
    }

    #[test]
    fn calm_route_timing_matches_distance() {
        let waypoints = [wp(0, 0.0, 0.0), wp(1, 0.0, 5.0), wp(2, 0.0, 10.0)];
        let timing = time_route(&waypoints, 500.0, Wind::default()).unwrap();
        assert_eq!(timing.legs.len(), 2);
        assert!((timing.average_ground_speed_kt - 500.0).abs() < 1e-9);
        assert!((timing.total_time_hours - timing.total_distance_nm / 500.0).abs() < 1e-9);
        assert_eq!(timing.legs[1].cumulative_time_hours, timing.total_time_hours);
        assert_eq!(timing.legs[0].from, "P0");
    }

    #[test]
    fn single_waypoint_rejected() {
        let err = time_route(&[wp(0, 0.0, 0.0)], 500.0, Wind::default()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }
}
