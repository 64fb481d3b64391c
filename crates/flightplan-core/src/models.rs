//! Core data models for the flight planning system.

use crate::error::PlanError;
use crate::spatial::{haversine_distance_nm, initial_bearing};
use serde::{Deserialize, Serialize};

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in nautical miles.
    pub fn distance_nm(&self, other: GeoPoint) -> f64 {
        haversine_distance_nm(self.lat, self.lon, other.lat, other.lon)
    }

    /// Initial bearing toward another point in degrees.
    pub fn bearing_to(&self, other: GeoPoint) -> f64 {
        initial_bearing(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Performance record for an aircraft type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftRecord {
    /// Canonical type code, e.g. "B777-300ER"
    pub code: String,
    pub manufacturer: String,
    pub full_name: String,
    /// Maximum takeoff weight
    pub mtow_kg: f64,
    /// Maximum landing weight
    pub mlw_kg: f64,
    pub max_fuel_kg: f64,
    /// Cruise fuel burn per hour
    pub fuel_burn_kg_per_hr: f64,
    /// Typical cruise true airspeed in knots
    pub cruise_speed_kt: f64,
    pub range_nm: f64,
    /// Certified diversion time; `None` means ETOPS rules do not apply
    #[serde(default)]
    pub etops_minutes: Option<u32>,
    pub typical_passengers: u32,
}

/// An airport identified by its ICAO code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub icao: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl AirportRecord {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Classification of restricted airspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneType {
    Prohibited,
    Restricted,
    Danger,
    Warning,
}

/// Severity attached to a restricted zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// A circular block of restricted airspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictedZone {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub center_lat: f64,
    pub center_lon: f64,
    pub radius_nm: f64,
    /// Upper limit in feet; `None` applies at all altitudes
    #[serde(default)]
    pub altitude_ceiling_ft: Option<f64>,
    pub severity: Severity,
    pub description: String,
    pub country: String,
}

impl RestrictedZone {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lon)
    }

    /// Whether the zone applies at the given altitude.
    pub fn applies_at(&self, altitude_ft: f64) -> bool {
        self.altitude_ceiling_ft
            .map_or(true, |ceiling| altitude_ft <= ceiling)
    }
}

/// Airport curated as suitable for ETOPS diversions.
///
/// Coordinates come from the airport table; entries whose ICAO code is not in
/// that table are ignored by the ETOPS checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversionAirport {
    pub icao: String,
    pub name: String,
    pub country: String,
}

/// A published navigation fix or navaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFix {
    pub ident: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub region: String,
}

impl NamedFix {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    Airport,
    /// Labelled with a nearby named fix
    Fix,
    /// Numbered placeholder label
    #[default]
    Generated,
}

/// A point along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// 0 = origin, N+1 = destination
    pub number: u32,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub distance_from_origin_nm: f64,
    /// Bearing toward the destination (final bearing at the destination itself)
    pub bearing_deg: f64,
    #[serde(default)]
    pub kind: WaypointKind,
}

impl Waypoint {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Parse caller-supplied waypoints from a JSON array.
    ///
    /// Only `lat` and `lon` are required. A missing `number` defaults to the
    /// array index and a missing `name` to `WPT{index}`.
    pub fn list_from_json(json: &str) -> Result<Vec<Waypoint>, PlanError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| PlanError::InvalidInput(format!("waypoints are not valid JSON: {e}")))?;
        let items = value
            .as_array()
            .ok_or_else(|| PlanError::InvalidInput("waypoints must be a JSON array".into()))?;

        let mut waypoints = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let coord = |key: &str| {
                item.get(key)
                    .and_then(serde_json::Value::as_f64)
                    .ok_or_else(|| PlanError::InvalidWaypoint {
                        index,
                        reason: format!("missing or non-numeric '{key}'"),
                    })
            };
            let lat = coord("lat")?;
            let lon = coord("lon")?;

            let number = item
                .get("number")
                .and_then(serde_json::Value::as_u64)
                .map(|n| n as u32)
                .unwrap_or(index as u32);
            let name = item
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("WPT{index}"));

            waypoints.push(Waypoint {
                number,
                lat,
                lon,
                name,
                distance_from_origin_nm: item
                    .get("distance_from_origin_nm")
                    .and_then(serde_json::Value::as_f64)
                    .unwrap_or(0.0),
                bearing_deg: item
                    .get("bearing_deg")
                    .and_then(serde_json::Value::as_f64)
                    .unwrap_or(0.0),
                kind: WaypointKind::Generated,
            });
        }

        validate_waypoints(&waypoints)?;
        Ok(waypoints)
    }
}

/// Structural validation of a waypoint sequence.
///
/// Rejects non-finite or out-of-range coordinates.
pub fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), PlanError> {
    for (index, wp) in waypoints.iter().enumerate() {
        validate_point(index, wp.location())?;
    }
    Ok(())
}

/// Validate one position, reporting failures against `index`.
pub fn validate_point(index: usize, point: GeoPoint) -> Result<(), PlanError> {
    let reason = if !point.lat.is_finite() || !point.lon.is_finite() {
        "coordinates must be finite".to_string()
    } else if point.lat.abs() > 90.0 {
        format!("latitude {} outside [-90, 90]", point.lat)
    } else if point.lon.abs() > 180.0 {
        format!("longitude {} outside [-180, 180]", point.lon)
    } else {
        return Ok(());
    };
    Err(PlanError::InvalidWaypoint { index, reason })
}
