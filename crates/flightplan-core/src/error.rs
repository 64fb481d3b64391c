//! Error types for planning operations and table loading.

use serde::Serialize;
use std::fmt;

/// Which end of a route a failed lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSide {
    Origin,
    Destination,
}

impl fmt::Display for RouteSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSide::Origin => f.write_str("Origin"),
            RouteSide::Destination => f.write_str("Destination"),
        }
    }
}

/// Failure of a planning operation.
///
/// Every variant is a deterministic function of the inputs; retrying the
/// same call reproduces the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("Aircraft '{0}' not found in database")]
    AircraftNotFound(String),

    #[error("{side} airport '{code}' not found in database")]
    AirportNotFound { side: RouteSide, code: String },

    #[error("Airport '{0}' not found in database")]
    UnknownAirport(String),

    #[error("Headwind too strong: effective ground speed would be {effective_speed_kt} kt")]
    InvalidWind { effective_speed_kt: f64 },

    #[error("Degenerate route: {0}")]
    DegenerateRoute(String),

    #[error("Invalid waypoint at index {index}: {reason}")]
    InvalidWaypoint { index: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PlanError {
    /// Stable machine-readable error kind for JSON payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::AircraftNotFound(_)
            | PlanError::AirportNotFound { .. }
            | PlanError::UnknownAirport(_) => "not_found",
            PlanError::InvalidWind { .. } => "invalid_wind",
            PlanError::DegenerateRoute(_) => "degenerate_route",
            PlanError::InvalidWaypoint { .. } => "invalid_waypoint",
            PlanError::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Failure while building or loading a table set.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read navaids CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Duplicate {table} code: {code}")]
    DuplicateCode { table: &'static str, code: String },

    #[error("Alias '{alias}' points at unknown {table} code '{code}'")]
    DanglingAlias {
        table: &'static str,
        alias: String,
        code: String,
    },
}
