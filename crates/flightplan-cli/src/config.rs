//! CLI configuration from environment.
//!
//! Command-line flags override these values; these override the built-in
//! planning defaults.

use flightplan_core::{CatalogError, FixTable, FlightData, PlanningDefaults};
use std::borrow::Cow;
use std::env;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Intermediate waypoints per built route
    pub waypoint_count: usize,
    pub cruise_altitude_ft: f64,
    /// Width of the "near restricted" ring around each zone
    pub buffer_nm: f64,
    /// JSON table file layered over the built-in tables
    pub data_path: Option<PathBuf>,
    /// OurAirports navaids CSV replacing the built-in fixes
    pub navaids_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = PlanningDefaults::default();
        Self {
            waypoint_count: defaults.waypoint_count,
            cruise_altitude_ft: defaults.cruise_altitude_ft,
            buffer_nm: defaults.airspace_buffer_nm,
            data_path: None,
            navaids_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Unparsable values fall back to the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            waypoint_count: lookup("FLIGHTPLAN_WAYPOINTS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.waypoint_count),
            cruise_altitude_ft: lookup("FLIGHTPLAN_ALTITUDE_FT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.cruise_altitude_ft),
            buffer_nm: lookup("FLIGHTPLAN_BUFFER_NM")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.buffer_nm),
            data_path: lookup("FLIGHTPLAN_DATA")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            navaids_path: lookup("FLIGHTPLAN_NAVAIDS")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Apply table paths given on the command line.
    pub fn with_paths(mut self, data: Option<PathBuf>, navaids: Option<PathBuf>) -> Self {
        if data.is_some() {
            self.data_path = data;
        }
        if navaids.is_some() {
            self.navaids_path = navaids;
        }
        self
    }

    /// Load the table set this configuration points at.
    ///
    /// Borrows the built-in tables when no file is configured.
    pub fn load_data(&self) -> Result<Cow<'static, FlightData>, CatalogError> {
        if self.data_path.is_none() && self.navaids_path.is_none() {
            return Ok(Cow::Borrowed(FlightData::builtin()));
        }

        let mut data = match &self.data_path {
            Some(path) => {
                info!(path = %path.display(), "loading table file");
                FlightData::from_json_file(path)?
            }
            None => FlightData::builtin().clone(),
        };
        if let Some(path) = &self.navaids_path {
            info!(path = %path.display(), "loading navaids");
            data = data.with_fixes(FixTable::from_navaids_csv(path)?);
        }
        Ok(Cow::Owned(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.waypoint_count, 5);
        assert_eq!(config.cruise_altitude_ft, 35_000.0);
        assert_eq!(config.buffer_nm, 50.0);
    }

    #[test]
    fn test_env_values_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTPLAN_WAYPOINTS", "12"),
            ("FLIGHTPLAN_ALTITUDE_FT", " 41000 "),
            ("FLIGHTPLAN_BUFFER_NM", "25.5"),
            ("FLIGHTPLAN_DATA", "/tmp/tables.json"),
        ]));
        assert_eq!(config.waypoint_count, 12);
        assert_eq!(config.cruise_altitude_ft, 41_000.0);
        assert_eq!(config.buffer_nm, 25.5);
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/tables.json")));
        assert!(config.navaids_path.is_none());
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTPLAN_WAYPOINTS", "many"),
            ("FLIGHTPLAN_NAVAIDS", "  "),
        ]));
        assert_eq!(config.waypoint_count, 5);
        assert!(config.navaids_path.is_none());
    }

    #[test]
    fn flags_override_env_paths() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTPLAN_DATA", "env.json"),
            ("FLIGHTPLAN_NAVAIDS", "env.csv"),
        ]))
        .with_paths(Some(PathBuf::from("flag.json")), None);
        assert_eq!(config.data_path, Some(PathBuf::from("flag.json")));
        assert_eq!(config.navaids_path, Some(PathBuf::from("env.csv")));
    }

    #[test]
    fn builtin_tables_are_borrowed() {
        let data = Config::default().load_data().unwrap();
        assert!(matches!(data, Cow::Borrowed(_)));
    }

    #[test]
    fn missing_table_file_is_an_error() {
        let config = Config {
            data_path: Some(PathBuf::from("/nonexistent/flightplan-tables.json")),
            ..Config::default()
        };
        assert!(matches!(config.load_data(), Err(CatalogError::Io(_))));
    }
}
