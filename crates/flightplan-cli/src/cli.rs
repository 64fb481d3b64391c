//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use flightplan_core::Region;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flightplan", author, version, about = "Flight plan computation", long_about = None)]
pub struct Cli {
    /// JSON table file layered over the built-in tables
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// OurAirports navaids CSV used for waypoint names
    #[arg(long, global = true)]
    pub navaids: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up an aircraft type, or list every type
    Aircraft { query: Option<String> },

    /// Look up an airport by ICAO or IATA code
    Airport { code: String },

    /// List airports, optionally within one region
    Airports {
        #[arg(long)]
        region: Option<Region>,
    },

    /// Great-circle distance between two airports
    Distance { origin: String, destination: String },

    /// Build a great-circle route
    Route {
        origin: String,
        destination: String,
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Fuel requirements for a sector
    Fuel {
        aircraft: String,

        /// Sector length in nautical miles
        #[arg(long, required_unless_present = "route")]
        distance: Option<f64>,

        /// Take the sector length from an airport pair
        #[arg(long, num_args = 2, value_names = ["ORIGIN", "DEST"], conflicts_with = "distance")]
        route: Option<Vec<String>>,

        /// Average headwind component in knots, negative for a tailwind
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        headwind: f64,

        #[arg(long)]
        no_alternate: bool,
    },

    /// Check a route against restricted airspace
    Airspace {
        origin: String,
        destination: String,
        #[arg(long)]
        altitude: Option<f64>,
        #[arg(long)]
        buffer: Option<f64>,
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Check a route against the type's ETOPS diversion time
    Etops {
        aircraft: String,
        origin: String,
        destination: String,
        /// Override the type's cruise speed in knots
        #[arg(long)]
        cruise_speed: Option<f64>,
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Per-leg timing of a route through a uniform wind
    Wind {
        origin: String,
        destination: String,
        /// True airspeed in knots
        #[arg(long)]
        tas: f64,
        /// Direction the wind blows from, degrees true
        #[arg(long, default_value_t = 270.0)]
        wind_from: f64,
        #[arg(long, default_value_t = 0.0)]
        wind_speed: f64,
        #[command(flatten)]
        route: RouteArgs,
    },

    /// Restricted zones and named fixes near a position
    Nearby {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value_t = 200.0)]
        radius: f64,
    },

    /// Full plan: route, fuel, airspace and ETOPS
    Plan {
        aircraft: String,
        origin: String,
        destination: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        headwind: f64,
        #[arg(long)]
        no_alternate: bool,
        #[arg(long)]
        altitude: Option<f64>,
        #[command(flatten)]
        route: RouteArgs,
    },
}

/// Route construction flags shared by several subcommands.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RouteArgs {
    /// Intermediate waypoints
    #[arg(long)]
    pub waypoints: Option<usize>,

    /// Label waypoints with nearby named fixes
    #[arg(long)]
    pub named: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_by_route() {
        let cli = Cli::try_parse_from([
            "flightplan", "fuel", "B777", "--route", "KLAX", "EGLL", "--headwind", "-20",
        ])
        .unwrap();
        match cli.command {
            Command::Fuel { route, headwind, distance, no_alternate, .. } => {
                assert_eq!(route, Some(vec!["KLAX".to_string(), "EGLL".to_string()]));
                assert_eq!(headwind, -20.0);
                assert!(distance.is_none());
                assert!(!no_alternate);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn fuel_needs_distance_or_route() {
        assert!(Cli::try_parse_from(["flightplan", "fuel", "A320"]).is_err());
        assert!(Cli::try_parse_from([
            "flightplan", "fuel", "A320", "--distance", "500", "--route", "KJFK", "KBOS",
        ])
        .is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "flightplan", "route", "JFK", "LHR", "--waypoints", "8", "--named", "--navaids", "navaids.csv",
        ])
        .unwrap();
        assert_eq!(cli.navaids, Some(PathBuf::from("navaids.csv")));
        assert_eq!(
            cli.command,
            Command::Route {
                origin: "JFK".into(),
                destination: "LHR".into(),
                route: RouteArgs { waypoints: Some(8), named: true },
            }
        );
    }

    #[test]
    fn region_parsed_loosely() {
        let cli = Cli::try_parse_from(["flightplan", "airports", "--region", "north-america"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Airports { region: Some(Region::NorthAmerica) }
        );
    }
}
