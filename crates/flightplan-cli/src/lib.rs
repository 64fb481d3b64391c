//! Flightplan CLI - command line front-end for the planning core.
//!
//! The `flightplan` binary parses [`cli::Cli`], loads tables per
//! [`config::Config`] and prints the JSON produced by [`commands::run`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod report;

pub use cli::{Cli, Command, RouteArgs};
pub use commands::{error_payload, run};
pub use config::Config;
pub use report::{PlanReport, PlanRequest};
