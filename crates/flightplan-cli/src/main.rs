//! Flightplan - flight plan computation from the command line.

use anyhow::Result;
use clap::Parser;
use flightplan_cli::{commands, Cli, Config};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "flightplan=info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_paths(cli.data.clone(), cli.navaids.clone());
    tracing::debug!(?config, "configuration resolved");

    let outcome = config
        .load_data()
        .map_err(anyhow::Error::from)
        .and_then(|data| commands::run(&cli.command, &data, &config));

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            println!("{}", serde_json::to_string_pretty(&commands::error_payload(&err))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
