//! Binary entry point for the NMEA 0183 eavesdropper.

use clap::Parser;
use nmea0183_eavesdropper::service::{self, cli::Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    service::init_tracing(cli.verbose);

    match service::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
