//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::transport::{Endpoint, Protocol};

/// NMEA 0183 eavesdropper.
///
/// Listens to a TCP or UDP stream carrying NMEA 0183 sentences and records
/// every complete sentence together with the time it arrived.
#[derive(Parser, Debug)]
#[command(name = "nmea0183-eavesdropper")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Echo every sentence to stdout and log at debug level.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to a stream and record the NMEA 0183 sentences it carries.
    ///
    /// Records are appended to a daily rotated file with `--standalone` and
    /// written to stdout otherwise.
    Gather(GatherArgs),
}

/// Arguments of the `gather` command.
#[derive(Args, Debug)]
pub struct GatherArgs {
    /// IP address (or host name, for TCP) of the stream.
    #[arg(short, long)]
    pub address: String,

    /// Port number to connect to, or to listen on with `--udp`.
    #[arg(short, long)]
    pub port: u16,

    /// Receive UDP datagrams instead of connecting over TCP.
    #[arg(long)]
    pub udp: bool,

    /// Dump records to the daily rotated log at `--path` instead of writing
    /// them to stdout.
    #[arg(long)]
    pub standalone: bool,

    /// Base path of the daily log; the date is appended to the file stem.
    #[arg(long, env = "NMEA0183_DUMP_PATH", default_value = "NMEA0183/sentences.txt")]
    pub path: PathBuf,

    /// Drop buffered bytes once this many arrive without a delimiter.
    #[arg(long)]
    pub max_remainder: Option<usize>,
}

impl GatherArgs {
    /// The endpoint described by these arguments.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            address: self.address.clone(),
            port: self.port,
            protocol: if self.udp { Protocol::Udp } else { Protocol::Tcp },
        }
    }
}
