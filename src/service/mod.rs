//! # Eavesdropping Service
//!
//! Process-level plumbing around the
//! [`SentenceAssembler`](crate::SentenceAssembler): the TCP and UDP transports
//! that produce timestamped chunks, the sinks that write assembled sentences to
//! a daily-rotated log or to stdout, and the command line of the
//! `nmea0183-eavesdropper` binary.
//!
//! Sentences are written as records of the form `<unix-micros> <sentence>`.

use std::io::{self, Write};

use anyhow::Context;
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{Sentence, SentenceAssemblerBuilder, Sink, sink::Tee};

pub mod cli;
pub mod console;
pub mod daily_log;
mod error;
pub mod transport;

pub use error::ServiceError;

use cli::{Cli, Commands, GatherArgs};
use console::Console;
use daily_log::DailyLog;

type RecordSink = Box<dyn Sink<OffsetDateTime, Error = io::Error>>;

/// Installs the global `tracing` subscriber.
///
/// Diagnostics go to stderr so stdout stays a clean record stream. `RUST_LOG`
/// takes precedence over the level picked from `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the command selected on the command line.
///
/// Only returns once the stream fails; a healthy stream is gathered forever.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Gather(args) => gather(args, cli.verbose),
    }
}

fn gather(args: &GatherArgs, verbose: bool) -> anyhow::Result<()> {
    let endpoint = args.endpoint();

    let records: RecordSink = if args.standalone {
        Box::new(DailyLog::open(&args.path)?)
    } else {
        Box::new(Console::records())
    };
    // Records already land on stdout outside standalone mode.
    let echo = (verbose && args.standalone).then(Console::sentences);

    let mut builder = SentenceAssemblerBuilder::new();
    if let Some(limit) = args.max_remainder {
        builder = builder.max_remainder(limit);
    }
    let mut assembler = builder.build(Tee::new(records, echo));

    info!(%endpoint, "gathering NMEA 0183 sentences");

    transport::pump(&endpoint, &mut assembler)
        .with_context(|| format!("stopped gathering from {endpoint}"))
}

/// Microseconds since the Unix epoch.
pub fn unix_micros(timestamp: &OffsetDateTime) -> i128 {
    timestamp.unix_timestamp_nanos() / 1_000
}

/// Writes `<unix-micros> <sentence>\n`, copying the sentence bytes verbatim.
pub(crate) fn write_record<W: Write>(
    writer: &mut W,
    sentence: Sentence<'_>,
    timestamp: &OffsetDateTime,
) -> io::Result<()> {
    write!(writer, "{} ", unix_micros(timestamp))?;
    writer.write_all(sentence.as_bytes())?;
    writer.write_all(b"\n")
}
