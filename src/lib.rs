//! # NMEA 0183 Eavesdropper
//!
//! This library reassembles NMEA 0183 sentences from a byte stream that arrives
//! in arbitrary pieces (TCP reads, UDP datagrams) and hands each complete
//! sentence, paired with an arrival timestamp, to a sink.
//!
//! Framing works on the shape `$HHH,D1,D2,...,Dn*CC\r\n` (or `!`-led
//! encapsulated sentences) without looking inside it:
//! - Records are delimited by `\n`
//! - Trailing whitespace (`\r`, spaces, tabs) is trimmed
//! - Records that do not start with `$` or `!` are dropped silently
//! - Bytes after the last delimiter are carried over to the next chunk
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_eavesdropper::{SentenceAssembler, sink};
//!
//! fn main() {
//!     let mut assembler = SentenceAssembler::new(sink::from_fn(|sentence, at: &u32| {
//!         println!("{at} {sentence}");
//!         Ok::<_, std::convert::Infallible>(())
//!     }));
//!
//!     // The second sentence is completed by the next chunk.
//!     assembler.feed(b"$GPGGA,123456,data*41\r\n$GPG", 1u32).unwrap();
//!     assembler.feed(b"LL,data*00\r\n", 2u32).unwrap();
//! }
//! ```
//!
//! With the `service` feature (on by default) the crate also ships the
//! transports, sinks and command line of the `nmea0183-eavesdropper` binary.

mod assembler;
pub mod error;
pub mod framing;
mod sentence;
pub mod sink;

#[cfg(feature = "service")]
pub mod service;

pub use assembler::*;
pub use error::Error;
pub use sentence::Sentence;
pub use sink::Sink;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
