//! # Error Types
//!
//! This module defines the error returned by
//! [`SentenceAssembler::feed`](crate::SentenceAssembler::feed).
//!
//! Malformed records are not errors: a record that does not start with `$` or
//! `!` is dropped silently, because non-NMEA noise on a shared stream is
//! routine.

use thiserror::Error;

/// Represents everything that can make a `feed` call fail.
///
/// `E` is the error type of the sink the assembler forwards sentences to.
#[derive(Debug, Error, PartialEq)]
pub enum Error<E> {
    /// The sink failed to take a sentence.
    ///
    /// Contains the sink's own error, unchanged. Records framed before the
    /// failing sentence have been delivered; bytes after it stay buffered and
    /// are framed by the next `feed`.
    #[error("sink failed to accept a sentence")]
    Sink(#[source] E),

    /// The carry-over buffer outgrew its configured limit.
    ///
    /// Only returned under [`OverflowPolicy::Error`](crate::OverflowPolicy::Error).
    /// The buffered bytes have been discarded.
    #[error("carry-over buffer reached {buffered} bytes without a delimiter (limit is {limit})")]
    RemainderOverflow {
        /// Bytes held when the limit was checked
        buffered: usize,
        /// The configured limit
        limit: usize,
    },
}
