//! # NMEA 0183 Sentence Assembler
//!
//! This module turns an unbounded sequence of arbitrarily chunked byte buffers,
//! as delivered by a TCP stream or by discrete UDP datagrams, into a sequence
//! of validated sentences, each paired with the timestamp of the chunk that
//! completed it.
//!
//! Bytes that are not yet terminated by `\n` are carried over to the next call,
//! so a sentence split across any number of chunks is emitted exactly once.

use tracing::warn;

use crate::{
    Error, Sentence, Sink,
    framing::{DELIMITER, Records},
};

/// Defines what happens when the carry-over buffer outgrows its limit.
///
/// The limit is only enforced when one has been set with
/// [`SentenceAssemblerBuilder::max_remainder`]. In both cases the incomplete
/// bytes are dropped; the tail of the dropped sentence is discarded later by
/// the lead-character check once its delimiter arrives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OverflowPolicy {
    #[default]
    /// Drop the buffered bytes, log a warning and carry on.
    Discard,

    /// Drop the buffered bytes and fail the `feed` call with
    /// [`Error::RemainderOverflow`].
    Error,
}

/// Configures a [`SentenceAssembler`] before it is built.
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::{Error, OverflowPolicy, SentenceAssemblerBuilder, sink};
///
/// let mut assembler = SentenceAssemblerBuilder::new()
///     .max_remainder(16)
///     .overflow_policy(OverflowPolicy::Error)
///     .build(sink::from_fn(|_, _: &u64| Ok::<_, std::convert::Infallible>(())));
///
/// let result = assembler.feed(b"$GPGGA,no delimiter in sight", 0u64);
/// assert_eq!(
///     result,
///     Err(Error::RemainderOverflow { buffered: 28, limit: 16 })
/// );
/// assert!(assembler.remainder().is_empty());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceAssemblerBuilder {
    /// Largest carry-over buffer tolerated, if any.
    max_remainder: Option<usize>,

    /// What to do once the limit is exceeded.
    overflow_policy: OverflowPolicy,
}

impl SentenceAssemblerBuilder {
    /// Creates a builder with default settings.
    ///
    /// The default settings are:
    /// - No limit on the carry-over buffer
    /// - Overflow policy: [`OverflowPolicy::Discard`]
    pub fn new() -> Self {
        SentenceAssemblerBuilder {
            max_remainder: None,
            overflow_policy: OverflowPolicy::Discard,
        }
    }

    /// Bounds the carry-over buffer to `limit` bytes.
    ///
    /// The limit is checked after each chunk has been framed, so it caps the
    /// length of a sentence the assembler can still deliver. Complete records
    /// held back by a failing sink do not count towards it.
    pub fn max_remainder(mut self, limit: usize) -> Self {
        self.max_remainder = Some(limit);
        self
    }

    /// Sets what happens once the carry-over buffer outgrows its limit.
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Builds an assembler delivering to `sink`.
    pub fn build<S>(self, sink: S) -> SentenceAssembler<S> {
        SentenceAssembler {
            sink,
            buffer: Vec::new(),
            pending: 0,
            max_remainder: self.max_remainder,
            overflow_policy: self.overflow_policy,
        }
    }
}

/// Reassembles NMEA 0183 sentences from a chunked byte stream.
///
/// One assembler frames one stream: the carry-over buffer belongs to the
/// stream that filled it, so never feed two unrelated streams through the same
/// instance. `feed` takes `&mut self`; callers delivering chunks from several
/// threads must serialize them themselves.
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::{SentenceAssembler, sink};
///
/// let mut sentences = Vec::new();
/// let mut assembler = SentenceAssembler::new(sink::from_fn(|sentence, at: &u64| {
///     sentences.push((sentence.to_string(), *at));
///     Ok::<_, std::convert::Infallible>(())
/// }));
///
/// assembler.feed(b"$GPAAA,1*00\r\n$GPB", 1u64).unwrap();
/// assert_eq!(assembler.remainder(), b"$GPB");
///
/// assembler.feed(b"BB,2*00\r\n", 2u64).unwrap();
/// assert!(assembler.remainder().is_empty());
///
/// drop(assembler);
/// assert_eq!(
///     sentences,
///     [("$GPAAA,1*00".to_string(), 1), ("$GPBBB,2*00".to_string(), 2)]
/// );
/// ```
#[derive(Debug)]
pub struct SentenceAssembler<S> {
    sink: S,
    buffer: Vec<u8>,
    /// Length of the prefix of `buffer` holding complete records a failing
    /// sink has not seen yet. Zero unless the last `emit` failed.
    pending: usize,
    max_remainder: Option<usize>,
    overflow_policy: OverflowPolicy,
}

impl SentenceAssembler<()> {
    /// Starts configuring an assembler.
    ///
    /// The sink, and with it the assembler's type, is picked by
    /// [`SentenceAssemblerBuilder::build`].
    pub fn builder() -> SentenceAssemblerBuilder {
        SentenceAssemblerBuilder::new()
    }
}

impl<S> SentenceAssembler<S> {
    /// Creates an assembler with an unbounded carry-over buffer.
    pub fn new(sink: S) -> Self {
        SentenceAssemblerBuilder::new().build(sink)
    }

    /// Frames one chunk.
    ///
    /// The chunk is appended to the bytes carried over from earlier calls and
    /// the result is split on `\n`. Every complete record is right-trimmed and,
    /// if it starts with `$` or `!`, handed to the sink together with
    /// `timestamp`. Other records are dropped without a trace. Whatever follows
    /// the last delimiter is carried over to the next call.
    ///
    /// A sentence is stamped with the timestamp of the chunk holding its
    /// delimiter, not of the chunk holding its first byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] as soon as the sink fails, and
    /// [`Error::RemainderOverflow`] when the carry-over buffer outgrows a limit
    /// configured with [`OverflowPolicy::Error`].
    ///
    /// The limit is enforced even when the sink fails; the sink's error is the
    /// one returned.
    pub fn feed<T>(
        &mut self,
        chunk: &[u8],
        timestamp: T,
    ) -> Result<(), Error<<S as Sink<T>>::Error>>
    where
        S: Sink<T>,
    {
        self.buffer.extend_from_slice(chunk);

        // Without pending records the carry-over holds no delimiter, and only
        // the new bytes can complete a record.
        let emitted = if self.pending > 0 || chunk.contains(&DELIMITER) {
            self.emit(&timestamp)
        } else {
            Ok(())
        };
        let limited = self.enforce_limit();

        emitted.and(limited)
    }

    /// Bytes received but not yet terminated by a delimiter.
    ///
    /// Never contains the delimiter. Complete records left unread by a failing
    /// sink are held apart and framed by the next `feed`.
    pub fn remainder(&self) -> &[u8] {
        &self.buffer[self.pending..]
    }

    /// Drops the carried-over bytes and any records left unread by a failing
    /// sink, e.g. after the stream reconnects.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pending = 0;
    }

    /// The sink sentences are delivered to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the assembler, discarding any carried-over bytes.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit<T>(&mut self, timestamp: &T) -> Result<(), Error<<S as Sink<T>>::Error>>
    where
        S: Sink<T>,
    {
        let Self {
            sink,
            buffer,
            pending,
            ..
        } = self;

        let mut records = Records::new(buffer.as_slice());
        let mut outcome = Ok(());

        for segment in records.by_ref() {
            let Some(sentence) = Sentence::frame(segment) else {
                continue;
            };

            if let Err(e) = sink.accept(sentence, timestamp) {
                outcome = Err(Error::Sink(e));
                break;
            }
        }

        let consumed = records.consumed();
        buffer.drain(..consumed);
        *pending = match outcome {
            Ok(()) => 0,
            Err(_) => buffer
                .iter()
                .rposition(|&byte| byte == DELIMITER)
                .map_or(0, |last| last + 1),
        };

        outcome
    }

    fn enforce_limit<E>(&mut self) -> Result<(), Error<E>> {
        let Some(limit) = self.max_remainder else {
            return Ok(());
        };

        let buffered = self.remainder().len();
        if buffered <= limit {
            return Ok(());
        }

        self.buffer.truncate(self.pending);

        match self.overflow_policy {
            OverflowPolicy::Discard => {
                warn!(buffered, limit, "discarded carry-over buffer without a delimiter");
                Ok(())
            }
            OverflowPolicy::Error => Err(Error::RemainderOverflow { buffered, limit }),
        }
    }
}
