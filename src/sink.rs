//! # Sentence Sinks
//!
//! A [`Sink`] receives every sentence the assembler frames, together with the
//! timestamp of the chunk whose delimiter completed it. Sinks run synchronously
//! inside [`SentenceAssembler::feed`](crate::SentenceAssembler::feed), so a slow
//! sink slows down consumption of the stream feeding it.
//!
//! Besides implementing the trait directly, closures can be adapted with
//! [`from_fn`], and two sinks can be chained with [`Tee`].

use std::fmt;

use crate::Sentence;

/// Receiver of assembled sentences.
///
/// `T` is the timestamp type the transport attaches to each chunk. It is
/// passed through untouched.
pub trait Sink<T> {
    /// The error returned when the sink fails to take a sentence.
    ///
    /// It propagates out of `feed` wrapped in [`Error::Sink`](crate::Error::Sink).
    type Error;

    /// Takes one sentence.
    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error>;
}

impl<T, S> Sink<T> for &mut S
where
    S: Sink<T> + ?Sized,
{
    type Error = S::Error;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        (**self).accept(sentence, timestamp)
    }
}

impl<T, S> Sink<T> for Box<S>
where
    S: Sink<T> + ?Sized,
{
    type Error = S::Error;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        (**self).accept(sentence, timestamp)
    }
}

/// An absent sink drops every sentence.
impl<T, S> Sink<T> for Option<S>
where
    S: Sink<T>,
{
    type Error = S::Error;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        match self {
            Some(sink) => sink.accept(sentence, timestamp),
            None => Ok(()),
        }
    }
}

/// Adapts a closure into a [`Sink`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::{SentenceAssembler, sink};
///
/// let mut count = 0;
/// let mut assembler = SentenceAssembler::new(sink::from_fn(|_, _: &()| {
///     count += 1;
///     Ok::<_, std::convert::Infallible>(())
/// }));
///
/// assembler.feed(b"$GPAAA,1*00\r\n!AIVDM,2*00\r\n", ()).unwrap();
/// drop(assembler);
///
/// assert_eq!(count, 2);
/// ```
pub fn from_fn<T, E, F>(f: F) -> FnSink<F>
where
    F: FnMut(Sentence<'_>, &T) -> Result<(), E>,
{
    FnSink(f)
}

/// A [`Sink`] backed by a closure. Created by [`from_fn`].
pub struct FnSink<F>(F);

impl<T, E, F> Sink<T> for FnSink<F>
where
    F: FnMut(Sentence<'_>, &T) -> Result<(), E>,
{
    type Error = E;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        (self.0)(sentence, timestamp)
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

/// Forwards every sentence to two sinks, first then second.
///
/// If the first sink fails, the second one does not see that sentence.
#[derive(Debug, Clone)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tee<A, B> {
    /// Chains `first` and `second`.
    pub fn new(first: A, second: B) -> Self {
        Tee { first, second }
    }

    /// Returns both sinks.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T, A, B, E> Sink<T> for Tee<A, B>
where
    A: Sink<T, Error = E>,
    B: Sink<T, Error = E>,
{
    type Error = E;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        self.first.accept(sentence, timestamp)?;
        self.second.accept(sentence, timestamp)
    }
}
