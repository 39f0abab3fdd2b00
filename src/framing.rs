//! # Sentence Framing
//!
//! This module provides the byte-level primitives used to cut an NMEA 0183 byte
//! stream into records: a record parser that splits on the `\n` delimiter, a
//! lead-character check for the two legal sentence markers (`$` and `!`), and
//! a right-trim for the trailing whitespace that accompanies the delimiter.
//!
//! The parsers operate on raw bytes. Nothing here interprets the payload, so
//! non-ASCII bytes travel through unchanged.

use std::iter::FusedIterator;

use nom::{
    Parser,
    bytes::complete::{tag, take_until},
    character::complete::one_of,
    combinator::peek,
    error::ParseError,
    sequence::terminated,
};

/// The record delimiter (`0x0A`).
pub const DELIMITER: u8 = b'\n';

/// Characters a sentence may start with.
///
/// `$` opens standard talker sentences, `!` opens encapsulated sentences
/// (AIS and friends).
pub const LEAD_CHARACTERS: &str = "$!";

/// Bytes removed from the end of every record.
pub const TRAILING_WHITESPACE: &[u8] = b" \r\n\t";

/// Parses one delimiter-terminated record.
///
/// Consumes everything up to and including the first `\n` and returns the
/// bytes before the delimiter. Fails when the input holds no delimiter, in
/// which case the whole input is still an incomplete record.
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::framing::record;
/// use nom::IResult;
///
/// let result: IResult<_, _> = record(b"$GPAAA,1*00\r\n$GPB");
/// assert_eq!(result, Ok((&b"$GPB"[..], &b"$GPAAA,1*00\r"[..])));
///
/// let result: IResult<_, _> = record(b"$GPB");
/// assert!(result.is_err());
/// ```
pub fn record<'a, E>(i: &'a [u8]) -> nom::IResult<&'a [u8], &'a [u8], E>
where
    E: ParseError<&'a [u8]>,
{
    terminated(take_until("\n"), tag("\n")).parse(i)
}

/// Checks that the input starts with one of the [`LEAD_CHARACTERS`].
///
/// The lead character is returned but not consumed.
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::framing::lead;
/// use nom::IResult;
///
/// let result: IResult<_, _> = lead(b"!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26");
/// assert_eq!(result.map(|(_, c)| c), Ok('!'));
///
/// let result: IResult<_, _> = lead(b"GPGGA");
/// assert!(result.is_err());
/// ```
pub fn lead<'a, E>(i: &'a [u8]) -> nom::IResult<&'a [u8], char, E>
where
    E: ParseError<&'a [u8]>,
{
    peek(one_of(LEAD_CHARACTERS)).parse(i)
}

/// Strips [`TRAILING_WHITESPACE`] from the right end of a record.
///
/// Leading bytes are never touched.
///
/// ```rust
/// use nmea0183_eavesdropper::framing::trim_trailing;
///
/// assert_eq!(trim_trailing(b"$GPAAA,1*00 \t\r"), b"$GPAAA,1*00");
/// assert_eq!(trim_trailing(b" \r\n"), b"");
/// ```
pub fn trim_trailing(segment: &[u8]) -> &[u8] {
    match segment
        .iter()
        .rposition(|byte| !TRAILING_WHITESPACE.contains(byte))
    {
        Some(last) => &segment[..=last],
        None => &[],
    }
}

/// Iterator over the complete records of a buffer.
///
/// Yields the bytes between delimiters, left to right. Whatever follows the
/// final delimiter is never yielded; [`Records::rest`] exposes it and
/// [`Records::consumed`] reports where it starts.
///
/// ```rust
/// use nmea0183_eavesdropper::framing::Records;
///
/// let mut records = Records::new(b"one\ntwo\nthr");
/// assert_eq!(records.next(), Some(&b"one"[..]));
/// assert_eq!(records.next(), Some(&b"two"[..]));
/// assert_eq!(records.next(), None);
/// assert_eq!(records.rest(), b"thr");
/// assert_eq!(records.consumed(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a [u8],
    consumed: usize,
}

impl<'a> Records<'a> {
    /// Starts iterating over the records of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Records {
            rest: buffer,
            consumed: 0,
        }
    }

    /// Number of bytes, delimiters included, taken by the records yielded so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The bytes not yet yielded as part of a record.
    pub fn rest(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (rest, segment) = record::<nom::error::Error<&[u8]>>(self.rest).ok()?;

        self.consumed += self.rest.len() - rest.len();
        self.rest = rest;

        Some(segment)
    }
}

impl FusedIterator for Records<'_> {}
