use std::{borrow::Cow, fmt, str::Utf8Error};

use crate::framing::{lead, trim_trailing};

/// A validated NMEA 0183 sentence borrowed from the assembler's buffer.
///
/// A `Sentence` has had its delimiter and trailing whitespace removed and is
/// guaranteed to start with `$` or `!`. It lives only as long as the sink call
/// that receives it; copy it out (e.g. with [`Sentence::to_string_lossy`] or
/// [`Sentence::as_bytes`]) to keep it.
///
/// # Examples
///
/// ```rust
/// use nmea0183_eavesdropper::Sentence;
///
/// let sentence = Sentence::frame(b"$GPBBB,2*00\r").unwrap();
/// assert_eq!(sentence, "$GPBBB,2*00");
/// assert_eq!(sentence.lead(), '$');
///
/// assert!(Sentence::frame(b"GPBBB,2*00\r").is_none());
/// assert!(Sentence::frame(b"").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sentence<'a> {
    bytes: &'a [u8],
}

impl<'a> Sentence<'a> {
    /// Trims a delimiter-stripped record and accepts it if it starts with a
    /// lead character.
    ///
    /// Returns [`None`] for anything else, including empty records.
    pub fn frame(segment: &'a [u8]) -> Option<Self> {
        let bytes = trim_trailing(segment);
        lead::<nom::error::Error<&[u8]>>(bytes).ok()?;

        Some(Sentence { bytes })
    }

    /// The raw bytes of the sentence.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The sentence as text, if it is valid UTF-8.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.bytes)
    }

    /// The sentence as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Length in bytes, delimiter and trailing whitespace excluded.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: a sentence holds at least its lead character.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The lead character, `$` or `!`.
    pub fn lead(&self) -> char {
        // non-empty by construction
        char::from(self.bytes[0])
    }

    /// Whether this is an encapsulated (`!`-led) sentence.
    pub fn is_encapsulated(&self) -> bool {
        self.lead() == '!'
    }
}

impl fmt::Display for Sentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl AsRef<[u8]> for Sentence<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<str> for Sentence<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for Sentence<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Sentence<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}
