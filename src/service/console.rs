//! Line-oriented sink for stdout (or any other writer).

use std::io::{self, Stdout, Write};

use time::OffsetDateTime;

use crate::{Sentence, Sink};

/// What a [`Console`] writes per sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `<unix-micros> <sentence>`
    Record,
    /// The bare sentence.
    Sentence,
}

/// Writes one line per sentence and flushes after each.
#[derive(Debug)]
pub struct Console<W = Stdout> {
    writer: W,
    format: Format,
}

impl Console<Stdout> {
    /// Timestamped records on stdout.
    pub fn records() -> Self {
        Console::new(io::stdout(), Format::Record)
    }

    /// Bare sentences on stdout.
    pub fn sentences() -> Self {
        Console::new(io::stdout(), Format::Sentence)
    }
}

impl<W: Write> Console<W> {
    /// Writes to `writer` in the given format.
    pub fn new(writer: W, format: Format) -> Self {
        Console { writer, format }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink<OffsetDateTime> for Console<W> {
    type Error = io::Error;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &OffsetDateTime) -> io::Result<()> {
        match self.format {
            Format::Record => super::write_record(&mut self.writer, sentence, timestamp)?,
            Format::Sentence => {
                self.writer.write_all(sentence.as_bytes())?;
                self.writer.write_all(b"\n")?;
            }
        }

        self.writer.flush()
    }
}
