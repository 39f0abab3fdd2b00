//! # Daily Sentence Log
//!
//! A sink that appends `<unix-micros> <sentence>` records to a file that
//! rotates at midnight UTC. For a configured path `NMEA0183/sentences.txt`
//! the record for a sentence completed on 2026-10-19 lands in
//! `NMEA0183/sentences_2026-10-19.txt`.
//!
//! Every record is flushed as soon as it is written, so a crash loses at most
//! the sentence being written.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use time::{Date, OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::{Sentence, Sink, service::ServiceError};

/// Rotating sentence log.
#[derive(Debug)]
pub struct DailyLog {
    base: PathBuf,
    current: Option<(Date, BufWriter<File>)>,
}

impl DailyLog {
    /// Prepares a log rooted at `base`, creating its parent directory.
    ///
    /// The first file is opened when the first sentence arrives.
    pub fn open(base: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let base = base.into();

        if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ServiceError::OpenLog {
                path: base.clone(),
                source,
            })?;
        }

        Ok(DailyLog {
            base,
            current: None,
        })
    }

    /// The file holding records for `date`.
    pub fn path_for(&self, date: Date) -> PathBuf {
        dated_path(&self.base, date)
    }

    fn writer_for(&mut self, date: Date) -> io::Result<&mut BufWriter<File>> {
        let current = match self.current.take() {
            Some((open_date, writer)) if open_date == date => (open_date, writer),
            _ => {
                let path = self.path_for(date);
                let file = OpenOptions::new().create(true).append(true).open(&path)?;
                debug!(path = %path.display(), "opened sentence log");

                (date, BufWriter::new(file))
            }
        };

        Ok(&mut self.current.insert(current).1)
    }
}

impl Sink<OffsetDateTime> for DailyLog {
    type Error = io::Error;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &OffsetDateTime) -> io::Result<()> {
        let date = timestamp.to_offset(UtcOffset::UTC).date();
        let writer = self.writer_for(date)?;

        super::write_record(writer, sentence, timestamp)?;
        writer.flush()
    }
}

fn dated_path(base: &Path, date: Date) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!(
        "{stem}_{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    );
    if let Some(extension) = base.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }

    base.with_file_name(name)
}
