use std::convert::Infallible;

use crate::{Sentence, Sink};

pub const GGA: &str = "$GNGGA,122144.75,5741.1528,N,01153.1746,E,4,-1,,3.29,M,35.78,M,,*4D\r\n";
pub const GSV: &str =
    "$GBGSV,12,12,07,422,39,272,46,07,427,23,114,46,07,428,27,057,45,,,,,*45\r\n";
pub const VDM: &str = "!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26\r\n";

/// Strips the `\r\n` every fixture ends with.
pub fn stripped(sentence: &str) -> &str {
    sentence.trim_end_matches("\r\n")
}

/// Keeps every sentence with its timestamp.
#[derive(Debug, Default)]
pub struct Recorder<T> {
    pub sentences: Vec<(String, T)>,
}

impl<T> Recorder<T> {
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|(s, _)| s.as_str()).collect()
    }
}

impl<T: Clone> Sink<T> for Recorder<T> {
    type Error = Infallible;

    fn accept(&mut self, sentence: Sentence<'_>, timestamp: &T) -> Result<(), Self::Error> {
        self.sentences
            .push((sentence.to_string(), timestamp.clone()));
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub struct Rejected(pub String);

/// Records sentences but refuses any containing `needle`.
#[derive(Debug)]
pub struct Refusing {
    pub needle: &'static str,
    pub accepted: Vec<String>,
}

impl Refusing {
    pub fn new(needle: &'static str) -> Self {
        Refusing {
            needle,
            accepted: Vec::new(),
        }
    }
}

impl Sink<u64> for Refusing {
    type Error = Rejected;

    fn accept(&mut self, sentence: Sentence<'_>, _: &u64) -> Result<(), Self::Error> {
        let text = sentence.to_string();
        if text.contains(self.needle) {
            return Err(Rejected(text));
        }

        self.accepted.push(text);
        Ok(())
    }
}
