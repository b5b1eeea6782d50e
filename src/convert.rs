//! Value dispatch — decides whether an input is a frequency or a note name
//! and produces the single line of output for it.

use std::fmt;

use tracing::debug;

use crate::error::{NoteError, NoteResult};
use crate::note::parse_pitch;
use crate::pitch::{freq_to_pitch, Pitch};

/// How an input value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query<'a> {
    /// A finite, strictly positive number of hertz.
    Frequency(f64),
    /// Anything else; handed to the note parser.
    NoteName(&'a str),
}

impl<'a> Query<'a> {
    /// Classify an already-trimmed input. Numbers that are not usable as a
    /// frequency (zero, negative, NaN, infinite) fall through to `NoteName`.
    pub fn classify(input: &'a str) -> Self {
        match parse_number(input) {
            Some(freq) if freq.is_finite() && freq > 0.0 => Self::Frequency(freq),
            _ => Self::NoteName(input),
        }
    }
}

/// Parse a float, allowing single `_` separators between digits (`4_40`).
fn parse_number(input: &str) -> Option<f64> {
    if !input.contains('_') {
        return input.parse().ok();
    }
    let bytes = input.as_bytes();
    let separators_ok = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit())
        });
    if !separators_ok {
        return None;
    }
    input.replace('_', "").parse().ok()
}

/// Result of converting one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Frequency → nearest note and deviation.
    Note { pitch: Pitch, cents: f64 },
    /// Note name → equal-tempered frequency.
    Frequency { pitch: Pitch, hz: f64 },
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note { pitch, cents } => write!(f, "{pitch} ({cents:+.2} cents)"),
            Self::Frequency { hz, .. } => write!(f, "{hz:.2} Hz"),
        }
    }
}

/// Convert a raw input value. Surrounding whitespace is ignored.
pub fn convert(input: &str) -> NoteResult<Conversion> {
    match Query::classify(input.trim()) {
        Query::Frequency(freq) => {
            let (number, cents) = freq_to_pitch(freq);
            debug!(freq, number, cents, "frequency query");
            Ok(Conversion::Note {
                pitch: Pitch(number),
                cents,
            })
        }
        Query::NoteName(name) => {
            let pitch = parse_pitch(name)?;
            let hz = pitch.freq();
            debug!(name, number = pitch.number(), hz, "note query");
            if !hz.is_finite() {
                return Err(NoteError::invalid(name));
            }
            Ok(Conversion::Frequency { pitch, hz })
        }
    }
}
