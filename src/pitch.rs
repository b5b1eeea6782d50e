//! Pitch numbers, pitch classes and equal-tempered frequencies.
//!
//! Pitch numbers follow the MIDI convention: one step per semitone, twelve per
//! octave, anchored so that 69 = A4 = 440 Hz. Any `i64` is a valid pitch number,
//! including negative ones below C-1.

use std::fmt;

/// Reference frequency in Hz.
pub const REFERENCE_FREQ: f64 = 440.0;

/// Pitch number of the reference frequency (A4).
pub const REFERENCE_PITCH: i64 = 69;

pub const SEMITONES_PER_OCTAVE: i64 = 12;

/// Canonical class names, sharps only, starting from C.
pub const CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and the sharp they stand for. Cb and Fb are absent.
pub const ENHARMONIC_FLATS: [(&str, &str); 5] = [
    ("DB", "C#"),
    ("EB", "D#"),
    ("GB", "F#"),
    ("AB", "G#"),
    ("BB", "A#"),
];

/// One of the 12 semitone classes within an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Look up a canonical (sharp) spelling such as `"C#"`.
    pub fn from_name(name: &str) -> Option<Self> {
        CLASS_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Self(i as u8))
    }

    /// Resolve an upper-cased flat key such as `"DB"` to its sharp spelling.
    pub fn sharp_for_flat(key: &str) -> Option<&'static str> {
        ENHARMONIC_FLATS
            .iter()
            .find(|(flat, _)| *flat == key)
            .map(|&(_, sharp)| sharp)
    }

    /// Class of an arbitrary pitch number (floor modulo, so negatives wrap).
    pub fn of(pitch: i64) -> Self {
        Self(pitch.rem_euclid(SEMITONES_PER_OCTAVE) as u8)
    }

    /// Position in the canonical sequence, 0-11.
    pub fn index(self) -> i64 {
        i64::from(self.0)
    }

    pub fn name(self) -> &'static str {
        CLASS_NAMES[self.0 as usize]
    }
}

/// An absolute pitch number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(pub i64);

impl Pitch {
    /// Build a pitch from its class and octave. Returns `None` on overflow.
    pub fn from_parts(class: PitchClass, octave: i64) -> Option<Self> {
        octave
            .checked_add(1)?
            .checked_mul(SEMITONES_PER_OCTAVE)?
            .checked_add(class.index())
            .map(Self)
    }

    pub fn number(self) -> i64 {
        self.0
    }

    pub fn class(self) -> PitchClass {
        PitchClass::of(self.0)
    }

    /// Octave number, floor-divided so that pitch 0 sits in octave -1.
    pub fn octave(self) -> i64 {
        self.0.div_euclid(SEMITONES_PER_OCTAVE) - 1
    }

    pub fn freq(self) -> f64 {
        pitch_to_freq(self.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class().name(), self.octave())
    }
}

/// Equal-tempered frequency of a pitch number.
pub fn pitch_to_freq(pitch: i64) -> f64 {
    let offset = pitch as f64 - REFERENCE_PITCH as f64;
    REFERENCE_FREQ * (offset / SEMITONES_PER_OCTAVE as f64).exp2()
}

/// Continuous (fractional) pitch value of a frequency.
pub fn continuous_pitch(freq: f64) -> f64 {
    SEMITONES_PER_OCTAVE as f64 * (freq / REFERENCE_FREQ).log2() + REFERENCE_PITCH as f64
}

/// Nearest pitch number and the deviation from it in cents.
///
/// Ties at exactly half a semitone round to the even pitch number, so cents
/// stay within [-50, 50]. The caller guarantees `freq` is finite and positive.
pub fn freq_to_pitch(freq: f64) -> (i64, f64) {
    nearest_pitch(continuous_pitch(freq))
}

/// Split a continuous pitch value into the nearest pitch number and cents.
pub fn nearest_pitch(exact: f64) -> (i64, f64) {
    let nearest = exact.round_ties_even();
    (nearest as i64, (exact - nearest) * 100.0)
}

/// Canonical name of a pitch number, e.g. `"A4"`, `"C#3"`, `"A-1"`.
pub fn pitch_to_name(pitch: i64) -> String {
    Pitch(pitch).to_string()
}
