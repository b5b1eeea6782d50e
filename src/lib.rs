//! notefreq — equal-tempered pitch name / frequency conversion (A4 = 440 Hz).

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod note;
pub mod pitch;

pub use convert::{convert, Conversion, Query};
pub use error::{NoteError, NoteResult};
pub use note::{parse_note, parse_pitch};
pub use pitch::{freq_to_pitch, pitch_to_freq, pitch_to_name, Pitch, PitchClass};
