//! Note name parsing — converts "A4", "C#3", "Bb2", "A♯4" to pitch numbers.

use crate::error::{NoteError, NoteResult};
use crate::pitch::{Pitch, PitchClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accidental {
    Sharp,
    Flat,
}

/// Parse a note name string into a pitch number.
///
/// Format: `<letter><optional accidental><octave>`
/// - Letter: A-G, either case
/// - Accidental: `#`/`♯` (sharp) or `b`/`B`/`♭` (flat)
/// - Octave: optional `-` then one or more digits (C4 = 60, A4 = 69, C-1 = 0)
///
/// Flats resolve through the enharmonic table; a flat with no entry there
/// (Cb, Fb) is read as the sharp of the same letter. Spellings with no
/// canonical class (E#, B#) are rejected.
pub fn parse_note(name: &str) -> NoteResult<i64> {
    parse_pitch(name).map(Pitch::number)
}

/// Same as [`parse_note`], returning the typed [`Pitch`].
pub fn parse_pitch(name: &str) -> NoteResult<Pitch> {
    let bad = || NoteError::invalid(name);

    let normalized = name.replace('♯', "#").replace('♭', "b");
    let chars: Vec<char> = normalized.chars().collect();

    let letter = match chars.first().map(char::to_ascii_uppercase) {
        Some(c @ 'A'..='G') => c,
        _ => return Err(bad()),
    };

    let mut i = 1;
    let accidental = match chars.get(i) {
        Some('#') => {
            i += 1;
            Some(Accidental::Sharp)
        }
        Some('b' | 'B') => {
            i += 1;
            Some(Accidental::Flat)
        }
        _ => None,
    };

    // Rest should be the octave number (possibly negative)
    let octave_str: String = chars[i..].iter().collect();
    let octave = parse_octave(&octave_str).ok_or_else(bad)?;

    let spelling = match accidental {
        None => letter.to_string(),
        Some(Accidental::Sharp) => format!("{letter}#"),
        Some(Accidental::Flat) => PitchClass::sharp_for_flat(&format!("{letter}B"))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{letter}#")),
    };

    let class = PitchClass::from_name(&spelling).ok_or_else(bad)?;
    Pitch::from_parts(class, octave).ok_or_else(bad)
}

fn parse_octave(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
