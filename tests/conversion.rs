//! End-to-end conversions through the public dispatcher.

use notefreq::{convert, parse_note, NoteError};

fn line(input: &str) -> String {
    convert(input).unwrap().to_string()
}

#[test]
fn note_names_to_hz() {
    assert_eq!(line("A4"), "440.00 Hz");
    assert_eq!(line("a4"), "440.00 Hz");
    assert_eq!(line("A#4"), "466.16 Hz");
    assert_eq!(line("A♯4"), "466.16 Hz");
    assert_eq!(line("Bb2"), "116.54 Hz");
    assert_eq!(line("C4"), "261.63 Hz");
    assert_eq!(line("A-1"), "13.75 Hz");
}

#[test]
fn frequencies_to_notes() {
    assert_eq!(line("445"), "A4 (+19.56 cents)");
    assert_eq!(line("440"), "A4 (+0.00 cents)");
    assert_eq!(line("880.0"), "A5 (+0.00 cents)");
    assert!(line("329.63").starts_with("E4 ("));
}

#[test]
fn low_frequency_names_negative_octave() {
    assert!(line("8.175798915643707").starts_with("C-1 ("));
}

#[test]
fn flat_fallback_quirk() {
    assert_eq!(line("Cb4"), line("C#4"));
    assert_eq!(parse_note("Cb4"), Ok(61));
}

#[test]
fn malformed_input_names_the_input() {
    for input in ["Z9", "H4", "-5", "0", "A4 extra", "", "C"] {
        let err = convert(input).unwrap_err();
        assert_eq!(err, NoteError::invalid(input.trim()));
        assert!(err.to_string().contains(input.trim()));
    }
}
