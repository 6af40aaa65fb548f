//! Pitch-class arithmetic over the twelve-tone octave.
//!
//! Note names are a letter A..G followed by any number of accidentals.
//! Both ASCII (`#`, `b`) and unicode (`♯`, `♭`) accidentals are accepted.

use crate::error::{Error, Result};

pub const SEMITONES: u8 = 12;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name into its pitch class (0..=11, C = 0).
pub fn pitch_class(name: &str) -> Result<u8> {
    let invalid = || Error::InvalidTuning {
        name: name.to_string(),
    };
    let mut chars = name.trim().chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(invalid()),
    };
    let mut accidental: i32 = 0;
    for c in chars {
        match c {
            '#' | '♯' => accidental += 1,
            'b' | '♭' => accidental -= 1,
            _ => return Err(invalid()),
        }
    }
    Ok((base + accidental).rem_euclid(i32::from(SEMITONES)) as u8)
}

/// The canonical (sharp) spelling of a pitch class.
pub fn note_name(pc: u8) -> &'static str {
    SHARP_NAMES[usize::from(pc % SEMITONES)]
}

pub fn is_valid_note(name: &str) -> bool {
    pitch_class(name).is_ok()
}

/// Whether two spellings name the same pitch class, e.g. "C#" and "Db".
/// Unparseable names never match anything.
pub fn is_enharmonic(a: &str, b: &str) -> bool {
    match (pitch_class(a), pitch_class(b)) {
        (Ok(pa), Ok(pb)) => pa == pb,
        _ => false,
    }
}

/// The canonical spelling of `name` shifted by `semitones`.
pub fn transpose(name: &str, semitones: i32) -> Result<&'static str> {
    let pc = pitch_class(name)?;
    let shifted = (i32::from(pc) + semitones).rem_euclid(i32::from(SEMITONES));
    Ok(note_name(shifted as u8))
}
