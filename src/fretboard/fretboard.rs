use core::fmt;

use crate::error::{Error, Result};
use crate::fretboard::note::Note;
use crate::theory::pitch_class::{is_enharmonic, note_name, pitch_class, SEMITONES};

pub const STANDARD_TUNING: &str = "EADGBE";

/// One physical string: an immutable table of the notes at every fret.
#[derive(Debug, Clone)]
pub struct GuitarString {
    pub index: u8,
    pub open_note: String,
    notes: Vec<Note>,
}

impl GuitarString {
    /// Fret positions per string, the open string included.
    pub const FRETS: u8 = 23;

    pub fn new(index: u8, open_note: &str) -> Result<Self> {
        let open = pitch_class(open_note).map_err(|_| Error::InvalidTuning {
            name: open_note.to_string(),
        })?;
        let notes = (0..Self::FRETS)
            .map(|fret| Note::new(index, fret, note_name((open + fret) % SEMITONES)))
            .collect();
        Ok(GuitarString {
            index,
            open_note: open_note.to_string(),
            notes,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note_at(&self, fret: u8) -> Result<&Note> {
        self.notes
            .get(usize::from(fret))
            .ok_or(Error::OutOfRange { fret })
    }

    /// Every note on this string whose pitch class matches any of the given
    /// names, in ascending fret order.
    pub fn notes_matching<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| names.iter().any(|n| is_enharmonic(&note.name, n.as_ref())))
            .collect()
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.open_note)
    }
}

/// The six strings of a fretted instrument.
///
/// Tunings are written lowest-pitched string first ("EADGBE"), while string
/// indices count from the highest-pitched string, so `strings[0]` is string 1
/// (high E in standard tuning) and `strings[5]` is string 6 (low E).
#[derive(Debug, Clone)]
pub struct Fretboard {
    pub strings: Vec<GuitarString>,
}

impl Fretboard {
    pub const STRING_COUNT: usize = 6;

    pub fn new(tuning: &str) -> Result<Self> {
        let names = split_tuning(tuning)?;
        if names.len() != Self::STRING_COUNT {
            return Err(Error::InvalidTuning {
                name: tuning.to_string(),
            });
        }
        let strings = names
            .iter()
            .rev()
            .enumerate()
            .map(|(i, name)| GuitarString::new(i as u8 + 1, name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Fretboard { strings })
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_TUNING).expect("standard tuning is valid")
    }

    pub fn string(&self, index: u8) -> Result<&GuitarString> {
        if index == 0 {
            return Err(Error::NoSuchString { index });
        }
        self.strings
            .get(usize::from(index) - 1)
            .ok_or(Error::NoSuchString { index })
    }

    /// Matching notes across all strings, low-pitched strings first.
    pub fn notes_matching<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Note> {
        self.strings
            .iter()
            .rev()
            .flat_map(|string| string.notes_matching(names))
            .collect()
    }

    /// The tuning as written, lowest-pitched string first.
    pub fn tuning(&self) -> String {
        self.strings
            .iter()
            .rev()
            .map(|s| s.open_note.as_str())
            .collect()
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

/// Split a compact tuning string ("EADGBE", "DADGAD", "EbAbDbGbBbEb") into
/// per-string note names. Note letters are uppercase; a lowercase 'b' is a
/// flat on the preceding letter.
fn split_tuning(tuning: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for c in tuning.chars() {
        match c {
            'A'..='G' => names.push(c.to_string()),
            '#' | '♯' | 'b' | '♭' => match names.last_mut() {
                Some(last) => last.push(c),
                None => {
                    return Err(Error::InvalidTuning {
                        name: tuning.to_string(),
                    })
                }
            },
            _ => {
                return Err(Error::InvalidTuning {
                    name: tuning.to_string(),
                })
            }
        }
    }
    Ok(names)
}
