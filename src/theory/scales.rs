use core::fmt;

use crate::error::Result;
use crate::theory::pitch_class::{pitch_class, transpose};

/// A scale generator: given a key, it produces the ascending pitch-class
/// sequence of one octave, root included at both ends.
///
/// `calculate_form` accepts any implementation, so callers can bring their
/// own modes beyond the built-in [`Scale`] catalog.
pub trait ScaleProvider {
    fn name(&self) -> &str;

    /// Ascending spellings, root to root inclusive. The wraparound root at
    /// the end duplicates the first element an octave up.
    fn ascending(&self, key: &str) -> Result<Vec<String>>;
}

/// The built-in scale catalog: the seven diatonic modes, both pentatonics,
/// and the two altered minors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    HarmonicMinor,
    MelodicMinor,
}

impl Scale {
    pub const ALL: [Scale; 11] = [
        Scale::Ionian,
        Scale::Dorian,
        Scale::Phrygian,
        Scale::Lydian,
        Scale::Mixolydian,
        Scale::Aeolian,
        Scale::Locrian,
        Scale::MajorPentatonic,
        Scale::MinorPentatonic,
        Scale::HarmonicMinor,
        Scale::MelodicMinor,
    ];

    /// Semitone offsets from the root, one octave, root first.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Scale::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Scale::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Scale::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Scale::MajorPentatonic => &[0, 2, 4, 7, 9],
            Scale::MinorPentatonic => &[0, 3, 5, 7, 10],
            Scale::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Scale::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
        }
    }
}

impl ScaleProvider for Scale {
    fn name(&self) -> &str {
        match self {
            Scale::Ionian => "Ionian",
            Scale::Dorian => "Dorian",
            Scale::Phrygian => "Phrygian",
            Scale::Lydian => "Lydian",
            Scale::Mixolydian => "Mixolydian",
            Scale::Aeolian => "Aeolian",
            Scale::Locrian => "Locrian",
            Scale::MajorPentatonic => "MajorPentatonic",
            Scale::MinorPentatonic => "MinorPentatonic",
            Scale::HarmonicMinor => "HarmonicMinor",
            Scale::MelodicMinor => "MelodicMinor",
        }
    }

    fn ascending(&self, key: &str) -> Result<Vec<String>> {
        // Validate the key up front so an unknown name fails here rather
        // than in the middle of a fretboard walk.
        pitch_class(key)?;
        let mut names: Vec<String> = self
            .intervals()
            .iter()
            .map(|&step| transpose(key, i32::from(step)).map(str::to_string))
            .collect::<Result<_>>()?;
        names.push(transpose(key, 0)?.to_string());
        Ok(names)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
