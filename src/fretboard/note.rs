use core::fmt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::theory::pitch_class::is_enharmonic;

/// A single fretboard position with its resolved pitch-class spelling.
///
/// String numbering: string 1 is the highest-pitched string, string 6 the
/// lowest. The ordering below follows physical position, not pitch: notes
/// on the low strings sort first, then ascending fret within a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub string: u8,
    pub fret: u8,
    pub name: String,
    /// Performance effect passed through from the tab source. Opaque to this
    /// crate and ignored by equality, ordering and hashing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<serde_json::Value>,
}

impl Note {
    pub fn new(string: u8, fret: u8, name: impl Into<String>) -> Self {
        Note {
            string,
            fret,
            name: name.into(),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: serde_json::Value) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Whether this note's spelling names the given pitch class.
    pub fn is_enharmonic(&self, name: &str) -> bool {
        is_enharmonic(&self.name, name)
    }

    /// The other fret on the same string carrying the same pitch class,
    /// twelve frets away. Notes in the upper half of the fretboard map down,
    /// the rest map up.
    pub fn octave_partner(&self) -> Note {
        let fret = if self.fret >= 12 {
            self.fret - 12
        } else {
            self.fret + 12
        };
        Note::new(self.string, fret, self.name.clone())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Note> {
        Ok(serde_json::from_str(s)?)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string && self.fret == other.fret && self.name == other.name
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
        self.fret.hash(state);
        self.name.hash(state);
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .string
            .cmp(&self.string)
            .then_with(|| self.fret.cmp(&other.fret))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "String: {}, Fret: {}, Name: {}",
            self.string, self.fret, self.name
        )
    }
}
