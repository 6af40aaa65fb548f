use thiserror::Error;

use crate::forms::FormShape;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid note name: {name}")]
    InvalidTuning { name: String },

    #[error("fret {fret} is outside the fretboard")]
    OutOfRange { fret: u8 },

    #[error("no string {index} on this instrument")]
    NoSuchString { index: u8 },

    #[error("string {string} has no scale note above the required floor")]
    NoMatchingScaleNote { string: u8 },

    #[error("no {form} form found for key {key}")]
    FormNotFound { key: String, form: FormShape },

    #[error("unknown form letter: {0}")]
    UnknownForm(String),

    #[error("MIDI program {program} is not a guitar instrument")]
    NotAGuitarTrack { program: u8 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
