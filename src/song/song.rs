//! The normalized song structure handed over by a tab source.
//!
//! This crate never reads tablature files. A tab source (Guitar Pro,
//! MusicXML, whatever) is expected to flatten its format into the JSON
//! shape deserialized here: tracks of measures, measures of beats, beats of
//! performed notes given as string/fret pairs. Only the first voice of a
//! measure is modeled.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fretboard::fretboard::{Fretboard, STANDARD_TUNING};
use crate::fretboard::note::Note;

/// MIDI programs 24..=30 are the guitar family.
pub fn guitar_program_name(program: u8) -> Option<&'static str> {
    match program {
        24 => Some("Nylon string guitar"),
        25 => Some("Steel string guitar"),
        26 => Some("Jazz electric guitar"),
        27 => Some("Clean guitar"),
        28 => Some("Muted guitar"),
        29 => Some("Overdrive guitar"),
        30 => Some("Distortion guitar"),
        _ => None,
    }
}

/// A chord annotation on a beat. Tab sources rarely fill in every field, so
/// all of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub name: Option<String>,
    pub strings: Option<Vec<u8>>,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    pub beats_per_measure: u8,
    pub beat_value: u8,
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature {
            beats_per_measure: 4,
            beat_value: 4,
        }
    }
}

/// One performed note as the tab source reports it. The spelling is
/// optional; a missing one is resolved from the track's fretboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEvent {
    pub string: u8,
    pub fret: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub effect: Option<serde_json::Value>,
}

impl NoteEvent {
    /// Turn the raw event into a fretboard note, filling in the spelling
    /// from the string table when the source left it out.
    pub fn resolve(&self, fretboard: &Fretboard) -> Result<Note> {
        let string = fretboard.string(self.string)?;
        let resolved = string.note_at(self.fret)?;
        let name = match &self.name {
            Some(name) => name.clone(),
            None => resolved.name.clone(),
        };
        let mut note = Note::new(self.string, self.fret, name);
        if let Some(effect) = &self.effect {
            note = note.with_effect(effect.clone());
        }
        Ok(note)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BeatData {
    duration: f32,
    #[serde(default)]
    chord: Option<Chord>,
    #[serde(default)]
    notes: Vec<NoteEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MeasureData {
    #[serde(default)]
    time_signature: TimeSignature,
    #[serde(default)]
    marker: Option<String>,
    #[serde(default)]
    beats: Vec<BeatData>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackData {
    #[serde(default)]
    name: String,
    program: u8,
    #[serde(default)]
    twelve_string: bool,
    #[serde(default = "default_tuning")]
    tuning: String,
    #[serde(default)]
    measures: Vec<MeasureData>,
}

fn default_tuning() -> String {
    STANDARD_TUNING.to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct SongData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    album: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default = "default_tempo")]
    tempo: usize,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    tracks: Vec<TrackData>,
}

fn default_tempo() -> usize {
    120
}

/// One beat: the notes struck together, how long they ring, and the chord
/// the source labeled them with.
#[derive(Debug, Clone, PartialEq)]
pub struct Beat {
    /// Fraction of a whole note.
    pub duration: f32,
    pub chord: Option<Chord>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub time_signature: TimeSignature,
    pub marker: Option<String>,
    pub beats: Vec<Beat>,
}

impl Measure {
    /// Measure length as a fraction of a whole note.
    pub fn duration(&self) -> f32 {
        f32::from(self.time_signature.beats_per_measure) / f32::from(self.time_signature.beat_value)
    }

    fn from_data(data: MeasureData, fretboard: &Fretboard) -> Result<Self> {
        let beats = data
            .beats
            .into_iter()
            .map(|beat| {
                let notes = beat
                    .notes
                    .iter()
                    .map(|event| event.resolve(fretboard))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Beat {
                    duration: beat.duration,
                    chord: beat.chord,
                    notes,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Measure {
            time_signature: data.time_signature,
            marker: data.marker,
            beats,
        })
    }
}

/// One guitar part of a song, with the fretboard its tuning implies.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub program: u8,
    pub twelve_string: bool,
    pub fretboard: Fretboard,
    pub measures: Vec<Measure>,
}

impl Track {
    fn from_data(data: TrackData) -> Result<Self> {
        if guitar_program_name(data.program).is_none() {
            return Err(Error::NotAGuitarTrack {
                program: data.program,
            });
        }
        let fretboard = Fretboard::new(&data.tuning)?;
        let measures = data
            .measures
            .into_iter()
            .map(|measure| Measure::from_data(measure, &fretboard))
            .collect::<Result<Vec<_>>>()?;
        Ok(Track {
            name: data.name,
            program: data.program,
            twelve_string: data.twelve_string,
            fretboard,
            measures,
        })
    }

    pub fn tuning(&self) -> String {
        self.fretboard.tuning()
    }

    pub fn instrument(&self) -> &'static str {
        guitar_program_name(self.program).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone)]
pub struct Song {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub tempo: usize,
    pub key: Option<String>,
    pub tracks: Vec<Track>,
}

impl Song {
    /// Build a song from the normalized JSON structure.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SongData = serde_json::from_str(json)?;
        let tracks = data
            .tracks
            .into_iter()
            .map(Track::from_data)
            .collect::<Result<Vec<_>>>()?;
        Ok(Song {
            title: data.title,
            artist: data.artist,
            album: data.album,
            year: data.year,
            genre: data.genre,
            tempo: data.tempo,
            key: data.key,
            tracks,
        })
    }
}
