pub mod song;


pub use song::{Beat, Chord, Measure, NoteEvent, Song, TimeSignature, Track};
