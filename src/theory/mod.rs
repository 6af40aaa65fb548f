pub mod pitch_class;
pub mod scales;

mod theory_tests;

pub use pitch_class::{is_enharmonic, is_valid_note, note_name, pitch_class, transpose};
pub use scales::{Scale, ScaleProvider};
