// lib.rs
pub mod error;
pub mod forms;
pub mod fretboard;
pub mod renderer;
pub mod song;
pub mod theory;

pub use error::{Error, Result};
pub use forms::{calculate_form, calculate_form_from, Form, FormShape, Lick};
pub use fretboard::{Fretboard, GuitarString, Note};
pub use renderer::render_form;
pub use song::{Beat, Chord, Measure, Song, Track};
pub use theory::{Scale, ScaleProvider};
