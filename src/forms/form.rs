use core::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::fretboard::note::Note;

/// An arbitrary ordered collection of notes, with optional temporal bounds
/// supplied by the tab source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lick {
    pub notes: Vec<Note>,
    pub start: Option<f32>,
    pub end: Option<f32>,
}

impl Lick {
    pub fn new(notes: Vec<Note>) -> Self {
        Lick {
            notes,
            start: None,
            end: None,
        }
    }

    pub fn contains_note(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }
}

/// A scale shape on the fretboard: a sorted, deduplicated set of notes plus
/// the key, scale and CAGED letters it was synthesized from.
///
/// Forms are value objects. They are produced by
/// [`calculate_form`](crate::forms::calculate_form) or by combining existing
/// forms with [`union`](Form::union); neither mutates its operands.
#[derive(Debug, Clone, Serialize)]
pub struct Form {
    notes: Vec<Note>,
    pub key: Option<String>,
    pub scale: Option<String>,
    pub forms: String,
}

impl Form {
    /// Build a form from raw notes. The notes are sorted by the physical
    /// note order and deduplicated.
    pub fn new(
        notes: Vec<Note>,
        key: Option<String>,
        scale: Option<String>,
        forms: String,
    ) -> Self {
        let mut form = Form {
            notes,
            key,
            scale,
            forms,
        };
        form.normalize();
        form
    }

    fn normalize(&mut self) {
        self.notes.sort();
        self.notes.dedup();
    }

    /// The shape's notes, sorted low string first, ascending fret within a
    /// string.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Copy the shape one octave along the fretboard. Notes at fret 11 are
    /// skipped, their partner would land beyond the last fret.
    pub fn transposed(mut self) -> Self {
        let partners: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.fret != 11)
            .map(Note::octave_partner)
            .collect();
        self.notes.extend(partners);
        self.normalize();
        self
    }

    /// Merge two forms into one. The note sets always merge; the metadata
    /// survives only as far as the operands agree. A shared key is kept, the
    /// scale is kept when both scales match, and the CAGED letters are
    /// concatenated only when a scale is retained. With differing keys the
    /// result is a bare note collection.
    ///
    /// The merged note set is independent of operand order; the concatenated
    /// letters are not.
    pub fn union(&self, other: &Form) -> Form {
        let notes: Vec<Note> = self.notes.iter().chain(&other.notes).cloned().collect();
        if self.key == other.key {
            let scale = if self.scale == other.scale {
                self.scale.clone()
            } else {
                None
            };
            let forms = if scale.is_some() {
                format!("{}{}", self.forms, other.forms)
            } else {
                String::new()
            };
            Form::new(notes, self.key.clone(), scale, forms)
        } else {
            Form::new(notes, None, None, String::new())
        }
    }

    /// Fold any number of forms with [`union`](Form::union). `None` when the
    /// iterator is empty.
    pub fn join<I>(forms: I) -> Option<Form>
    where
        I: IntoIterator<Item = Form>,
    {
        forms.into_iter().reduce(|acc, form| acc.union(&form))
    }

    /// Whether every note of the lick appears in this form, by exact
    /// string, fret and spelling.
    pub fn contains(&self, lick: &Lick) -> bool {
        lick.notes.iter().all(|note| self.notes.contains(note))
    }

    pub fn contains_note(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    pub fn to_lick(&self) -> Lick {
        Lick::new(self.notes.clone())
    }
}

/// Forms compare and hash by their ordered note sequence alone; the
/// key/scale/letters metadata does not participate.
impl PartialEq for Form {
    fn eq(&self, other: &Self) -> bool {
        self.notes == other.notes
    }
}

impl Eq for Form {}

impl Hash for Form {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.notes.hash(state);
    }
}

impl Add<&Form> for &Form {
    type Output = Form;

    fn add(self, other: &Form) -> Form {
        self.union(other)
    }
}

impl Add for Form {
    type Output = Form;

    fn add(self, other: Form) -> Form {
        self.union(&other)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.key.as_deref().unwrap_or("-"),
            self.scale.as_deref().unwrap_or("-"),
            self.forms
        )
    }
}
