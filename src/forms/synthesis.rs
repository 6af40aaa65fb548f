// synthesis.rs
//
// Walks the fretboard string by string to build a minimal-stretch scale
// shape anchored at one of the five CAGED root positions.

use core::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::forms::form::Form;
use crate::fretboard::fretboard::{Fretboard, GuitarString};
use crate::fretboard::note::Note;
use crate::theory::scales::ScaleProvider;

/// The widest comfortable index-to-pinkie span, in frets. A scale note
/// further than this from the current position is taken on the next string
/// instead.
const MAX_STRETCH: u8 = 3;

/// The five CAGED root positions, named after the open chord each resembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormShape {
    C,
    A,
    G,
    E,
    D,
}

impl FormShape {
    pub const ALL: [FormShape; 5] = [
        FormShape::C,
        FormShape::A,
        FormShape::G,
        FormShape::E,
        FormShape::D,
    ];

    /// The strings carrying this shape's root notes, primary anchor first.
    /// String 1 is the highest-pitched string.
    pub fn anchors(self) -> &'static [u8] {
        match self {
            FormShape::C => &[2, 5],
            FormShape::A => &[5, 3],
            FormShape::G => &[3, 1, 6],
            FormShape::E => &[1, 6, 4],
            FormShape::D => &[4, 2],
        }
    }

    pub fn letter(self) -> char {
        match self {
            FormShape::C => 'C',
            FormShape::A => 'A',
            FormShape::G => 'G',
            FormShape::E => 'E',
            FormShape::D => 'D',
        }
    }
}

impl fmt::Display for FormShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for FormShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "C" | "c" => Ok(FormShape::C),
            "A" | "a" => Ok(FormShape::A),
            "G" | "g" => Ok(FormShape::G),
            "E" | "e" => Ok(FormShape::E),
            "D" | "d" => Ok(FormShape::D),
            other => Err(Error::UnknownForm(other.to_string())),
        }
    }
}

/// Synthesize the scale shape for `key` anchored at the given root position,
/// starting the search at the first fret.
pub fn calculate_form(
    fretboard: &Fretboard,
    key: &str,
    scale: &dyn ScaleProvider,
    shape: FormShape,
) -> Result<Form> {
    calculate_form_from(fretboard, key, scale, shape, 0, false)
}

/// Synthesize a scale shape, searching upward from `form_start`.
///
/// The walk seeds on the lowest-pitched string at the first scale note at or
/// above the floor, then climbs towards the highest string, taking each
/// string's scale notes in ascending fret order. A note stretching more than
/// three frets past the current position is taken on the next string
/// instead, at the matching fret closest to the position. The two outer
/// strings are then reconciled so the shape starts and ends on the same
/// frets. If the finished shape misses any of the root-position anchors, the
/// whole attempt is discarded and the search restarts one fret higher; the
/// fretboard's last fret bounds the search.
///
/// With `transpose` set, the finished shape is copied one octave along the
/// fretboard wherever the copy stays in range.
pub fn calculate_form_from(
    fretboard: &Fretboard,
    key: &str,
    scale: &dyn ScaleProvider,
    shape: FormShape,
    form_start: u8,
    transpose: bool,
) -> Result<Form> {
    let scale_notes = scale.ascending(key)?;
    let mut floor = form_start;
    while floor < GuitarString::FRETS {
        match attempt(fretboard, key, &scale_notes, shape, floor)? {
            Some(notes) => {
                debug!("{} {} {} form resolved at fret {}", key, scale.name(), shape, floor);
                let form = Form::new(
                    notes,
                    Some(key.to_string()),
                    Some(scale.name().to_string()),
                    shape.letter().to_string(),
                );
                return Ok(if transpose { form.transposed() } else { form });
            }
            None => {
                debug!(
                    "{} {} {} form rejected at fret {}, retrying higher",
                    key,
                    scale.name(),
                    shape,
                    floor
                );
                floor += 1;
            }
        }
    }
    Err(Error::FormNotFound {
        key: key.to_string(),
        form: shape,
    })
}

/// One pass of the walk at a fixed floor. `None` means the attempt failed
/// validation and the caller should retry a fret higher.
fn attempt(
    fretboard: &Fretboard,
    key: &str,
    scale_notes: &[String],
    shape: FormShape,
    floor: u8,
) -> Result<Option<Vec<Note>>> {
    let anchors = shape.anchors();

    // The mandatory root positions: the primary anchor's first root at or
    // above the floor fixes the reference fret for the remaining anchors.
    let primary = fretboard.string(anchors[0])?;
    let Some(first_root) = primary
        .notes_matching(&[key])
        .into_iter()
        .find(|n| n.fret >= floor)
    else {
        return Ok(None);
    };
    let mut roots: Vec<Note> = vec![first_root.clone()];
    for &index in &anchors[1..] {
        let string = fretboard.string(index)?;
        let Some(root) = string
            .notes_matching(&[key])
            .into_iter()
            .find(|n| n.fret >= roots[0].fret)
        else {
            return Ok(None);
        };
        roots.push(root.clone());
    }

    // Seed on the lowest-pitched string.
    let low = fretboard.string(6)?;
    let seed = low
        .notes_matching(scale_notes)
        .into_iter()
        .find(|n| n.fret >= floor)
        .ok_or(Error::NoMatchingScaleNote { string: 6 })?
        .clone();
    let mut start = seed.fret;
    let mut collected: Vec<Note> = vec![seed];
    trace!("walk seeded at fret {} on string 6", start);

    // Climb from the seed string up to string 2; string 1 is handled by the
    // outer-string reconciliation below.
    for index in (2..=6).rev() {
        let string = fretboard.string(index)?;
        for note in string.notes_matching(scale_notes) {
            if note.fret <= start {
                continue;
            }
            if note.fret - start > MAX_STRETCH {
                // Too far for the pinkie: shift position by taking this
                // pitch on the next string, as close to the old position as
                // it gets.
                let above = fretboard.string(index - 1)?;
                let bridge = above
                    .notes_matching(&[note.name.as_str()])
                    .into_iter()
                    .min_by_key(|n| (i32::from(start) - i32::from(n.fret)).abs())
                    .ok_or(Error::NoMatchingScaleNote { string: index - 1 })?
                    .clone();
                start = bridge.fret;
                collected.push(bridge);
                break;
            }
            collected.push(note.clone());
        }
    }

    reconcile_outer_strings(fretboard, collected, start, &roots)
}

/// Align the two outer strings so the shape closes into a box: drop the
/// low-string notes that fell below the final position, re-seat the last
/// climbed note on the low string when the two ends disagree, then mirror
/// the low string onto the high string fret for fret.
fn reconcile_outer_strings(
    fretboard: &Fretboard,
    collected: Vec<Note>,
    start: u8,
    roots: &[Note],
) -> Result<Option<Vec<Note>>> {
    let lead = collected
        .iter()
        .position(|n| n.fret >= start)
        .unwrap_or(collected.len());
    let Some((last, body)) = collected[lead..].split_last() else {
        return Ok(None);
    };
    if body.is_empty() {
        return Ok(None);
    }

    let low = fretboard.string(6)?;
    let high = fretboard.string(1)?;
    let mut notes: Vec<Note> = Vec::with_capacity(collected.len());
    if body[0].fret != last.fret {
        notes.push(low.note_at(last.fret)?.clone());
    }
    notes.extend_from_slice(body);
    let mirrored: Vec<Note> = notes
        .iter()
        .filter(|n| n.string == 6)
        .map(|n| high.note_at(n.fret).map(Note::clone))
        .collect::<Result<_>>()?;
    notes.extend(mirrored);

    if roots.iter().all(|root| notes.contains(root)) {
        Ok(Some(notes))
    } else {
        Ok(None)
    }
}
