//! ASCII tab rendering of fretboard shapes.

use crate::forms::form::Form;
use crate::fretboard::fretboard::Fretboard;
use crate::fretboard::note::Note;

/// Render a form as six tab lines, string 1 on top, covering the form's
/// fret span.
pub fn render_form(form: &Form) -> String {
    render_notes(form.notes())
}

pub fn render_notes(notes: &[Note]) -> String {
    let Some(low) = notes.iter().map(|n| n.fret).min() else {
        return String::new();
    };
    let high = notes.iter().map(|n| n.fret).max().unwrap_or(low);
    let cell_width = high.to_string().len() + 1;

    let mut rendered_output = String::new();
    for string in 1..=Fretboard::STRING_COUNT as u8 {
        rendered_output.push_str(&format!("{}|", string));
        for fret in low..=high {
            let cell = if notes.iter().any(|n| n.string == string && n.fret == fret) {
                format!("{:-<width$}", fret, width = cell_width)
            } else {
                "-".repeat(cell_width)
            };
            rendered_output.push_str(&cell);
        }
        rendered_output.push_str("|\n");
    }
    rendered_output
}
