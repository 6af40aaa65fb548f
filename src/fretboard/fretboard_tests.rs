#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::Error;
    use crate::fretboard::fretboard::{Fretboard, GuitarString};
    use crate::fretboard::note::Note;

    #[test]
    fn test_standard_tuning_layout() {
        let fb = Fretboard::standard();
        assert_eq!(fb.strings.len(), 6);
        // String 1 is the highest-pitched string.
        assert_eq!(fb.strings[0].index, 1);
        assert_eq!(fb.strings[0].open_note, "E");
        assert_eq!(fb.strings[1].open_note, "B");
        assert_eq!(fb.strings[2].open_note, "G");
        assert_eq!(fb.strings[3].open_note, "D");
        assert_eq!(fb.strings[4].open_note, "A");
        assert_eq!(fb.strings[5].open_note, "E");
        assert_eq!(fb.tuning(), "EADGBE");
    }

    #[test]
    fn test_string_note_table() {
        let low_e = GuitarString::new(6, "E").unwrap();
        assert_eq!(low_e.notes().len(), 23);
        assert_eq!(low_e.note_at(0).unwrap().name, "E");
        assert_eq!(low_e.note_at(3).unwrap().name, "G");
        assert_eq!(low_e.note_at(12).unwrap().name, "E");
        assert_eq!(low_e.note_at(22).unwrap().name, "D");
    }

    #[test]
    fn test_note_at_out_of_range() {
        let string = GuitarString::new(1, "E").unwrap();
        assert!(matches!(
            string.note_at(23),
            Err(Error::OutOfRange { fret: 23 })
        ));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        assert!(matches!(
            GuitarString::new(1, "H"),
            Err(Error::InvalidTuning { .. })
        ));
        assert!(Fretboard::new("EADGB").is_err());
        assert!(Fretboard::new("EADGBEE").is_err());
        assert!(Fretboard::new("EAD?BE").is_err());
    }

    #[test]
    fn test_alternate_tunings() {
        let dadgad = Fretboard::new("DADGAD").unwrap();
        assert_eq!(dadgad.strings[0].open_note, "D");
        assert_eq!(dadgad.strings[5].open_note, "D");

        let flat = Fretboard::new("EbAbDbGbBbEb").unwrap();
        assert_eq!(flat.strings[0].open_note, "Eb");
        assert_eq!(flat.strings[4].open_note, "Ab");
        // Spellings on the string table are canonical sharps.
        assert_eq!(flat.strings[0].note_at(0).unwrap().name, "D#");
    }

    #[test]
    fn test_notes_matching_ascending_and_enharmonic() {
        let low_e = GuitarString::new(6, "E").unwrap();
        let hits = low_e.notes_matching(&["Gb"]);
        let frets: Vec<u8> = hits.iter().map(|n| n.fret).collect();
        assert_eq!(frets, vec![2, 14], "F# lives at frets 2 and 14 on low E");
        assert!(hits.iter().all(|n| n.is_enharmonic("F#")));

        let scale = ["G", "A", "B"];
        let hits = low_e.notes_matching(&scale);
        let frets: Vec<u8> = hits.iter().map(|n| n.fret).collect();
        assert!(frets.windows(2).all(|w| w[0] < w[1]), "ascending fret order");
        assert!(hits
            .iter()
            .all(|n| scale.iter().any(|s| n.is_enharmonic(s))));
    }

    #[test]
    fn test_fretboard_notes_matching_covers_all_strings() {
        let fb = Fretboard::standard();
        let hits = fb.notes_matching(&["E"]);
        let strings: HashSet<u8> = hits.iter().map(|n| n.string).collect();
        assert_eq!(strings.len(), 6, "every string carries an E");
    }

    #[test]
    fn test_string_lookup() {
        let fb = Fretboard::standard();
        assert_eq!(fb.string(6).unwrap().open_note, "E");
        assert!(matches!(fb.string(0), Err(Error::NoSuchString { .. })));
        assert!(matches!(fb.string(7), Err(Error::NoSuchString { .. })));
    }

    #[test]
    fn test_note_ordering() {
        // A note on the thick string sorts before any note on a thinner one.
        let low_e = Note::new(6, 0, "E");
        let high_e_1 = Note::new(1, 0, "E");
        let high_e_2 = Note::new(1, 0, "E");
        assert!(low_e < high_e_1);
        assert_eq!(high_e_1, high_e_2);
        assert!(Note::new(6, 3, "G") < Note::new(6, 5, "A"));
        assert!(Note::new(5, 0, "A") > Note::new(6, 22, "D"));
    }

    #[test]
    fn test_note_equality_ignores_effect() {
        let plain = Note::new(3, 7, "D");
        let bent = Note::new(3, 7, "D").with_effect(serde_json::json!({"bend": 1.0}));
        assert_eq!(plain, bent);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(set.contains(&bent));
    }

    #[test]
    fn test_note_equality_distinguishes_spelling() {
        // Same position, enharmonic spellings: equal only through is_enharmonic.
        let sharp = Note::new(3, 6, "C#");
        let flat = Note::new(3, 6, "Db");
        assert_ne!(sharp, flat);
        assert!(sharp.is_enharmonic("Db"));
    }

    #[test]
    fn test_octave_partner_involution() {
        for fret in 0..=22u8 {
            let note = Note::new(2, fret, "C");
            let partner = note.octave_partner();
            assert_ne!(partner.fret, note.fret);
            assert_eq!(partner.octave_partner(), note);
        }
    }

    #[test]
    fn test_note_json_round_trip() {
        let note = Note::new(4, 5, "G").with_effect(serde_json::json!("hammer"));
        let json = note.to_json().unwrap();
        let back = Note::from_json(&json).unwrap();
        assert_eq!(back, note);
        assert_eq!(back.effect, Some(serde_json::json!("hammer")));

        let bare = Note::from_json(r#"{"string":6,"fret":0,"name":"E"}"#).unwrap();
        assert_eq!(bare, Note::new(6, 0, "E"));
        assert!(bare.effect.is_none());
    }
}
