#[cfg(test)]
mod tests {
    use crate::theory::pitch_class::{
        is_enharmonic, is_valid_note, note_name, pitch_class, transpose,
    };
    use crate::theory::scales::{Scale, ScaleProvider};

    #[test]
    fn test_pitch_class_values() {
        assert_eq!(pitch_class("C").unwrap(), 0);
        assert_eq!(pitch_class("E").unwrap(), 4);
        assert_eq!(pitch_class("G").unwrap(), 7);
        assert_eq!(pitch_class("F#").unwrap(), 6);
        assert_eq!(pitch_class("Gb").unwrap(), 6);
        assert_eq!(pitch_class("B#").unwrap(), 0);
        assert_eq!(pitch_class("Cb").unwrap(), 11);
    }

    #[test]
    fn test_unicode_accidentals() {
        assert_eq!(pitch_class("C♯").unwrap(), pitch_class("Db").unwrap());
        assert_eq!(pitch_class("B♭").unwrap(), pitch_class("A#").unwrap());
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_note("H"));
        assert!(!is_valid_note(""));
        assert!(!is_valid_note("C%"));
        assert!(is_valid_note("eb"));
    }

    #[test]
    fn test_enharmonic() {
        assert!(is_enharmonic("C#", "Db"));
        assert!(is_enharmonic("E", "Fb"));
        assert!(!is_enharmonic("C", "D"));
        assert!(!is_enharmonic("C", "X"));
    }

    #[test]
    fn test_note_name_spelling() {
        assert_eq!(note_name(0), "C");
        assert_eq!(note_name(6), "F#");
        assert_eq!(note_name(11), "B");
        assert_eq!(note_name(12), "C");
    }

    #[test]
    fn test_transpose() {
        assert_eq!(transpose("G", 5).unwrap(), "C");
        assert_eq!(transpose("C", -1).unwrap(), "B");
        assert_eq!(transpose("Bb", 2).unwrap(), "C");
    }

    #[test]
    fn test_g_ionian_ascending() {
        let names = Scale::Ionian.ascending("G").unwrap();
        assert_eq!(names, vec!["G", "A", "B", "C", "D", "E", "F#", "G"]);
    }

    #[test]
    fn test_g_locrian_ascending() {
        let names = Scale::Locrian.ascending("G").unwrap();
        assert_eq!(names, vec!["G", "G#", "A#", "C", "C#", "D#", "F", "G"]);
    }

    #[test]
    fn test_pentatonic_lengths() {
        // Five degrees plus the wraparound root.
        assert_eq!(Scale::MinorPentatonic.ascending("A").unwrap().len(), 6);
        assert_eq!(Scale::MajorPentatonic.ascending("A").unwrap().len(), 6);
    }

    #[test]
    fn test_ascending_rejects_bad_key() {
        assert!(Scale::Ionian.ascending("X").is_err());
    }

    #[test]
    fn test_scale_names() {
        assert_eq!(Scale::Locrian.name(), "Locrian");
        assert_eq!(Scale::MinorPentatonic.to_string(), "MinorPentatonic");
        assert_eq!(Scale::ALL.len(), 11);
    }
}
