// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The seven major-scale fingering forms.
//!
//! Each form is a fixed template of (string, fret offset, degree) triples
//! measured from the root on its anchor string. The anchor finger is the
//! finger that plays that root, so a note's finger is its offset plus the
//! anchor finger, clamped to 1-4 for stretches.
//!
//! Forms are named after the mode whose tonic sits under the first finger on
//! the low E string. Anchoring all seven at one fret therefore yields seven
//! different keys (the One-Fret-Rule).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::music::{Key, Note, Tuning, MAX_FRET};

/// One note of a form template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormNote {
    pub string: u8,
    pub offset: i8,
    pub degree: u8,
}

const fn n(string: u8, offset: i8, degree: u8) -> FormNote {
    FormNote {
        string,
        offset,
        degree,
    }
}

/// Immutable fingering template
#[derive(Debug)]
pub struct FormTemplate {
    pub anchor_string: u8,
    pub anchor_finger: u8,
    pub notes: &'static [FormNote],
}

impl FormTemplate {
    /// Smallest fret offset in the template
    pub fn min_offset(&self) -> i8 {
        self.notes.iter().map(|note| note.offset).min().unwrap_or(0)
    }
}

#[rustfmt::skip]
static IONIAN: FormTemplate = FormTemplate {
    anchor_string: 5,
    anchor_finger: 1,
    notes: &[
        n(5, 0, 1), n(5, 2, 2), n(5, 4, 3),
        n(4, 0, 4), n(4, 2, 5), n(4, 4, 6),
        n(3, 1, 7), n(3, 2, 1), n(3, 4, 2),
        n(2, 1, 3), n(2, 2, 4),
        n(1, 0, 5), n(1, 2, 6), n(1, 4, 7),
        n(0, 0, 1), n(0, 2, 2),
    ],
};

#[rustfmt::skip]
static DORIAN: FormTemplate = FormTemplate {
    anchor_string: 3,
    anchor_finger: 1,
    notes: &[
        n(5, 0, 2), n(5, 2, 3), n(5, 3, 4),
        n(4, 0, 5), n(4, 2, 6), n(4, 4, 7),
        n(3, 0, 1), n(3, 2, 2), n(3, 4, 3),
        n(2, 0, 4), n(2, 2, 5),
        n(1, 0, 6), n(1, 2, 7), n(1, 3, 1),
        n(0, 0, 2), n(0, 2, 3), n(0, 3, 4),
    ],
};

#[rustfmt::skip]
static PHRYGIAN: FormTemplate = FormTemplate {
    anchor_string: 4,
    anchor_finger: 4,
    notes: &[
        n(5, -3, 3), n(5, -2, 4), n(5, 0, 5),
        n(4, -3, 6), n(4, -1, 7), n(4, 0, 1),
        n(3, -3, 2), n(3, -1, 3), n(3, 0, 4),
        n(2, -3, 5), n(2, -1, 6),
        n(1, -3, 7), n(1, -2, 1), n(1, 0, 2),
        n(0, -3, 3), n(0, -2, 4), n(0, 0, 5),
    ],
};

#[rustfmt::skip]
static LYDIAN: FormTemplate = FormTemplate {
    anchor_string: 4,
    anchor_finger: 3,
    notes: &[
        n(5, -2, 4), n(5, 0, 5), n(5, 2, 6),
        n(4, -1, 7), n(4, 0, 1), n(4, 2, 2),
        n(3, -1, 3), n(3, 0, 4), n(3, 2, 5),
        n(2, -1, 6), n(2, 1, 7),
        n(1, -2, 1), n(1, 0, 2), n(1, 2, 3),
        n(0, -2, 4), n(0, 0, 5),
    ],
};

#[rustfmt::skip]
static MIXOLYDIAN: FormTemplate = FormTemplate {
    anchor_string: 4,
    anchor_finger: 1,
    notes: &[
        n(5, 0, 5), n(5, 2, 6), n(5, 4, 7),
        n(4, 0, 1), n(4, 2, 2), n(4, 4, 3),
        n(3, 0, 4), n(3, 2, 5), n(3, 4, 6),
        n(2, 1, 7), n(2, 2, 1),
        n(1, 0, 2), n(1, 2, 3), n(1, 3, 4),
        n(0, 0, 5), n(0, 2, 6),
    ],
};

#[rustfmt::skip]
static AEOLIAN: FormTemplate = FormTemplate {
    anchor_string: 5,
    anchor_finger: 4,
    notes: &[
        n(5, -3, 6), n(5, -1, 7), n(5, 0, 1),
        n(4, -3, 2), n(4, -1, 3), n(4, 0, 4),
        n(3, -3, 5), n(3, -1, 6), n(3, 1, 7),
        n(2, -3, 1), n(2, -1, 2),
        n(1, -3, 3), n(1, -2, 4), n(1, 0, 5),
        n(0, -3, 6), n(0, -1, 7), n(0, 0, 1),
    ],
};

#[rustfmt::skip]
static LOCRIAN: FormTemplate = FormTemplate {
    anchor_string: 5,
    anchor_finger: 2,
    notes: &[
        n(5, -1, 7), n(5, 0, 1), n(5, 2, 2),
        n(4, -1, 3), n(4, 0, 4), n(4, 2, 5),
        n(3, -1, 6), n(3, 1, 7), n(3, 2, 1),
        n(2, -1, 2), n(2, 1, 3), n(2, 2, 4),
        n(1, 0, 5), n(1, 2, 6),
        n(0, -1, 7), n(0, 0, 1), n(0, 2, 2),
    ],
};

/// Selector for one of the seven forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleForm {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ScaleForm {
    /// Forms in order of the degree under the first finger
    pub const ALL: [ScaleForm; 7] = [
        ScaleForm::Ionian,
        ScaleForm::Dorian,
        ScaleForm::Phrygian,
        ScaleForm::Lydian,
        ScaleForm::Mixolydian,
        ScaleForm::Aeolian,
        ScaleForm::Locrian,
    ];

    /// Form from a 0-based index
    pub fn from_index(index: usize) -> Result<Self, TheoryError> {
        ScaleForm::ALL
            .get(index)
            .copied()
            .ok_or(TheoryError::FormIndex(index))
    }

    /// 0-based index of this form
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleForm::Ionian => "Ionian",
            ScaleForm::Dorian => "Dorian",
            ScaleForm::Phrygian => "Phrygian",
            ScaleForm::Lydian => "Lydian",
            ScaleForm::Mixolydian => "Mixolydian",
            ScaleForm::Aeolian => "Aeolian",
            ScaleForm::Locrian => "Locrian",
        }
    }

    /// The fingering template for this form
    pub fn template(self) -> &'static FormTemplate {
        match self {
            ScaleForm::Ionian => &IONIAN,
            ScaleForm::Dorian => &DORIAN,
            ScaleForm::Phrygian => &PHRYGIAN,
            ScaleForm::Lydian => &LYDIAN,
            ScaleForm::Mixolydian => &MIXOLYDIAN,
            ScaleForm::Aeolian => &AEOLIAN,
            ScaleForm::Locrian => &LOCRIAN,
        }
    }
}

impl fmt::Display for ScaleForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Form {} ({})", self.index() + 1, self.name())
    }
}

/// A form note placed on the neck for a specific key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PositionNote {
    pub string: u8,
    pub fret: u8,
    pub finger: u8,
    pub degree: u8,
}

/// Fret of the root on the form's anchor string.
///
/// An open-string root is moved to fret 12, and the whole form moves up an
/// octave when its lowest note would land below the nut.
pub fn root_fret(root: Note, form: ScaleForm) -> u8 {
    let template = form.template();
    let mut fret = Tuning::STANDARD.fret_of(template.anchor_string, root);
    if fret == 0 {
        fret = 12;
    }
    if (fret as i16) + (template.min_offset() as i16) < 0 {
        fret += 12;
    }
    fret
}

/// Every note of `form` in the key of `root`.
///
/// Notes past the last fret are dropped, so high roots may yield a partial form.
pub fn position_notes(root: Note, form: ScaleForm) -> Vec<PositionNote> {
    let template = form.template();
    let base = root_fret(root, form) as i16;

    template
        .notes
        .iter()
        .filter_map(|note| {
            let fret = base + note.offset as i16;
            if !(0..=MAX_FRET as i16).contains(&fret) {
                return None;
            }
            Some(PositionNote {
                string: note.string,
                fret: fret as u8,
                finger: finger_for(note.offset, template.anchor_finger),
                degree: note.degree,
            })
        })
        .collect()
}

/// Finger and degree of (string, fret) if it belongs to `form` in `root`
pub fn is_in_position(string: u8, fret: u8, root: Note, form: ScaleForm) -> Option<PositionNote> {
    position_notes(root, form)
        .into_iter()
        .find(|note| note.string == string && note.fret == fret)
}

/// Fret under the first finger when `form` is played in `root`
pub fn position_fret(root: Note, form: ScaleForm) -> u8 {
    let template = form.template();
    let fret = root_fret(root, form) as i16 - (template.anchor_finger as i16 - 1);
    debug_assert!(fret >= 0, "{} puts the first finger below the nut", form);
    fret.max(0) as u8
}

/// Key whose `form` puts the first finger on `position_fret`
pub fn root_for_position(position_fret: u8, form: ScaleForm) -> Note {
    let template = form.template();
    let root_fret = (position_fret as u16 + template.anchor_finger as u16 - 1) % 12;
    Tuning::STANDARD.note_at(template.anchor_string, root_fret as u8)
}

/// The seven keys reachable by anchoring each form at `position_fret`
pub fn one_fret_rule(position_fret: u8) -> [(ScaleForm, Key); 7] {
    ScaleForm::ALL.map(|form| (form, Key::major(root_for_position(position_fret, form))))
}

fn finger_for(offset: i8, anchor_finger: u8) -> u8 {
    (offset as i16 + anchor_finger as i16).clamp(1, 4) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch_class_at;

    #[test]
    fn test_templates_are_complete_scales() {
        for form in ScaleForm::ALL {
            let template = form.template();
            let mut degrees: Vec<u8> = template.notes.iter().map(|n| n.degree).collect();
            degrees.sort();
            degrees.dedup();
            assert_eq!(degrees, vec![1, 2, 3, 4, 5, 6, 7], "{}", form);

            let anchor = template
                .notes
                .iter()
                .find(|n| n.string == template.anchor_string && n.offset == 0)
                .unwrap();
            assert_eq!(anchor.degree, 1, "{} anchor is not the root", form);
        }
    }

    #[test]
    fn test_template_degrees_match_pitches() {
        // Every template note must sound its degree in every key
        for root in Note::ALL {
            let key = Key::major(root);
            for form in ScaleForm::ALL {
                for note in position_notes(root, form) {
                    let pc = pitch_class_at(note.string, note.fret);
                    assert_eq!(key.degree_of(Note::from_pitch_class(pc)), Some(note.degree));
                }
            }
        }
    }

    #[test]
    fn test_form_from_index() {
        assert_eq!(ScaleForm::from_index(0), Ok(ScaleForm::Ionian));
        assert_eq!(ScaleForm::from_index(6), Ok(ScaleForm::Locrian));
        assert_eq!(ScaleForm::from_index(7), Err(TheoryError::FormIndex(7)));
    }

    #[test]
    fn test_root_fret_c_major() {
        assert_eq!(root_fret(Note::C, ScaleForm::Ionian), 8);
        assert_eq!(root_fret(Note::C, ScaleForm::Dorian), 10);
        assert_eq!(root_fret(Note::C, ScaleForm::Phrygian), 3);
        assert_eq!(root_fret(Note::C, ScaleForm::Mixolydian), 3);
    }

    #[test]
    fn test_root_fret_prefers_fretted_root() {
        // E on the low E string is open; the form moves to the 12th fret
        assert_eq!(root_fret(Note::E, ScaleForm::Ionian), 12);
    }

    #[test]
    fn test_root_fret_shifts_octave() {
        // Phrygian reaches 3 frets below its root: C# at fret 4 still fits,
        // F Aeolian at fret 1 would need fret -2 and moves up to 13.
        assert_eq!(root_fret(Note::Cs, ScaleForm::Phrygian), 4);
        assert_eq!(root_fret(Note::F, ScaleForm::Aeolian), 13);
    }

    #[test]
    fn test_position_notes_c_ionian() {
        let notes = position_notes(Note::C, ScaleForm::Ionian);
        assert_eq!(notes.len(), 16);
        assert_eq!(
            notes[0],
            PositionNote {
                string: 5,
                fret: 8,
                finger: 1,
                degree: 1
            }
        );
        // The stretch on the low E string is taken by the little finger
        assert_eq!(
            notes[2],
            PositionNote {
                string: 5,
                fret: 12,
                finger: 4,
                degree: 3
            }
        );
    }

    #[test]
    fn test_forms_fit_below_last_fret() {
        // Root frets never exceed 12 plus the octave shift for low roots, so
        // every form is complete in every key.
        for root in Note::ALL {
            for form in ScaleForm::ALL {
                let notes = position_notes(root, form);
                assert_eq!(notes.len(), form.template().notes.len(), "{} in {}", form, root);
                assert!(notes.iter().all(|note| note.fret <= MAX_FRET));
            }
        }
        // E Ionian at fret 12 stretches to fret 16
        let top = position_notes(Note::E, ScaleForm::Ionian)
            .iter()
            .map(|note| note.fret)
            .max();
        assert_eq!(top, Some(16));
    }

    #[test]
    fn test_is_in_position() {
        let found = is_in_position(4, 10, Note::C, ScaleForm::Ionian).unwrap();
        assert_eq!(found.degree, 5);
        assert_eq!(found.finger, 3);
        assert_eq!(is_in_position(4, 9, Note::C, ScaleForm::Ionian), None);
    }

    #[test]
    fn test_position_fret_round_trip() {
        for root in Note::ALL {
            for form in ScaleForm::ALL {
                let fret = position_fret(root, form);
                assert_eq!(root_for_position(fret, form), root, "{} in {}", form, root);
            }
        }
    }

    #[test]
    fn test_one_fret_rule_at_fifth_fret() {
        let keys: Vec<Note> = one_fret_rule(5).iter().map(|(_, key)| key.root()).collect();
        // First finger on A (low E fret 5) as degree 1..7
        assert_eq!(
            keys,
            vec![Note::A, Note::G, Note::F, Note::E, Note::D, Note::C, Note::As]
        );
    }

    #[test]
    fn test_root_for_position_wraps_high_frets() {
        for form in ScaleForm::ALL {
            assert_eq!(root_for_position(u8::MAX, form), root_for_position(u8::MAX - 12, form));
            assert_eq!(root_for_position(17, form), root_for_position(5, form));
        }
    }
}
