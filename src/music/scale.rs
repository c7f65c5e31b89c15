// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and major keys.
//!
//! Provides the chromatic note model, the diatonic key table and
//! note-to-scale-degree mapping used by every fretboard engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::harmony;
use crate::error::TheoryError;

/// Pitch class type (0-11, C = 0)
pub type PitchClass = u8;

/// Semitone offset type
pub type Semitones = i8;

/// Semitone offsets of the major scale from its root
pub const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> PitchClass {
        self as PitchClass
    }

    /// Get note from pitch class (taken modulo 12)
    pub fn from_pitch_class(pc: PitchClass) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i16 + semitones as i16).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }

    /// Get interval in semitones to another note (ascending)
    pub fn interval_to(self, other: Note) -> u8 {
        (other.pitch_class() as i16 - self.pitch_class() as i16).rem_euclid(12) as u8
    }

    /// True for the seven notes without an accidental
    pub fn is_natural(self) -> bool {
        MAJOR_STEPS.contains(&self.pitch_class())
    }

    /// Name using sharps for the black keys
    pub fn sharp_name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C♯",
            Note::D => "D",
            Note::Ds => "D♯",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F♯",
            Note::G => "G",
            Note::Gs => "G♯",
            Note::A => "A",
            Note::As => "A♯",
            Note::B => "B",
        }
    }

    /// Name using flats for the black keys
    pub fn flat_name(self) -> &'static str {
        match self {
            Note::Cs => "D♭",
            Note::Ds => "E♭",
            Note::Fs => "G♭",
            Note::Gs => "A♭",
            Note::As => "B♭",
            natural => natural.sharp_name(),
        }
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse note from string (e.g., "C", "C#", "Db", "F♯", "B♭")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .replace('♯', "#")
            .replace('♭', "b")
            .to_uppercase();
        match normalized.as_str() {
            "C" | "B#" => Ok(Note::C),
            "C#" | "CS" | "DB" => Ok(Note::Cs),
            "D" => Ok(Note::D),
            "D#" | "DS" | "EB" => Ok(Note::Ds),
            "E" | "FB" => Ok(Note::E),
            "F" | "E#" | "ES" => Ok(Note::F),
            "F#" | "FS" | "GB" => Ok(Note::Fs),
            "G" => Ok(Note::G),
            "G#" | "GS" | "AB" => Ok(Note::Gs),
            "A" => Ok(Note::A),
            "A#" | "AS" | "BB" => Ok(Note::As),
            "B" | "CB" => Ok(Note::B),
            _ => Err(TheoryError::NoteName(s.to_string())),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

/// A major key: seven distinct pitch classes in scale order.
///
/// Degree lookup is by membership, so spelling is purely a display concern
/// handled by [`Key::name_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    root: Note,
    notes: [Note; 7],
}

impl Key {
    /// Build the major key on `root`
    pub fn major(root: Note) -> Self {
        let notes = MAJOR_STEPS.map(|step| root.transpose(step as Semitones));
        Self { root, notes }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the notes of this key in scale order
    pub fn notes(&self) -> &[Note; 7] {
        &self.notes
    }

    /// Check if a note is diatonic to this key
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the key
    pub fn degree_of(&self, note: Note) -> Option<u8> {
        self.notes
            .iter()
            .position(|&n| n == note)
            .map(|i| i as u8 + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: u8) -> Option<Note> {
        if degree == 0 || degree > 7 {
            return None;
        }
        Some(self.notes[degree as usize - 1])
    }

    /// Transpose the key by semitones
    pub fn transpose(&self, semitones: Semitones) -> Self {
        Key::major(self.root.transpose(semitones))
    }

    /// Spelled names of the seven degrees (e.g. F major uses B♭, not A♯)
    pub fn spelled_names(&self) -> &'static [&'static str; 7] {
        harmony::spelling(self.root)
    }

    /// Display name of any note in the context of this key
    pub fn name_of(&self, note: Note) -> &'static str {
        match self.degree_of(note) {
            Some(degree) => self.spelled_names()[degree as usize - 1],
            None if harmony::prefers_flats(self.root) => note.flat_name(),
            None => note.sharp_name(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major", self.spelled_names()[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pitch_class() {
        assert_eq!(Note::C.pitch_class(), 0);
        assert_eq!(Note::A.pitch_class(), 9);
        assert_eq!(Note::B.pitch_class(), 11);
        assert_eq!(Note::from_pitch_class(14), Note::D);
    }

    #[test]
    fn test_note_from_str() {
        assert_eq!("C".parse::<Note>(), Ok(Note::C));
        assert_eq!("C#".parse::<Note>(), Ok(Note::Cs));
        assert_eq!("Db".parse::<Note>(), Ok(Note::Cs));
        assert_eq!("F♯".parse::<Note>(), Ok(Note::Fs));
        assert_eq!("B♭".parse::<Note>(), Ok(Note::As));
        assert_eq!(
            "X".parse::<Note>(),
            Err(TheoryError::NoteName("X".to_string()))
        );
    }

    #[test]
    fn test_note_transpose() {
        assert_eq!(Note::C.transpose(2), Note::D);
        assert_eq!(Note::C.transpose(12), Note::C);
        assert_eq!(Note::C.transpose(-1), Note::B);
        assert_eq!(Note::G.transpose(5), Note::C);
    }

    #[test]
    fn test_note_interval() {
        assert_eq!(Note::C.interval_to(Note::G), 7);
        assert_eq!(Note::C.interval_to(Note::C), 0);
        assert_eq!(Note::G.interval_to(Note::C), 5);
    }

    #[test]
    fn test_note_names() {
        assert_eq!(Note::As.sharp_name(), "A♯");
        assert_eq!(Note::As.flat_name(), "B♭");
        assert_eq!(Note::E.flat_name(), "E");
        assert!(Note::F.is_natural());
        assert!(!Note::Fs.is_natural());
    }

    #[test]
    fn test_key_notes() {
        let c_major = Key::major(Note::C);
        assert_eq!(
            c_major.notes(),
            &[Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B]
        );

        let d_major = Key::major(Note::D);
        assert!(d_major.contains(Note::Fs));
        assert!(d_major.contains(Note::Cs));
        assert!(!d_major.contains(Note::F));
    }

    #[test]
    fn test_key_degree() {
        let c_major = Key::major(Note::C);
        assert_eq!(c_major.degree_of(Note::C), Some(1));
        assert_eq!(c_major.degree_of(Note::E), Some(3));
        assert_eq!(c_major.degree_of(Note::B), Some(7));
        assert_eq!(c_major.degree_of(Note::Fs), None);
    }

    #[test]
    fn test_key_note_at_degree() {
        let g_major = Key::major(Note::G);
        assert_eq!(g_major.note_at_degree(1), Some(Note::G));
        assert_eq!(g_major.note_at_degree(7), Some(Note::Fs));
        assert_eq!(g_major.note_at_degree(0), None);
        assert_eq!(g_major.note_at_degree(8), None);
    }

    #[test]
    fn test_key_transpose() {
        let c_major = Key::major(Note::C);
        assert_eq!(c_major.transpose(7).root(), Note::G);
        assert_eq!(c_major.transpose(-7).root(), Note::F);
    }

    #[test]
    fn test_key_name_of() {
        let f_major = Key::major(Note::F);
        assert_eq!(f_major.name_of(Note::As), "B♭");
        // Non-diatonic notes follow the key's accidental direction
        assert_eq!(f_major.name_of(Note::Cs), "D♭");

        let e_major = Key::major(Note::E);
        assert_eq!(e_major.name_of(Note::Gs), "G♯");
        assert_eq!(e_major.name_of(Note::As), "A♯");
        assert_eq!(e_major.to_string(), "E major");
    }
}
