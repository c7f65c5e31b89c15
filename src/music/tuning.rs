// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Guitar tuning and fretboard coordinates.
//!
//! String 0 is the highest-pitched string (high E), string 5 the lowest.
//! Frets run from 0 (open) to [`MAX_FRET`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scale::{Note, PitchClass};

/// Number of strings on the neck
pub const STRING_COUNT: u8 = 6;

/// Highest fret the engines will place a note on
pub const MAX_FRET: u8 = 19;

/// Lowest-pitched string (low E in standard tuning)
pub const LOW_STRING: u8 = STRING_COUNT - 1;

/// A single cell of the fretboard grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FretPosition {
    /// String index, 0 = high E
    pub string: u8,
    /// Fret number, 0 = open string
    pub fret: u8,
}

impl FretPosition {
    /// Create a new position
    pub fn new(string: u8, fret: u8) -> Self {
        Self { string, fret }
    }

    /// Note sounding at this position in standard tuning
    pub fn note(self) -> Note {
        Tuning::STANDARD.note_at(self.string, self.fret)
    }

    /// Every cell of the grid, string by string from high E
    pub fn all() -> impl Iterator<Item = FretPosition> {
        (0..STRING_COUNT)
            .flat_map(|string| (0..=MAX_FRET).map(move |fret| FretPosition::new(string, fret)))
    }
}

impl fmt::Display for FretPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string {} fret {}", self.string + 1, self.fret)
    }
}

/// Open-string pitches for the six strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    name: &'static str,
    open: [Note; STRING_COUNT as usize],
}

impl Tuning {
    /// E A D G B E, listed from string 0 (high E) down to string 5 (low E)
    pub const STANDARD: Tuning = Tuning {
        name: "Standard",
        open: [Note::E, Note::B, Note::G, Note::D, Note::A, Note::E],
    };

    /// Get the tuning name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Open note of a string
    pub fn open_note(&self, string: u8) -> Note {
        self.open[string as usize]
    }

    /// Note at (string, fret): (open + fret) mod 12
    pub fn note_at(&self, string: u8, fret: u8) -> Note {
        Note::from_pitch_class(self.open_note(string).pitch_class() + fret % 12)
    }

    /// Lowest fret (0-11) on `string` that sounds `note`
    pub fn fret_of(&self, string: u8, note: Note) -> u8 {
        self.open_note(string).interval_to(note)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

/// Pitch class at (string, fret) in standard tuning
pub fn pitch_class_at(string: u8, fret: u8) -> PitchClass {
    Tuning::STANDARD.note_at(string, fret).pitch_class()
}
