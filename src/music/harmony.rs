// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key spelling, interval labels and diatonic harmonization.
//!
//! Enharmonic spelling is a convention, so it lives in a literal table
//! (one row per major key) rather than being derived.

use std::fmt;

use serde::Serialize;

use super::scale::{Key, Note};

/// Spelled degree names for each major key, indexed by root pitch class
const SPELLINGS: [[&str; 7]; 12] = [
    ["C", "D", "E", "F", "G", "A", "B"],
    ["D♭", "E♭", "F", "G♭", "A♭", "B♭", "C"],
    ["D", "E", "F♯", "G", "A", "B", "C♯"],
    ["E♭", "F", "G", "A♭", "B♭", "C", "D"],
    ["E", "F♯", "G♯", "A", "B", "C♯", "D♯"],
    ["F", "G", "A", "B♭", "C", "D", "E"],
    ["F♯", "G♯", "A♯", "B", "C♯", "D♯", "E♯"],
    ["G", "A", "B", "C", "D", "E", "F♯"],
    ["A♭", "B♭", "C", "D♭", "E♭", "F", "G"],
    ["A", "B", "C♯", "D", "E", "F♯", "G♯"],
    ["B♭", "C", "D", "E♭", "F", "G", "A"],
    ["B", "C♯", "D♯", "E", "F♯", "G♯", "A♯"],
];

/// Letter names in scale order with their natural pitch classes
const LETTERS: [(char, u8); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Chord quality of each degree of a harmonized major scale
const HARMONIZATION: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

const NUMERALS: [&str; 8] = ["I", "ii", "iii", "IV", "V", "vi", "vii°", "I"];

/// Spelled degree names of the major key on `root`
pub fn spelling(root: Note) -> &'static [&'static str; 7] {
    &SPELLINGS[root.pitch_class() as usize]
}

/// True when the key on `root` is written with flats
pub fn prefers_flats(root: Note) -> bool {
    spelling(root).iter().any(|name| name.contains('♭'))
}

/// Spell the note `semitones` above `root` on the letter `letter_steps` above
/// the root's letter, adding whatever accidentals that letter needs.
pub fn spell_above(root: Note, letter_steps: usize, semitones: u8) -> String {
    let root_name = spelling(root)[0];
    let root_letter = root_name.chars().next().unwrap_or('C');
    let root_index = LETTERS
        .iter()
        .position(|&(letter, _)| letter == root_letter)
        .unwrap_or(0);

    let (letter, natural) = LETTERS[(root_index + letter_steps) % 7];
    let target = (root.pitch_class() + semitones) % 12;
    let alteration = (target as i8 - natural as i8 + 6).rem_euclid(12) - 6;

    let accidental = match alteration {
        -2 => "♭♭",
        -1 => "♭",
        1 => "♯",
        2 => "♯♯",
        _ => "",
    };
    format!("{}{}", letter, accidental)
}

/// Interval of a scale degree above the tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Root,
    MajorSecond,
    MajorThird,
    PerfectFourth,
    PerfectFifth,
    MajorSixth,
    MajorSeventh,
}

impl Interval {
    /// Intervals in degree order
    pub const ALL: [Interval; 7] = [
        Interval::Root,
        Interval::MajorSecond,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::PerfectFifth,
        Interval::MajorSixth,
        Interval::MajorSeventh,
    ];

    /// Interval for a 1-based scale degree
    pub fn from_degree(degree: u8) -> Option<Self> {
        match degree {
            1..=7 => Some(Interval::ALL[degree as usize - 1]),
            _ => None,
        }
    }

    /// The 1-based scale degree
    pub fn degree(self) -> u8 {
        self as u8 + 1
    }

    /// Short fretboard label
    pub fn label(self) -> &'static str {
        match self {
            Interval::Root => "R",
            Interval::MajorSecond => "2",
            Interval::MajorThird => "3",
            Interval::PerfectFourth => "4",
            Interval::PerfectFifth => "5",
            Interval::MajorSixth => "6",
            Interval::MajorSeventh => "7",
        }
    }

    /// Get a human-readable name for this interval
    pub fn name(self) -> &'static str {
        match self {
            Interval::Root => "Root",
            Interval::MajorSecond => "Major 2nd",
            Interval::MajorThird => "Major 3rd",
            Interval::PerfectFourth => "Perfect 4th",
            Interval::PerfectFifth => "Perfect 5th",
            Interval::MajorSixth => "Major 6th",
            Interval::MajorSeventh => "Major 7th",
        }
    }

    /// Size in semitones
    pub fn semitones(self) -> u8 {
        super::scale::MAJOR_STEPS[self as usize]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short interval label for a 1-based degree
pub fn interval_label(degree: u8) -> Option<&'static str> {
    Interval::from_degree(degree).map(Interval::label)
}

/// Triad quality of a harmonized degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Suffix appended to the root name in a chord symbol
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "°",
        }
    }
}

/// One chord of a harmonized major scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonizedChord {
    /// Scale degree 1-8 (8 repeats the tonic an octave up)
    pub degree: u8,
    /// Roman numeral, lower case for minor and diminished chords
    pub numeral: &'static str,
    pub quality: ChordQuality,
    /// Spelled chord symbol (e.g. "F♯m", "B°")
    pub name: String,
    pub root: Note,
}

/// Harmonize the major key on `root`: seven diatonic triads plus the
/// tonic repeated at the octave.
pub fn harmonize(root: Note) -> Vec<HarmonizedChord> {
    let key = Key::major(root);
    let names = spelling(root);

    (0..8)
        .map(|i| {
            let step = i % 7;
            let quality = HARMONIZATION[step];
            HarmonizedChord {
                degree: i as u8 + 1,
                numeral: NUMERALS[i],
                quality,
                name: format!("{}{}", names[step], quality.suffix()),
                root: key.notes()[step],
            }
        })
        .collect()
}
