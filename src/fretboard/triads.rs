// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Close-voiced triads on three adjacent strings.
//!
//! 48 templates: 3 inversions x 4 string sets x 4 qualities. Each template
//! stores its notes as fret offsets from the root, so a key only has to
//! locate the root on the template's root string. Both that fret and the
//! one an octave up are tried, and every placement that fits on the neck is
//! returned.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::TheoryError;
use crate::music::harmony;
use crate::music::{Note, Tuning, MAX_FRET};

/// Which chord tone is in the bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inversion {
    Root,
    First,
    Second,
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    pub fn from_index(index: usize) -> Result<Self, TheoryError> {
        Inversion::ALL
            .get(index)
            .copied()
            .ok_or(TheoryError::InversionIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Inversion::Root => "Root position",
            Inversion::First => "1st inversion",
            Inversion::Second => "2nd inversion",
        }
    }
}

/// Three adjacent strings, named low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StringSet {
    Ead,
    Adg,
    Dgb,
    Gbe,
}

impl StringSet {
    pub const ALL: [StringSet; 4] =
        [StringSet::Ead, StringSet::Adg, StringSet::Dgb, StringSet::Gbe];

    /// String indices, lowest-pitched first
    pub fn strings(self) -> [u8; 3] {
        let low = 5 - self as u8;
        [low, low - 1, low - 2]
    }

    pub fn label(self) -> &'static str {
        match self {
            StringSet::Ead => "E-A-D",
            StringSet::Adg => "A-D-G",
            StringSet::Dgb => "D-G-B",
            StringSet::Gbe => "G-B-E",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl TriadQuality {
    pub const ALL: [TriadQuality; 4] = [
        TriadQuality::Major,
        TriadQuality::Minor,
        TriadQuality::Diminished,
        TriadQuality::Augmented,
    ];

    /// Intervals above the root: third, fifth
    pub fn intervals(self) -> [TriadInterval; 2] {
        match self {
            TriadQuality::Major => [TriadInterval::MajorThird, TriadInterval::PerfectFifth],
            TriadQuality::Minor => [TriadInterval::MinorThird, TriadInterval::PerfectFifth],
            TriadQuality::Diminished => [TriadInterval::MinorThird, TriadInterval::DiminishedFifth],
            TriadQuality::Augmented => [TriadInterval::MajorThird, TriadInterval::AugmentedFifth],
        }
    }
}

/// Interval of a triad note above its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TriadInterval {
    #[serde(rename = "R")]
    Root,
    #[serde(rename = "3")]
    MajorThird,
    #[serde(rename = "♭3")]
    MinorThird,
    #[serde(rename = "5")]
    PerfectFifth,
    #[serde(rename = "♭5")]
    DiminishedFifth,
    #[serde(rename = "♯5")]
    AugmentedFifth,
}

impl TriadInterval {
    pub fn label(self) -> &'static str {
        match self {
            TriadInterval::Root => "R",
            TriadInterval::MajorThird => "3",
            TriadInterval::MinorThird => "♭3",
            TriadInterval::PerfectFifth => "5",
            TriadInterval::DiminishedFifth => "♭5",
            TriadInterval::AugmentedFifth => "♯5",
        }
    }

    pub fn semitones(self) -> u8 {
        match self {
            TriadInterval::Root => 0,
            TriadInterval::MinorThird => 3,
            TriadInterval::MajorThird => 4,
            TriadInterval::DiminishedFifth => 6,
            TriadInterval::PerfectFifth => 7,
            TriadInterval::AugmentedFifth => 8,
        }
    }

    /// Letter names above the root (third = 2, fifth = 4)
    fn letter_steps(self) -> usize {
        match self {
            TriadInterval::Root => 0,
            TriadInterval::MinorThird | TriadInterval::MajorThird => 2,
            _ => 4,
        }
    }
}

impl fmt::Display for TriadInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A string set and quality; index = string set * 4 + quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TriadShape {
    pub string_set: StringSet,
    pub quality: TriadQuality,
}

impl TriadShape {
    pub const COUNT: usize = 16;

    pub fn new(string_set: StringSet, quality: TriadQuality) -> Self {
        Self {
            string_set,
            quality,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, TheoryError> {
        if index >= Self::COUNT {
            return Err(TheoryError::TriadShapeIndex(index));
        }
        Ok(Self::new(StringSet::ALL[index / 4], TriadQuality::ALL[index % 4]))
    }

    pub fn index(self) -> usize {
        self.string_set as usize * 4 + self.quality as usize
    }

    /// All 16 shapes in index order
    pub fn all() -> impl Iterator<Item = TriadShape> {
        StringSet::ALL
            .into_iter()
            .flat_map(|set| TriadQuality::ALL.into_iter().map(move |q| TriadShape::new(set, q)))
    }
}

impl fmt::Display for TriadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.string_set.label(), self.quality)
    }
}

#[derive(Debug, Clone, Copy)]
struct TemplateNote {
    string: u8,
    offset: i8,
    interval: TriadInterval,
    finger: u8,
}

#[derive(Debug)]
struct TriadTemplate {
    root_string: u8,
    /// Lowest string first
    notes: [TemplateNote; 3],
}

const fn t(string: u8, offset: i8, interval: TriadInterval, finger: u8) -> TemplateNote {
    TemplateNote {
        string,
        offset,
        interval,
        finger,
    }
}

const fn shape(root_string: u8, notes: [TemplateNote; 3]) -> TriadTemplate {
    TriadTemplate { root_string, notes }
}

use TriadInterval::{
    AugmentedFifth as Aug5, DiminishedFifth as Dim5, MajorThird as Maj3, MinorThird as Min3,
    PerfectFifth as P5, Root as R,
};

/// Indexed by [inversion][shape index]
#[rustfmt::skip]
static TEMPLATES: [[TriadTemplate; TriadShape::COUNT]; 3] = [
    // root position
    [
        shape(5, [t(5, 0, R, 4), t(4, -1, Maj3, 3), t(3, -3, P5, 1)]), // E-A-D major
        shape(5, [t(5, 0, R, 4), t(4, -2, Min3, 2), t(3, -3, P5, 1)]), // E-A-D minor
        shape(5, [t(5, 0, R, 4), t(4, -2, Min3, 3), t(3, -4, Dim5, 1)]), // E-A-D diminished
        shape(5, [t(5, 0, R, 3), t(4, -1, Maj3, 2), t(3, -2, Aug5, 1)]), // E-A-D augmented
        shape(4, [t(4, 0, R, 4), t(3, -1, Maj3, 3), t(2, -3, P5, 1)]), // A-D-G major
        shape(4, [t(4, 0, R, 4), t(3, -2, Min3, 2), t(2, -3, P5, 1)]), // A-D-G minor
        shape(4, [t(4, 0, R, 4), t(3, -2, Min3, 3), t(2, -4, Dim5, 1)]), // A-D-G diminished
        shape(4, [t(4, 0, R, 3), t(3, -1, Maj3, 2), t(2, -2, Aug5, 1)]), // A-D-G augmented
        shape(3, [t(3, 0, R, 3), t(2, -1, Maj3, 2), t(1, -2, P5, 1)]), // D-G-B major
        shape(3, [t(3, 0, R, 3), t(2, -2, Min3, 1), t(1, -2, P5, 1)]), // D-G-B minor
        shape(3, [t(3, 0, R, 4), t(2, -2, Min3, 2), t(1, -3, Dim5, 1)]), // D-G-B diminished
        shape(3, [t(3, 0, R, 2), t(2, -1, Maj3, 1), t(1, -1, Aug5, 1)]), // D-G-B augmented
        shape(2, [t(2, 0, R, 3), t(1, 0, Maj3, 3), t(0, -2, P5, 1)]), // G-B-E major
        shape(2, [t(2, 0, R, 3), t(1, -1, Min3, 2), t(0, -2, P5, 1)]), // G-B-E minor
        shape(2, [t(2, 0, R, 4), t(1, -1, Min3, 3), t(0, -3, Dim5, 1)]), // G-B-E diminished
        shape(2, [t(2, 0, R, 2), t(1, 0, Maj3, 2), t(0, -1, Aug5, 1)]), // G-B-E augmented
    ],
    // first inversion
    [
        shape(3, [t(5, 2, Maj3, 3), t(4, 0, P5, 1), t(3, 0, R, 1)]), // E-A-D major
        shape(3, [t(5, 1, Min3, 2), t(4, 0, P5, 1), t(3, 0, R, 1)]), // E-A-D minor
        shape(3, [t(5, 1, Min3, 3), t(4, -1, Dim5, 1), t(3, 0, R, 2)]), // E-A-D diminished
        shape(3, [t(5, 2, Maj3, 3), t(4, 1, Aug5, 2), t(3, 0, R, 1)]), // E-A-D augmented
        shape(2, [t(4, 2, Maj3, 3), t(3, 0, P5, 1), t(2, 0, R, 1)]), // A-D-G major
        shape(2, [t(4, 1, Min3, 2), t(3, 0, P5, 1), t(2, 0, R, 1)]), // A-D-G minor
        shape(2, [t(4, 1, Min3, 3), t(3, -1, Dim5, 1), t(2, 0, R, 2)]), // A-D-G diminished
        shape(2, [t(4, 2, Maj3, 3), t(3, 1, Aug5, 2), t(2, 0, R, 1)]), // A-D-G augmented
        shape(1, [t(3, 1, Maj3, 3), t(2, -1, P5, 1), t(1, 0, R, 2)]), // D-G-B major
        shape(1, [t(3, 0, Min3, 2), t(2, -1, P5, 1), t(1, 0, R, 2)]), // D-G-B minor
        shape(1, [t(3, 0, Min3, 3), t(2, -2, Dim5, 1), t(1, 0, R, 3)]), // D-G-B diminished
        shape(1, [t(3, 1, Maj3, 2), t(2, 0, Aug5, 1), t(1, 0, R, 1)]), // D-G-B augmented
        shape(0, [t(2, 1, Maj3, 2), t(1, 0, P5, 1), t(0, 0, R, 1)]), // G-B-E major
        shape(0, [t(2, 0, Min3, 1), t(1, 0, P5, 1), t(0, 0, R, 1)]), // G-B-E minor
        shape(0, [t(2, 0, Min3, 2), t(1, -1, Dim5, 1), t(0, 0, R, 2)]), // G-B-E diminished
        shape(0, [t(2, 1, Maj3, 2), t(1, 1, Aug5, 2), t(0, 0, R, 1)]), // G-B-E augmented
    ],
    // second inversion
    [
        shape(4, [t(5, 0, P5, 2), t(4, 0, R, 2), t(3, -1, Maj3, 1)]), // E-A-D major
        shape(4, [t(5, 0, P5, 3), t(4, 0, R, 3), t(3, -2, Min3, 1)]), // E-A-D minor
        shape(4, [t(5, -1, Dim5, 2), t(4, 0, R, 3), t(3, -2, Min3, 1)]), // E-A-D diminished
        shape(4, [t(5, 1, Aug5, 3), t(4, 0, R, 2), t(3, -1, Maj3, 1)]), // E-A-D augmented
        shape(3, [t(4, 0, P5, 2), t(3, 0, R, 2), t(2, -1, Maj3, 1)]), // A-D-G major
        shape(3, [t(4, 0, P5, 3), t(3, 0, R, 3), t(2, -2, Min3, 1)]), // A-D-G minor
        shape(3, [t(4, -1, Dim5, 2), t(3, 0, R, 3), t(2, -2, Min3, 1)]), // A-D-G diminished
        shape(3, [t(4, 1, Aug5, 3), t(3, 0, R, 2), t(2, -1, Maj3, 1)]), // A-D-G augmented
        shape(2, [t(3, 0, P5, 1), t(2, 0, R, 1), t(1, 0, Maj3, 1)]), // D-G-B major
        shape(2, [t(3, 0, P5, 2), t(2, 0, R, 2), t(1, -1, Min3, 1)]), // D-G-B minor
        shape(2, [t(3, -1, Dim5, 1), t(2, 0, R, 2), t(1, -1, Min3, 1)]), // D-G-B diminished
        shape(2, [t(3, 1, Aug5, 2), t(2, 0, R, 1), t(1, 0, Maj3, 1)]), // D-G-B augmented
        shape(1, [t(2, -1, P5, 1), t(1, 0, R, 2), t(0, -1, Maj3, 1)]), // G-B-E major
        shape(1, [t(2, -1, P5, 2), t(1, 0, R, 3), t(0, -2, Min3, 1)]), // G-B-E minor
        shape(1, [t(2, -2, Dim5, 1), t(1, 0, R, 3), t(0, -2, Min3, 1)]), // G-B-E diminished
        shape(1, [t(2, 0, Aug5, 2), t(1, 0, R, 2), t(0, -1, Maj3, 1)]), // G-B-E augmented
    ],
];

fn template(inversion: Inversion, shape: TriadShape) -> &'static TriadTemplate {
    &TEMPLATES[inversion.index()][shape.index()]
}

/// A placed triad note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriadNote {
    pub string: u8,
    pub fret: u8,
    pub interval: TriadInterval,
    pub finger: u8,
    /// Spelled from the root's letter (e.g. E♭ in C minor)
    pub note_name: String,
    pub is_root: bool,
}

/// One placement of a triad on the neck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriadVoicing {
    pub inversion: Inversion,
    pub shape: TriadShape,
    /// Lowest string first
    pub notes: Vec<TriadNote>,
}

impl TriadVoicing {
    pub fn root_fret(&self) -> Option<u8> {
        self.notes.iter().find(|note| note.is_root).map(|note| note.fret)
    }

    pub fn min_fret(&self) -> u8 {
        self.notes.iter().map(|note| note.fret).min().unwrap_or(0)
    }
}

/// Every placement of the triad that fits within frets 0-19: none, one, or
/// two an octave apart.
pub fn positions_for(root: Note, inversion: Inversion, shape: TriadShape) -> Vec<TriadVoicing> {
    let template = template(inversion, shape);
    let base = Tuning::STANDARD.fret_of(template.root_string, root) as i16;

    let voicings: Vec<TriadVoicing> = [base, base + 12]
        .into_iter()
        .filter_map(|root_fret| place(root, inversion, shape, template, root_fret))
        .collect();

    if voicings.is_empty() {
        debug!(?root, ?inversion, %shape, "triad has no placement on the neck");
    }
    voicings
}

fn place(
    root: Note,
    inversion: Inversion,
    shape: TriadShape,
    template: &TriadTemplate,
    root_fret: i16,
) -> Option<TriadVoicing> {
    let mut notes = Vec::with_capacity(3);
    for note in &template.notes {
        let fret = root_fret + note.offset as i16;
        if !(0..=MAX_FRET as i16).contains(&fret) {
            return None;
        }
        notes.push(TriadNote {
            string: note.string,
            fret: fret as u8,
            interval: note.interval,
            finger: note.finger,
            note_name: harmony::spell_above(
                root,
                note.interval.letter_steps(),
                note.interval.semitones(),
            ),
            is_root: note.interval == TriadInterval::Root,
        });
    }
    Some(TriadVoicing {
        inversion,
        shape,
        notes,
    })
}

/// The triad note at (string, fret), from any placement
pub fn info_at(
    string: u8,
    fret: u8,
    root: Note,
    inversion: Inversion,
    shape: TriadShape,
) -> Option<TriadNote> {
    positions_for(root, inversion, shape)
        .into_iter()
        .flat_map(|voicing| voicing.notes)
        .find(|note| note.string == string && note.fret == fret)
}
