// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! CAGED chord shapes.
//!
//! Five open-chord templates, each stored relative to its lowest fret, tile
//! the neck in C-A-G-E-D order. A shape's lowest fret is the E-shape root on
//! the low E string plus a fixed per-letter offset, wrapped into one octave.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::music::{Note, Tuning, LOW_STRING};

/// CAGED shapes are only taught below this fret
pub const CAGED_MAX_FRET: u8 = 15;

/// Chord tone role within a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChordTone {
    #[serde(rename = "R")]
    Root,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "5")]
    Fifth,
}

impl ChordTone {
    pub fn label(self) -> &'static str {
        match self {
            ChordTone::Root => "R",
            ChordTone::Third => "3",
            ChordTone::Fifth => "5",
        }
    }

    /// Scale degree of this chord tone in the major key
    pub fn degree(self) -> u8 {
        match self {
            ChordTone::Root => 1,
            ChordTone::Third => 3,
            ChordTone::Fifth => 5,
        }
    }
}

/// The five shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CagedShape {
    C,
    A,
    G,
    E,
    D,
}

impl CagedShape {
    /// Shapes in CAGED order; also the tie-break order for overlapping shapes
    pub const ALL: [CagedShape; 5] = [
        CagedShape::C,
        CagedShape::A,
        CagedShape::G,
        CagedShape::E,
        CagedShape::D,
    ];

    pub fn letter(self) -> char {
        match self {
            CagedShape::C => 'C',
            CagedShape::A => 'A',
            CagedShape::G => 'G',
            CagedShape::E => 'E',
            CagedShape::D => 'D',
        }
    }

    fn template(self) -> &'static ShapeTemplate {
        &SHAPES[self as usize]
    }
}

impl fmt::Display for CagedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shape", self.letter())
    }
}

impl FromStr for CagedShape {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(CagedShape::C),
            "A" => Ok(CagedShape::A),
            "G" => Ok(CagedShape::G),
            "E" => Ok(CagedShape::E),
            "D" => Ok(CagedShape::D),
            _ => Err(TheoryError::CagedShape(s.to_string())),
        }
    }
}

/// Which shapes a lookup considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeFilter {
    #[default]
    All,
    Only(CagedShape),
}

impl ShapeFilter {
    pub fn includes(self, shape: CagedShape) -> bool {
        match self {
            ShapeFilter::All => true,
            ShapeFilter::Only(only) => only == shape,
        }
    }
}

impl FromStr for ShapeFilter {
    type Err = TheoryError;

    /// "all" or a single shape letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ShapeFilter::All)
        } else {
            s.parse().map(ShapeFilter::Only)
        }
    }
}

struct ShapeTemplate {
    /// Frets above the E-shape root where this shape starts
    neck_offset: u8,
    /// (string, offset, tone)
    chord_tones: &'static [(u8, u8, ChordTone)],
    /// (string, offset, degree)
    scale_tones: &'static [(u8, u8, u8)],
}

use ChordTone::{Fifth as T5, Root as R, Third as T3};

#[rustfmt::skip]
static SHAPES: [ShapeTemplate; 5] = [
    // C
    ShapeTemplate {
        neck_offset: 4,
        chord_tones: &[(4, 3, R), (3, 2, T3), (2, 0, T5), (1, 1, R), (0, 0, T3)],
        scale_tones: &[
            (5, 1, 4), (4, 0, 6), (4, 2, 7), (3, 0, 2), (3, 3, 4),
            (2, 2, 6), (1, 0, 7), (1, 3, 2), (0, 1, 4),
        ],
    },
    // A
    ShapeTemplate {
        neck_offset: 7,
        chord_tones: &[(4, 0, R), (3, 2, T5), (2, 2, R), (1, 2, T3), (0, 0, T5)],
        scale_tones: &[
            (5, 2, 6), (4, 2, 2), (3, 0, 4), (2, 1, 7), (1, 0, 2),
            (1, 3, 4), (0, 2, 6),
        ],
    },
    // G
    ShapeTemplate {
        neck_offset: 9,
        chord_tones: &[(5, 3, R), (4, 2, T3), (3, 0, T5), (2, 0, R), (1, 0, T3), (0, 3, R)],
        scale_tones: &[
            (5, 0, 6), (5, 2, 7), (4, 0, 2), (4, 3, 4), (3, 2, 6),
            (2, 2, 2), (1, 1, 4), (0, 0, 6), (0, 2, 7),
        ],
    },
    // E
    ShapeTemplate {
        neck_offset: 0,
        chord_tones: &[(5, 0, R), (4, 2, T5), (3, 2, R), (2, 1, T3), (1, 0, T5), (0, 0, R)],
        scale_tones: &[(5, 2, 2), (4, 0, 4), (3, 1, 7), (2, 2, 4), (1, 2, 6), (0, 2, 2)],
    },
    // D
    ShapeTemplate {
        neck_offset: 2,
        chord_tones: &[(3, 0, R), (2, 2, T5), (1, 3, R), (0, 2, T3)],
        scale_tones: &[
            (5, 0, 2), (5, 3, 4), (4, 2, 6), (3, 2, 2), (2, 0, 4),
            (1, 0, 6), (1, 2, 7), (0, 0, 2), (0, 3, 4),
        ],
    },
];

/// A placed note of a CAGED shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CagedNote {
    pub string: u8,
    pub fret: u8,
    pub degree: u8,
    /// Set for chord tones, `None` for surrounding scale tones
    pub tone: Option<ChordTone>,
}

impl CagedNote {
    pub fn is_chord_tone(&self) -> bool {
        self.tone.is_some()
    }
}

/// One shape placed for a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CagedVoicing {
    pub shape: CagedShape,
    pub anchor_fret: u8,
    pub chord_tones: Vec<CagedNote>,
    pub scale_tones: Vec<CagedNote>,
}

/// Result of a coordinate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CagedInfo {
    pub shape: CagedShape,
    pub note: CagedNote,
}

/// Lowest fret of `shape` in the key of `root`
pub fn anchor_fret(root: Note, shape: CagedShape) -> u8 {
    let e_root = Tuning::STANDARD.fret_of(LOW_STRING, root);
    (e_root + shape.template().neck_offset) % 12
}

/// Place one shape for `root`, dropping notes past [`CAGED_MAX_FRET`]
pub fn voicing(root: Note, shape: CagedShape) -> CagedVoicing {
    let template = shape.template();
    let anchor = anchor_fret(root, shape);

    let chord_tones = template
        .chord_tones
        .iter()
        .map(|&(string, offset, tone)| CagedNote {
            string,
            fret: anchor + offset,
            degree: tone.degree(),
            tone: Some(tone),
        })
        .filter(|note| note.fret <= CAGED_MAX_FRET)
        .collect();

    let scale_tones = template
        .scale_tones
        .iter()
        .map(|&(string, offset, degree)| CagedNote {
            string,
            fret: anchor + offset,
            degree,
            tone: None,
        })
        .filter(|note| note.fret <= CAGED_MAX_FRET)
        .collect();

    CagedVoicing {
        shape,
        anchor_fret: anchor,
        chord_tones,
        scale_tones,
    }
}

/// All five shapes for `root`, in CAGED order
pub fn shapes_for(root: Note) -> Vec<CagedVoicing> {
    CagedShape::ALL.iter().map(|&shape| voicing(root, shape)).collect()
}

/// What the selected shapes place at (string, fret).
///
/// Shapes are checked in CAGED order and the first match wins; within a
/// shape chord tones are checked before scale tones.
pub fn info_at(string: u8, fret: u8, root: Note, filter: ShapeFilter) -> Option<CagedInfo> {
    CagedShape::ALL
        .iter()
        .filter(|&&shape| filter.includes(shape))
        .find_map(|&shape| {
            let placed = voicing(root, shape);
            placed
                .chord_tones
                .iter()
                .chain(placed.scale_tones.iter())
                .find(|note| note.string == string && note.fret == fret)
                .map(|&note| CagedInfo { shape, note })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Key;

    #[test]
    fn test_templates_sound_their_degrees() {
        for root in Note::ALL {
            let key = Key::major(root);
            for placed in shapes_for(root) {
                for note in placed.chord_tones.iter().chain(&placed.scale_tones) {
                    let sounding = Tuning::STANDARD.note_at(note.string, note.fret);
                    assert_eq!(key.degree_of(sounding), Some(note.degree), "{}", placed.shape);
                }
            }
        }
    }

    #[test]
    fn test_anchor_frets_c_major() {
        assert_eq!(anchor_fret(Note::C, CagedShape::C), 0);
        assert_eq!(anchor_fret(Note::C, CagedShape::A), 3);
        assert_eq!(anchor_fret(Note::C, CagedShape::G), 5);
        assert_eq!(anchor_fret(Note::C, CagedShape::E), 8);
        assert_eq!(anchor_fret(Note::C, CagedShape::D), 10);
    }

    #[test]
    fn test_anchor_frets_wrap() {
        // In E the E shape is open and the others follow in CAGED order
        assert_eq!(anchor_fret(Note::E, CagedShape::E), 0);
        assert_eq!(anchor_fret(Note::E, CagedShape::D), 2);
        assert_eq!(anchor_fret(Note::E, CagedShape::C), 4);
        assert_eq!(anchor_fret(Note::E, CagedShape::A), 7);
        assert_eq!(anchor_fret(Note::E, CagedShape::G), 9);
    }

    #[test]
    fn test_open_c_chord() {
        let c = voicing(Note::C, CagedShape::C);
        let frets: Vec<(u8, u8)> = c.chord_tones.iter().map(|n| (n.string, n.fret)).collect();
        assert_eq!(frets, vec![(4, 3), (3, 2), (2, 0), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("g".parse::<CagedShape>(), Ok(CagedShape::G));
        assert_eq!("all".parse::<ShapeFilter>(), Ok(ShapeFilter::All));
        assert_eq!("D".parse::<ShapeFilter>(), Ok(ShapeFilter::Only(CagedShape::D)));
        assert!("X".parse::<ShapeFilter>().is_err());
    }

    #[test]
    fn test_info_at_chord_tone() {
        let info = info_at(4, 3, Note::C, ShapeFilter::All).unwrap();
        // Both the C and A shapes claim the A string root; C comes first
        assert_eq!(info.shape, CagedShape::C);
        assert_eq!(info.note.tone, Some(ChordTone::Root));

        let info = info_at(4, 3, Note::C, ShapeFilter::Only(CagedShape::A)).unwrap();
        assert_eq!(info.shape, CagedShape::A);
        assert!(info.note.is_chord_tone());
    }

    #[test]
    fn test_info_at_scale_tone() {
        // D on the B string, 3rd fret, inside the C shape
        let info = info_at(1, 3, Note::C, ShapeFilter::Only(CagedShape::C)).unwrap();
        assert_eq!(info.note.degree, 2);
        assert_eq!(info.note.tone, None);
    }

    #[test]
    fn test_info_at_miss() {
        // C# is not in C major
        assert_eq!(info_at(1, 2, Note::C, ShapeFilter::All), None);
        // Valid note, wrong shape
        assert_eq!(info_at(5, 8, Note::C, ShapeFilter::Only(CagedShape::C)), None);
    }

    #[test]
    fn test_shapes_stay_below_fifteenth_fret() {
        // Highest case: B, where the C shape starts at fret 11
        assert_eq!(anchor_fret(Note::B, CagedShape::C), 11);
        for root in Note::ALL {
            for placed in shapes_for(root) {
                assert!(placed
                    .chord_tones
                    .iter()
                    .chain(&placed.scale_tones)
                    .all(|n| n.fret <= CAGED_MAX_FRET));
            }
        }
    }
}
