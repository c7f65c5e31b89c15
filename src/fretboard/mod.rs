// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard pattern engines.
//!
//! Each engine turns a key plus a few small selectors into absolute
//! (string, fret) positions from a fixed template table:
//! - Seven major-scale forms and the One-Fret-Rule
//! - Two-octave diagonal pentatonic patterns
//! - The five CAGED shapes
//! - 48 close-voiced triads
//!
//! The overlay composes them into render markers per training mode.

pub mod caged;
pub mod overlay;
pub mod pentatonic;
pub mod positions;
pub mod triads;

pub use caged::{CagedInfo, CagedNote, CagedShape, CagedVoicing, ChordTone, ShapeFilter};
pub use overlay::{markers, Emphasis, Marker, Selection, TrainingMode};
pub use pentatonic::{diagonal_pentatonic, DiagonalNote, DiagonalPhase, DiagonalSet};
pub use positions::{
    is_in_position, one_fret_rule, position_fret, position_notes, root_for_position, PositionNote,
    ScaleForm,
};
pub use triads::{
    Inversion, StringSet, TriadInterval, TriadNote, TriadQuality, TriadShape, TriadVoicing,
};
