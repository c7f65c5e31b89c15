// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the fretboard engines.
//!
//! Engine operations themselves never fail: every "no answer" is an empty
//! list or `None`. Errors only come from turning raw indices and names into
//! the typed selectors the engines accept.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Scale form index outside 0-6.
    #[error("Scale form index {0} out of range (expected 0-6)")]
    FormIndex(usize),

    /// Triad inversion index outside 0-2.
    #[error("Triad inversion index {0} out of range (expected 0-2)")]
    InversionIndex(usize),

    /// Triad shape index outside 0-15.
    #[error("Triad shape index {0} out of range (expected 0-15)")]
    TriadShapeIndex(usize),

    /// CAGED letter that is not one of C, A, G, E, D (or "all").
    #[error("Unknown CAGED shape: {0}")]
    CagedShape(String),

    /// Note name that could not be parsed.
    #[error("Unknown note name: {0}")]
    NoteName(String),

    /// Fret region that is reversed or runs past the last fret.
    #[error("Invalid fret region {start}-{end} (frets run 0-{max})", max = crate::music::MAX_FRET)]
    FretRegion { start: u8, end: u8 },

    /// First-finger fret past the last fret of the neck.
    #[error("Position fret {fret} out of range (frets run 0-{max})", max = crate::music::MAX_FRET)]
    PositionFret { fret: u8 },
}
