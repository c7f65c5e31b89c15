// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for the fretboard trainer.
//!
//! This module provides the pitch-class model, major keys, standard
//! tuning and the spelling/harmonization tables the engines label with.

pub mod harmony;
pub mod scale;
pub mod tuning;

pub use harmony::{harmonize, interval_label, ChordQuality, HarmonizedChord, Interval};
pub use scale::{Key, Note, PitchClass, Semitones, MAJOR_STEPS};
pub use tuning::{pitch_class_at, FretPosition, Tuning, LOW_STRING, MAX_FRET, STRING_COUNT};
