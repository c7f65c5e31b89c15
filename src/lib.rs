// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretwise: guitar fretboard theory engine.
//!
//! Maps major keys onto the standard-tuned neck as scale forms, diagonal
//! pentatonic patterns, CAGED shapes and close-voiced triads, and builds
//! note-finding quizzes over a filtered part of the neck. Every engine
//! function is pure; the binary and any UI hold their own state.

pub mod config;
pub mod error;
pub mod fretboard;
pub mod music;
pub mod quiz;

pub use error::TheoryError;
