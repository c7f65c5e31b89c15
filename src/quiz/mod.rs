// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Quiz generation over a filtered part of the neck.
//!
//! Generators are pure apart from the RNG the caller passes in, and return
//! `None` when the filter leaves nothing to ask about. The caller holds the
//! quiz between question and answer.

pub mod find;
pub mod identify;
pub mod interval;

pub use find::FindNoteQuiz;
pub use identify::{GridScore, IdentifyNoteQuiz};
pub use interval::IntervalQuiz;

use serde::Serialize;

use crate::error::TheoryError;
use crate::music::{FretPosition, Key, MAX_FRET, STRING_COUNT};

/// Inclusive range of frets a quiz may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretRegion {
    start: u8,
    end: u8,
}

impl FretRegion {
    pub fn new(start: u8, end: u8) -> Result<Self, TheoryError> {
        if start > end || end > MAX_FRET {
            return Err(TheoryError::FretRegion { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole neck
    pub fn full() -> Self {
        Self {
            start: 0,
            end: MAX_FRET,
        }
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, fret: u8) -> bool {
        (self.start..=self.end).contains(&fret)
    }
}

impl Default for FretRegion {
    fn default() -> Self {
        Self::full()
    }
}

/// Fret region plus the strings that are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuizFilter {
    pub region: FretRegion,
    /// Indexed by string, 0 = high E
    pub strings: [bool; STRING_COUNT as usize],
}

impl QuizFilter {
    pub fn new(region: FretRegion) -> Self {
        Self {
            region,
            strings: [true; STRING_COUNT as usize],
        }
    }

    /// The whole neck, every string
    pub fn full() -> Self {
        Self::new(FretRegion::full())
    }

    pub fn allows(&self, position: FretPosition) -> bool {
        self.region.contains(position.fret)
            && self
                .strings
                .get(position.string as usize)
                .copied()
                .unwrap_or(false)
    }

    /// Every cell inside the filter
    pub fn cells(&self) -> impl Iterator<Item = FretPosition> + '_ {
        FretPosition::all().filter(move |&pos| self.allows(pos))
    }

    /// Cells inside the filter whose note belongs to `key`
    pub fn candidates(&self, key: &Key) -> Vec<FretPosition> {
        self.cells().filter(|pos| key.contains(pos.note())).collect()
    }
}

impl Default for QuizFilter {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Note;

    #[test]
    fn test_fret_region_validation() {
        assert!(FretRegion::new(0, 19).is_ok());
        assert!(FretRegion::new(5, 5).is_ok());
        assert_eq!(
            FretRegion::new(7, 3),
            Err(TheoryError::FretRegion { start: 7, end: 3 })
        );
        assert_eq!(
            FretRegion::new(0, 20),
            Err(TheoryError::FretRegion { start: 0, end: 20 })
        );
    }

    #[test]
    fn test_full_filter_candidates() {
        let key = Key::major(Note::C);
        let filter = QuizFilter::full();
        assert_eq!(filter.cells().count(), 120);
        let in_key = FretPosition::all().filter(|p| key.contains(p.note())).count();
        assert_eq!(filter.candidates(&key).len(), in_key);
        assert_eq!(in_key, 72);
    }

    #[test]
    fn test_filter_by_region_and_string() {
        let key = Key::major(Note::G);
        let mut filter = QuizFilter::new(FretRegion::new(0, 4).unwrap());
        filter.strings = [false, false, false, false, false, true];

        // Low E frets 0-4 sound E F F♯ G G♯; only E, F♯ and G are in G major
        let candidates = filter.candidates(&key);
        let frets: Vec<u8> = candidates.iter().map(|p| p.fret).collect();
        assert_eq!(frets, vec![0, 2, 3]);
        assert!(candidates.iter().all(|p| p.string == 5));
    }

    #[test]
    fn test_no_strings_no_candidates() {
        let mut filter = QuizFilter::full();
        filter.strings = [false; 6];
        assert!(filter.candidates(&Key::major(Note::C)).is_empty());
    }
}
